use std::fmt;
use std::path::{Path, PathBuf};

/// Segment sizes benchmarked, in the order rows are laid out in a figure.
pub const SEGMENT_SIZES: [usize; 3] = [5, 10, 20];

/// The kind of measurement stored in a table; each kind has its own schema
/// and its own chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKind {
    Latency,
    MessageSize,
    Throughput,
}

impl MetricKind {
    pub fn all() -> [MetricKind; 3] {
        [Self::Latency, Self::MessageSize, Self::Throughput]
    }

    /// Token used in input and output file names.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Latency => "latencies",
            Self::MessageSize => "message_sizes",
            Self::Throughput => "throughput",
        }
    }

    /// Number of panels per segment size: a raw view, plus the
    /// amplification or memory view when the kind has one.
    pub fn columns(&self) -> usize {
        match self {
            Self::Latency => 1,
            Self::MessageSize | Self::Throughput => 2,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Peer enumeration strategy used by the benchmarked protocol; only a label
/// selecting input files here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumerationMode {
    None,
    ClientSide,
    ServerSide,
}

impl EnumerationMode {
    pub fn all() -> [EnumerationMode; 3] {
        [Self::None, Self::ClientSide, Self::ServerSide]
    }

    pub fn code(&self) -> char {
        match self {
            Self::None => 'n',
            Self::ClientSide => 'c',
            Self::ServerSide => 's',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ClientSide => "client-side",
            Self::ServerSide => "server-side",
        }
    }
}

impl fmt::Display for EnumerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identifies one input file and the figure row it is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigKey {
    pub kind: MetricKind,
    pub k: usize,
    pub mode: EnumerationMode,
}

impl ConfigKey {
    pub fn new(kind: MetricKind, k: usize, mode: EnumerationMode) -> Self {
        Self { kind, k, mode }
    }

    /// File name following `{kind}_{k:02}_{mode-code}`.
    pub fn file_name(&self) -> String {
        format!("{}_{:02}_{}", self.kind.token(), self.k, self.mode.code())
    }

    pub fn path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} k = {} enumeration: {}", self.kind, self.k, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        let key = ConfigKey::new(MetricKind::Latency, 5, EnumerationMode::None);
        assert_eq!(key.file_name(), "latencies_05_n");

        let key = ConfigKey::new(
            MetricKind::MessageSize,
            10,
            EnumerationMode::ClientSide,
        );
        assert_eq!(key.file_name(), "message_sizes_10_c");

        let key = ConfigKey::new(
            MetricKind::Throughput,
            20,
            EnumerationMode::ServerSide,
        );
        assert_eq!(
            key.path(Path::new("data")),
            PathBuf::from("data/throughput_20_s")
        );
    }

    #[test]
    fn columns() {
        assert_eq!(MetricKind::Latency.columns(), 1);
        assert_eq!(MetricKind::MessageSize.columns(), 2);
        assert_eq!(MetricKind::Throughput.columns(), 2);
    }
}
