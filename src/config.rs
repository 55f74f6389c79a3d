use crate::key::{EnumerationMode, SEGMENT_SIZES};
use std::path::{Path, PathBuf};

/// Field separator of the input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Space,
    Tab,
    Comma,
}

impl Delimiter {
    pub fn byte(&self) -> u8 {
        match self {
            Self::Space => b' ',
            Self::Tab => b'\t',
            Self::Comma => b',',
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        // all benchmark logs are written with a single space
        Self::Space
    }
}

/// Image format of the rendered figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpg,
    Png,
    Pdf,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }
}

impl Default for ImageFormat {
    fn default() -> Self {
        Self::Jpg
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// directory with the benchmark logs
    data_dir: PathBuf,
    /// directory where figures are written
    plot_dir: PathBuf,
    /// separator used in the benchmark logs
    delimiter: Delimiter,
    /// format of the figures
    format: ImageFormat,
    /// segment sizes, one figure row each
    segment_sizes: Vec<usize>,
    /// enumeration modes, one figure each
    modes: Vec<EnumerationMode>,
}

impl ReportConfig {
    /// Create a new `ReportConfig` reading from `data_dir` and writing to
    /// `plot_dir`.
    pub fn new(data_dir: impl Into<PathBuf>, plot_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            plot_dir: plot_dir.into(),
            delimiter: Delimiter::default(),
            format: ImageFormat::default(),
            segment_sizes: SEGMENT_SIZES.to_vec(),
            modes: EnumerationMode::all().to_vec(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn plot_dir(&self) -> &Path {
        &self.plot_dir
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.delimiter = delimiter;
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn set_format(&mut self, format: ImageFormat) {
        self.format = format;
    }

    pub fn segment_sizes(&self) -> &[usize] {
        &self.segment_sizes
    }

    pub fn set_segment_sizes(&mut self, segment_sizes: Vec<usize>) {
        self.segment_sizes = segment_sizes;
    }

    pub fn modes(&self) -> &[EnumerationMode] {
        &self.modes
    }

    pub fn set_modes(&mut self, modes: Vec<EnumerationMode>) {
        self.modes = modes;
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new("data", "plots")
    }
}
