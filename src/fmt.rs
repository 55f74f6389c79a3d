use crate::key::{EnumerationMode, MetricKind};

pub struct PlotFmt;

impl PlotFmt {
    pub fn figure_title(kind: MetricKind, mode: EnumerationMode) -> String {
        match kind {
            // latency and message size panels already carry the mode
            MetricKind::Latency | MetricKind::MessageSize => String::new(),
            MetricKind::Throughput => format!("enumeration: {}", mode.name()),
        }
    }

    pub fn panel_title(
        kind: MetricKind,
        column: usize,
        k: usize,
        mode: EnumerationMode,
    ) -> String {
        match (kind, column) {
            (MetricKind::Latency, 0) | (MetricKind::MessageSize, 0) => {
                format!("k = {}, enumeration: {}", k, mode.name())
            }
            (MetricKind::MessageSize, 1) => format!("amplification (k = {})", k),
            (MetricKind::Throughput, 0) => format!("throughput (k = {})", k),
            (MetricKind::Throughput, 1) => format!("memory (k = {})", k),
            _ => panic!(
                "PlotFmt::panel_title: kind = {:?} and column = {} combination not supported!",
                kind, column
            ),
        }
    }

    pub fn x_label(kind: MetricKind) -> &'static str {
        match kind {
            MetricKind::Latency | MetricKind::MessageSize => "hops per segment",
            MetricKind::Throughput => "workers",
        }
    }

    pub fn y_label(kind: MetricKind, column: usize) -> &'static str {
        match (kind, column) {
            (MetricKind::Latency, 0) => "duration [ms]",
            (MetricKind::MessageSize, 0) => "data volume [KiB]",
            (MetricKind::MessageSize, 1) => "amplification [recv / send]",
            (MetricKind::Throughput, 0) => "throughput [neg/s]",
            (MetricKind::Throughput, 1) => "peak memory [MB]",
            _ => panic!(
                "PlotFmt::y_label: kind = {:?} and column = {} combination not supported!",
                kind, column
            ),
        }
    }

    // matplotlib's default cycle, so that lines look the same as in the old
    // python plots
    pub fn color(line: usize) -> &'static str {
        const COLORS: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];
        COLORS[line % COLORS.len()]
    }

    // Possible values: {'o', 's', 'D', '^', 'v', '.', 'x', '+'}
    pub fn marker(line: usize) -> &'static str {
        const MARKERS: [&str; 4] = ["o", "s", "D", "^"];
        MARKERS[line % MARKERS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(
            PlotFmt::panel_title(
                MetricKind::Latency,
                0,
                5,
                EnumerationMode::None
            ),
            "k = 5, enumeration: none"
        );
        assert_eq!(
            PlotFmt::panel_title(
                MetricKind::MessageSize,
                1,
                20,
                EnumerationMode::ClientSide
            ),
            "amplification (k = 20)"
        );
        assert_eq!(
            PlotFmt::panel_title(
                MetricKind::Throughput,
                1,
                10,
                EnumerationMode::ServerSide
            ),
            "memory (k = 10)"
        );
        assert_eq!(
            PlotFmt::figure_title(
                MetricKind::Throughput,
                EnumerationMode::ServerSide
            ),
            "enumeration: server-side"
        );
    }

    #[test]
    #[should_panic]
    fn latency_has_one_column() {
        PlotFmt::y_label(MetricKind::Latency, 1);
    }
}
