use crate::config::ReportConfig;
use crate::db::{LatencyRow, MessageSizeRow, Record, ThroughputRow};
use crate::error::PlotError;
use crate::figure::Figure;
use crate::key::{ConfigKey, EnumerationMode, MetricKind};
use crate::render::Render;
use crate::select::Selector;
use std::path::PathBuf;

/// What a report run produced.
#[derive(Debug, Default)]
pub struct ReportOutcome {
    /// figures written, in mode order
    pub written: Vec<PathBuf>,
    /// cells whose log could not be loaded; their panels are left empty
    pub skipped: Vec<(ConfigKey, PlotError)>,
    /// modes whose figure could not be written
    pub failed: Vec<(EnumerationMode, PlotError)>,
}

impl ReportOutcome {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }

    fn extend(&mut self, other: ReportOutcome) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
    }
}

/// Drives the comparison matrix: one figure per enumeration mode, one row
/// per segment size.
pub struct Report {
    config: ReportConfig,
}

impl Report {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Output path of the `kind` figure of `mode`.
    pub fn output_path(
        &self,
        kind: MetricKind,
        mode: EnumerationMode,
        extension: &str,
    ) -> PathBuf {
        self.config.plot_dir().join(format!(
            "{}_{}.{}",
            kind.token(),
            mode.code(),
            extension
        ))
    }

    pub fn run<F: Render>(
        &self,
        kind: MetricKind,
        renderer: &mut F,
    ) -> ReportOutcome {
        match kind {
            MetricKind::Latency => self.run_schema::<LatencyRow, F>(renderer),
            MetricKind::MessageSize => {
                self.run_schema::<MessageSizeRow, F>(renderer)
            }
            MetricKind::Throughput => {
                self.run_schema::<ThroughputRow, F>(renderer)
            }
        }
    }

    /// Runs the reports of every metric kind.
    pub fn run_all<F: Render>(&self, renderer: &mut F) -> ReportOutcome {
        let mut outcome = ReportOutcome::default();
        for kind in MetricKind::all() {
            outcome.extend(self.run(kind, renderer));
        }
        outcome
    }

    fn run_schema<R: Record, F: Render>(
        &self,
        renderer: &mut F,
    ) -> ReportOutcome {
        let selector = Selector::new(&self.config);
        let segment_sizes = self.config.segment_sizes();
        let mut outcome = ReportOutcome::default();

        for &mode in self.config.modes() {
            // a fresh figure per mode
            let mut figure =
                Figure::for_report(R::KIND, mode, segment_sizes.len());
            for (row, &k) in segment_sizes.iter().enumerate() {
                match selector.select::<R>(k, mode) {
                    Ok(selection) => figure.compose_row(row, &selection),
                    Err(e) => {
                        tracing::warn!("skipping k = {} ({}): {}", k, mode, e);
                        figure.empty_row(row, R::KIND, k, mode);
                        outcome.skipped.push((ConfigKey::new(R::KIND, k, mode), e));
                    }
                }
            }

            let path = self.output_path(R::KIND, mode, renderer.extension());
            match renderer.render(&figure, &path) {
                Ok(()) => {
                    tracing::info!("{} written", path.display());
                    outcome.written.push(path);
                }
                Err(e) => {
                    tracing::error!("{} report for {} failed: {}", R::KIND, mode, e);
                    outcome.failed.push((mode, e));
                }
            }
        }
        outcome
    }
}
