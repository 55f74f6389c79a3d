// This module contains the definition of `PlotError`.
pub mod error;

// This module contains the definition of `MetricKind`, `EnumerationMode` and
// `ConfigKey`, and the naming of input files.
pub mod key;

// This module contains the definition of `ReportConfig`.
pub mod config;

// This module contains the row schemas of each benchmark log, the `Table`
// they are loaded into, and the loader itself.
pub mod db;

// This module contains the definition of `Series`.
pub mod series;

// This module contains the definition of `Selector`.
pub mod select;

// This module contains the labels and styles used in figures.
pub mod fmt;

// This module contains the definition of `Figure` and `Panel`.
pub mod figure;

// This module contains the `Render` trait and its implementations.
pub mod render;

// This module contains the definition of `Report`.
pub mod report;

// This module contains thin wrappers around matplotlib.
#[cfg(feature = "pyo3")]
pub mod plot;

// Re-exports.
pub use config::{Delimiter, ImageFormat, ReportConfig};
pub use error::PlotError;
pub use figure::{Figure, Panel};
pub use fmt::PlotFmt;
pub use key::{ConfigKey, EnumerationMode, MetricKind, SEGMENT_SIZES};
pub use render::{CsvDump, Render};
pub use report::{Report, ReportOutcome};
pub use series::Series;

#[cfg(feature = "pyo3")]
pub use render::Matplotlib;

/// Installs a `tracing` subscriber filtered by `RUST_LOG`.
pub fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
