mod loader;
mod rows;
mod table;

// Re-exports.
pub use loader::load_table;
pub use rows::{
    LatencyMetric, LatencyRow, MessageSizeMetric, MessageSizeRow, MetricView,
    Record, ThroughputMetric, ThroughputRow,
};
pub use table::Table;
