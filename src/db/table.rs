use crate::db::rows::Record;
use crate::series::Series;

/// Rows of one benchmark log, ordered by the independent variable.
#[derive(Debug, Clone)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Record> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Applies `metric` to every row. Non-finite results are kept as they
    /// are.
    pub fn derive(&self, metric: R::Metric) -> Series {
        self.rows
            .iter()
            .map(|row| (row.x(), row.derive(metric)))
            .collect()
    }

    /// Position of the first row whose x value does not increase, if any.
    pub(crate) fn first_unordered(&self) -> Option<usize> {
        self.rows
            .windows(2)
            // negated so that NaN counts as unordered
            .position(|pair| !(pair[0].x() < pair[1].x()))
            .map(|index| index + 1)
    }
}
