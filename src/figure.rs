use crate::db::{MetricView, Record};
use crate::fmt::PlotFmt;
use crate::key::{EnumerationMode, MetricKind};
use crate::select::Selection;
use crate::series::Series;

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub label: Option<&'static str>,
    pub series: Series,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub lines: Vec<Line>,
    pub grid: bool,
}

impl Panel {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            lines: Vec::new(),
            // every panel gets a grid overlay
            grid: true,
        }
    }

    pub fn line(&mut self, label: Option<&'static str>, series: Series) {
        self.lines.push(Line { label, series });
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A grid of panels stored in row-major order.
///
/// Each report builds its own `Figure`, so no panel is ever shared between
/// enumeration modes.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    rows: usize,
    columns: usize,
    panels: Vec<Option<Panel>>,
}

impl Figure {
    pub fn new(title: impl Into<String>, rows: usize, columns: usize) -> Self {
        Self {
            title: title.into(),
            rows,
            columns,
            panels: vec![None; rows * columns],
        }
    }

    /// Creates the empty figure of a `kind` report with one row per segment
    /// size.
    pub fn for_report(
        kind: MetricKind,
        mode: EnumerationMode,
        segment_sizes: usize,
    ) -> Self {
        Self::new(
            PlotFmt::figure_title(kind, mode),
            segment_sizes,
            kind.columns(),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn set_panel(&mut self, row: usize, column: usize, panel: Panel) {
        let index = self.index(row, column);
        self.panels[index] = Some(panel);
    }

    pub fn panel(&self, row: usize, column: usize) -> Option<&Panel> {
        self.panels[self.index(row, column)].as_ref()
    }

    /// Iterates over all set panels in row-major order.
    pub fn panels(&self) -> impl Iterator<Item = (usize, usize, &Panel)> {
        let columns = self.columns;
        self.panels.iter().enumerate().filter_map(move |(index, panel)| {
            panel
                .as_ref()
                .map(|panel| (index / columns, index % columns, panel))
        })
    }

    /// Fills `row` with the views of `selection`: the raw view on the left,
    /// amplification or memory on the right.
    pub fn compose_row<R: Record>(
        &mut self,
        row: usize,
        selection: &Selection<R>,
    ) {
        let key = selection.key;
        let mut panels: Vec<_> = (0..self.columns)
            .map(|column| Self::labeled_panel(key.kind, column, key.k, key.mode))
            .collect();
        for (metric, series) in &selection.series {
            panels[metric.column()].line(metric.label(), series.clone());
        }
        for (column, panel) in panels.into_iter().enumerate() {
            self.set_panel(row, column, panel);
        }
    }

    /// Fills `row` with titled panels without data, for a log that could not
    /// be loaded.
    pub fn empty_row(
        &mut self,
        row: usize,
        kind: MetricKind,
        k: usize,
        mode: EnumerationMode,
    ) {
        for column in 0..self.columns {
            let panel = Self::labeled_panel(kind, column, k, mode);
            self.set_panel(row, column, panel);
        }
    }

    fn labeled_panel(
        kind: MetricKind,
        column: usize,
        k: usize,
        mode: EnumerationMode,
    ) -> Panel {
        Panel::new(
            PlotFmt::panel_title(kind, column, k, mode),
            PlotFmt::x_label(kind),
            PlotFmt::y_label(kind, column),
        )
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "panel ({}, {}) out of a {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }
}
