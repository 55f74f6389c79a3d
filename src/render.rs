use crate::error::PlotError;
use crate::figure::Figure;
use serde::Serialize;
use std::path::Path;

/// Serializes a `Figure` to a file, overwriting whatever is at that path.
pub trait Render {
    /// Extension of the files written by this renderer.
    fn extension(&self) -> &'static str;

    fn render(&mut self, figure: &Figure, path: &Path) -> Result<(), PlotError>;
}

// renderers never create directories: a missing output directory is a
// render error
fn check_output_dir(path: &Path) -> Result<(), PlotError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(
            PlotError::render(path, format!("directory {} does not exist", dir.display())),
        ),
        _ => Ok(()),
    }
}

/// Writes the data behind every panel as CSV, one line per point.
#[derive(Debug, Default)]
pub struct CsvDump;

#[derive(Serialize)]
struct PointRow<'a> {
    row: usize,
    column: usize,
    panel: &'a str,
    line: &'a str,
    x: f64,
    y: f64,
}

impl Render for CsvDump {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&mut self, figure: &Figure, path: &Path) -> Result<(), PlotError> {
        check_output_dir(path)?;
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| PlotError::render(path, e))?;
        for (row, column, panel) in figure.panels() {
            for line in &panel.lines {
                for (x, y) in line.series.points() {
                    let point = PointRow {
                        row,
                        column,
                        panel: &panel.title,
                        line: line.label.unwrap_or(""),
                        x,
                        y,
                    };
                    writer
                        .serialize(point)
                        .map_err(|e| PlotError::render(path, e))?;
                }
            }
        }
        writer.flush().map_err(|e| PlotError::render(path, e))?;
        Ok(())
    }
}

#[cfg(feature = "pyo3")]
pub use self::matplotlib::Matplotlib;

#[cfg(feature = "pyo3")]
mod matplotlib {
    use super::{check_output_dir, Render};
    use crate::config::ImageFormat;
    use crate::error::PlotError;
    use crate::figure::Figure;
    use crate::fmt::PlotFmt;
    use crate::plot::axes::Axes;
    use crate::plot::figure::Figure as PlotFigure;
    use crate::plot::PyPlot;
    use color_eyre::eyre::{self, WrapErr};
    use color_eyre::Report;
    use pyo3::prelude::*;
    use pyo3::types::PyDict;
    use std::path::Path;

    // size of each panel, in inches
    const PANEL_WIDTH: f64 = 6.4;
    const PANEL_HEIGHT: f64 = 2.4;

    /// Renders figures with matplotlib.
    pub struct Matplotlib {
        format: ImageFormat,
    }

    impl Matplotlib {
        /// Fails if matplotlib cannot be imported.
        pub fn new(format: ImageFormat) -> Result<Self, Report> {
            let gil = Python::acquire_gil();
            let py = gil.python();
            let setup = PyPlot::new(py).and_then(|plt| plt.use_style("default"));
            if let Err(e) = setup {
                e.print(py);
                return Err(eyre::eyre!("{}", e)).wrap_err("import matplotlib");
            }
            Ok(Self { format })
        }

        fn draw(
            &self,
            py: Python<'_>,
            figure: &Figure,
            path: &str,
        ) -> PyResult<()> {
            let plt = PyPlot::new(py)?;
            let (fig, axes) =
                plt.subplots(figure.rows(), figure.columns(), None)?;
            let drawn = self.fill(py, figure, &fig, &axes, path);
            // always release the figure, whether or not drawing failed
            plt.close(fig)?;
            drawn
        }

        fn fill(
            &self,
            py: Python<'_>,
            figure: &Figure,
            fig: &PlotFigure<'_>,
            axes: &[Axes<'_>],
            path: &str,
        ) -> PyResult<()> {
            fig.set_size_inches(
                PANEL_WIDTH * figure.columns() as f64,
                PANEL_HEIGHT * figure.rows() as f64,
            )?;
            if !figure.title().is_empty() {
                fig.suptitle(figure.title())?;
            }

            for (index, ax) in axes.iter().enumerate() {
                let row = index / figure.columns();
                let column = index % figure.columns();
                let panel = match figure.panel(row, column) {
                    Some(panel) => panel,
                    None => {
                        ax.set_visible(false)?;
                        continue;
                    }
                };
                for (line_index, line) in panel.lines.iter().enumerate() {
                    let kwargs = PyDict::new(py);
                    kwargs.set_item("color", PlotFmt::color(line_index))?;
                    kwargs.set_item("marker", PlotFmt::marker(line_index))?;
                    if let Some(label) = line.label {
                        kwargs.set_item("label", label)?;
                    }
                    // non-finite values are passed as they are; matplotlib
                    // leaves a gap for them
                    ax.plot(
                        line.series.x().to_vec(),
                        line.series.y().to_vec(),
                        None,
                        Some(kwargs),
                    )?;
                }
                ax.set_title(&panel.title)?;
                ax.set_xlabel(&panel.x_label)?;
                ax.set_ylabel(&panel.y_label)?;
                ax.grid(panel.grid)?;
                if panel.lines.iter().any(|line| line.label.is_some()) {
                    ax.legend(None)?;
                }
            }

            fig.tight_layout()?;
            let kwargs = PyDict::new(py);
            kwargs.set_item("format", self.format.extension())?;
            fig.savefig(path, Some(kwargs))
        }
    }

    impl Render for Matplotlib {
        fn extension(&self) -> &'static str {
            self.format.extension()
        }

        fn render(
            &mut self,
            figure: &Figure,
            path: &Path,
        ) -> Result<(), PlotError> {
            check_output_dir(path)?;
            let gil = Python::acquire_gil();
            let py = gil.python();
            self.draw(py, figure, &path.display().to_string())
                .map_err(|e| PlotError::render(path, e))
        }
    }
}

#[cfg(all(test, feature = "pyo3"))]
mod matplotlib_tests {
    use super::*;
    use crate::config::{ImageFormat, ReportConfig};
    use crate::figure::Panel;
    use crate::plot::PyPlot;
    use crate::series::Series;
    use pyo3::Python;
    use std::fs;

    // same shape as a message size report
    fn figure(title: &str) -> Figure {
        let mut figure = Figure::new(title, 3, 2);
        for (row, k) in [5, 10, 20].into_iter().enumerate() {
            let mut volume =
                Panel::new(format!("k = {}", k), "hops per segment", "KiB");
            volume.line(Some("sent"), Series::new(vec![1.0, 2.0], vec![0.5, 1.0]));
            volume.line(Some("received"), Series::new(vec![1.0, 2.0], vec![1.5, 3.0]));
            let mut amplification =
                Panel::new(format!("amplification (k = {})", k), "hops per segment", "ratio");
            amplification.line(None, Series::new(vec![1.0, 2.0], vec![3.0, f64::INFINITY]));
            figure.set_panel(row, 0, volume);
            figure.set_panel(row, 1, amplification);
        }
        figure
    }

    fn open_figures() -> usize {
        let gil = Python::acquire_gil();
        let py = gil.python();
        PyPlot::new(py)
            .and_then(|plt| plt.open_figures())
            .expect("pyplot should be importable")
    }

    // a single test, as pyplot keeps global state
    #[test]
    fn matplotlib_render() {
        let mut renderer = Matplotlib::new(ImageFormat::Jpg).unwrap();
        assert_eq!(renderer.extension(), "jpg");
        let dir = tempfile::tempdir().unwrap();
        let before = open_figures();

        let path = dir.path().join("message_sizes_n.jpg");
        renderer.render(&figure(""), &path).unwrap();
        assert!(path.is_file());

        // overwrite an existing file
        fs::write(&path, "stale").unwrap();
        renderer.render(&figure(""), &path).unwrap();
        assert_ne!(fs::read(&path).unwrap(), b"stale");
        assert_eq!(open_figures(), before);

        // the format configured for the report decides the extension
        let mut config = ReportConfig::new(dir.path(), dir.path());
        config.set_format(ImageFormat::Png);
        let mut renderer = Matplotlib::new(config.format()).unwrap();
        let path = dir.path().join(format!("throughput_c.{}", renderer.extension()));
        renderer.render(&figure("enumeration: client side"), &path).unwrap();
        assert!(fs::read(&path).unwrap().starts_with(b"\x89PNG"));

        // missing plot directory
        let missing = dir.path().join("plots").join("latencies_n.png");
        let err = renderer.render(&figure(""), &missing).unwrap_err();
        assert!(matches!(err, PlotError::Render { .. }));
        assert!(!missing.exists());

        // an unparsable panel title fails while drawing; the figure must
        // still be released
        let mut broken = figure("");
        broken.set_panel(0, 0, Panel::new("$\\frac{$", "hops per segment", "KiB"));
        let path = dir.path().join("latencies_s.png");
        let err = renderer.render(&broken, &path).unwrap_err();
        assert!(matches!(err, PlotError::Render { .. }));
        assert_eq!(open_figures(), before);
    }
}
