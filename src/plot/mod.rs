pub mod axes;
pub mod figure;

use axes::Axes;
use figure::Figure;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3::PyNativeType;

pub struct PyPlot<'p> {
    plt: &'p PyModule,
}

impl<'p> PyPlot<'p> {
    pub fn new(py: Python<'p>) -> PyResult<Self> {
        // figures are only ever saved to files, so pick a backend that needs
        // no display; this has to happen before `pyplot` is imported
        let matplotlib = PyModule::import(py, "matplotlib")?;
        matplotlib.getattr("use")?.call1(("Agg",))?;
        let plt = PyModule::import(py, "matplotlib.pyplot")?;
        Ok(Self { plt })
    }

    /// Creates a new figure with a `nrows x ncols` grid of axes, returned in
    /// row-major order.
    pub fn subplots(
        &self,
        nrows: usize,
        ncols: usize,
        kwargs: Option<&PyDict>,
    ) -> PyResult<(Figure<'p>, Vec<Axes<'p>>)> {
        // `squeeze = false` makes sure we always get a 2d array, even when
        // there's a single column
        let kwargs = match kwargs {
            Some(kwargs) => kwargs,
            None => PyDict::new(self.plt.py()),
        };
        kwargs.set_item("squeeze", false)?;

        let result = self
            .plt
            .getattr("subplots")?
            .call((nrows, ncols), Some(kwargs))?;
        let (fig, axs): (&PyAny, &PyAny) = result.extract()?;
        let fig = Figure::new(fig);
        let axes = axs
            .call_method0("flatten")?
            .iter()?
            .map(|ax| ax.map(Axes::new))
            .collect::<PyResult<Vec<_>>>()?;
        Ok((fig, axes))
    }

    pub fn use_style(&self, style: &str) -> PyResult<()> {
        self.plt.getattr("style")?.getattr("use")?.call1((style,))?;
        Ok(())
    }

    /// Number of figures pyplot is still holding on to.
    pub fn open_figures(&self) -> PyResult<usize> {
        let fignums = self.plt.getattr("get_fignums")?.call0()?;
        fignums.len()
    }

    pub fn close(&self, figure: Figure<'_>) -> PyResult<()> {
        self.plt.getattr("close")?.call1((figure.fig(),))?;
        Ok(())
    }
}
