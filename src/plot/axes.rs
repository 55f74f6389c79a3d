use pyo3::prelude::*;
use pyo3::types::PyDict;

pub struct Axes<'a> {
    ax: &'a PyAny,
}

impl<'a> Axes<'a> {
    pub fn new(ax: &'a PyAny) -> Self {
        Self { ax }
    }

    pub fn set_title(&self, title: &str) -> PyResult<()> {
        self.ax.call_method1("set_title", (title,))?;
        Ok(())
    }

    pub fn set_xlabel(&self, label: &str) -> PyResult<()> {
        self.ax.call_method1("set_xlabel", (label,))?;
        Ok(())
    }

    pub fn set_ylabel(&self, label: &str) -> PyResult<()> {
        self.ax.call_method1("set_ylabel", (label,))?;
        Ok(())
    }

    pub fn grid(&self, visible: bool) -> PyResult<()> {
        self.ax.call_method1("grid", (visible,))?;
        Ok(())
    }

    pub fn set_visible(&self, visible: bool) -> PyResult<()> {
        self.ax.call_method1("set_visible", (visible,))?;
        Ok(())
    }

    pub fn legend(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("legend", (), kwargs)?;
        Ok(())
    }

    pub fn plot<X, Y>(
        &self,
        x: Vec<X>,
        y: Vec<Y>,
        fmt: Option<&str>,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()>
    where
        X: IntoPy<PyObject>,
        Y: IntoPy<PyObject>,
    {
        if let Some(fmt) = fmt {
            self.ax.call_method("plot", (x, y, fmt), kwargs)?;
        } else {
            self.ax.call_method("plot", (x, y), kwargs)?;
        };
        Ok(())
    }
}
