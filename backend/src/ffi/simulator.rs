//! PyO3 wrapper for SimulationSession

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{
    frames_to_py, parameters_to_py, parse_parameters, session_error_to_py, summary_to_py,
};
use crate::session::SimulationSession;

/// Python wrapper holding the parameters and the latest result
///
/// # Example (from Python)
///
/// ```python
/// from project_simulator_core_rs import Simulator
///
/// sim = Simulator({"baseWorkFlow": 50})
/// sim.run()
/// print(sim.summary()["status"])   # "In Progress"
/// sim.reset()
/// ```
#[pyclass(name = "Simulator")]
pub struct PySimulator {
    inner: SimulationSession,
}

#[pymethods]
impl PySimulator {
    /// Create a simulator, optionally overriding default parameters
    #[new]
    #[pyo3(signature = (params=None))]
    fn new(params: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let mut inner = SimulationSession::new();
        let parameters = parse_parameters(params, *inner.parameters())?;
        inner.set_parameters(parameters);
        Ok(PySimulator { inner })
    }

    /// Update entered parameters; unspecified keys keep their value
    fn set_parameters(&mut self, params: &Bound<'_, PyDict>) -> PyResult<()> {
        let parameters = parse_parameters(Some(params), *self.inner.parameters())?;
        self.inner.set_parameters(parameters);
        Ok(())
    }

    fn parameters<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        parameters_to_py(py, self.inner.parameters())
    }

    /// Run the simulation and return its frames
    ///
    /// Raises ValueError if the engine rejects the parameters.
    fn run<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
        let result = self.inner.run().map_err(session_error_to_py)?;
        frames_to_py(py, result.frames())
    }

    /// Frames of the latest run (empty list before the first run)
    fn frames<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
        match self.inner.latest() {
            Some(record) => frames_to_py(py, record.result.frames()),
            None => Ok(PyList::empty(py)),
        }
    }

    /// Summary metrics of the latest run, or None
    fn summary<'py>(&self, py: Python<'py>) -> PyResult<Option<Bound<'py, PyDict>>> {
        self.inner
            .summary()
            .map(|s| summary_to_py(py, &s))
            .transpose()
    }

    /// Identifier of the latest run, or None
    fn run_id(&self) -> Option<String> {
        self.inner.latest().map(|r| r.id.to_string())
    }

    #[getter]
    fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    /// Clear the result and restore default parameters
    fn reset(&mut self) {
        self.inner.reset();
    }
}
