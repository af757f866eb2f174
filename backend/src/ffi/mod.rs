//! Python bindings (enabled with the `pyo3` feature)
//!
//! Keys crossing the boundary use the camelCase names of the serialized
//! models, and `projectIsDone` is exposed as `0`/`1`.

pub mod simulator;
pub mod types;

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine::euler::simulate as simulate_rs;
use types::{frames_to_py, parse_parameters, simulation_error_to_py};

/// Run one simulation from a parameter dict and return its frames
///
/// Missing keys fall back to the defaults.
///
/// # Example (from Python)
///
/// ```python
/// from project_simulator_core_rs import simulate
///
/// frames = simulate({"initialProjectDefinition": 100, "baseWorkFlow": 10,
///                    "simulationTime": 10, "dt": 1})
/// print(frames[-1]["workAccomplished"])
/// ```
#[pyfunction]
#[pyo3(name = "simulate", signature = (params=None))]
pub fn simulate_py<'py>(
    py: Python<'py>,
    params: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyList>> {
    let params = parse_parameters(params, Default::default())?;
    let result = simulate_rs(&params).map_err(simulation_error_to_py)?;
    frames_to_py(py, result.frames())
}
