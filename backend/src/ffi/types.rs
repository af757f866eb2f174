//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust models and PyO3 types (PyDict, PyList).

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine::error::SimulationError;
use crate::models::{Frame, PartialParameters, RunSummary, SimulationParameters};
use crate::session::SessionError;

const PARAMETER_KEYS: [&str; 4] = [
    "initialProjectDefinition",
    "baseWorkFlow",
    "simulationTime",
    "dt",
];

/// Extract an optional float from a Python dict.
///
/// # Errors
/// Returns PyValueError if the value is present but not a number.
fn extract_optional_f64(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<f64>> {
    match dict.get_item(key)? {
        Some(value) => value.extract::<f64>().map(Some).map_err(|_| {
            PyValueError::new_err(format!("Field '{}' must be a number", key))
        }),
        None => Ok(None),
    }
}

/// Convert a Python dict to SimulationParameters, layered over `base`
///
/// # Errors
///
/// Returns PyValueError if:
/// - A key is not one of the four parameter names
/// - A value is not a number
/// - A resolved value is not finite and positive
pub fn parse_parameters(
    py_params: Option<&Bound<'_, PyDict>>,
    base: SimulationParameters,
) -> PyResult<SimulationParameters> {
    let Some(dict) = py_params else {
        return Ok(base);
    };

    for (key, _) in dict.iter() {
        let key: String = key.extract()?;
        if !PARAMETER_KEYS.contains(&key.as_str()) {
            return Err(PyValueError::new_err(format!("Unknown parameter '{}'", key)));
        }
    }

    let partial = PartialParameters {
        initial_project_definition: extract_optional_f64(dict, "initialProjectDefinition")?,
        base_work_flow: extract_optional_f64(dict, "baseWorkFlow")?,
        simulation_time: extract_optional_f64(dict, "simulationTime")?,
        dt: extract_optional_f64(dict, "dt")?,
    };

    let params = partial.resolve(base);
    params.validate().map_err(simulation_error_to_py)?;
    Ok(params)
}

/// Convert SimulationParameters to a Python dict
pub fn parameters_to_py<'py>(
    py: Python<'py>,
    params: &SimulationParameters,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("initialProjectDefinition", params.initial_project_definition)?;
    dict.set_item("baseWorkFlow", params.base_work_flow)?;
    dict.set_item("simulationTime", params.simulation_time)?;
    dict.set_item("dt", params.dt)?;
    Ok(dict)
}

/// Convert a Frame to a Python dict
pub fn frame_to_py<'py>(py: Python<'py>, frame: &Frame) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("time", frame.time)?;
    dict.set_item("workAccomplished", frame.work_accomplished)?;
    dict.set_item("workRemaining", frame.work_remaining)?;
    dict.set_item("workFlow", frame.work_flow)?;
    dict.set_item("projectIsDone", frame.done_flag())?;
    Ok(dict)
}

/// Convert frames to a Python list of dicts
pub fn frames_to_py<'py>(py: Python<'py>, frames: &[Frame]) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty(py);
    for frame in frames {
        list.append(frame_to_py(py, frame)?)?;
    }
    Ok(list)
}

/// Convert RunSummary to a Python dict
///
/// `completionTime` is `None` when the project did not finish.
pub fn summary_to_py<'py>(py: Python<'py>, summary: &RunSummary) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("completionTime", summary.completion_time)?;
    dict.set_item("finalWorkAccomplished", summary.final_work_accomplished)?;
    dict.set_item("finalWorkRemaining", summary.final_work_remaining)?;
    dict.set_item("status", summary.status.to_string())?;
    dict.set_item("complete", summary.is_complete())?;
    Ok(dict)
}

pub fn simulation_error_to_py(err: SimulationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn session_error_to_py(err: SessionError) -> PyErr {
    match err {
        SessionError::RunInProgress => PyRuntimeError::new_err(err.to_string()),
        SessionError::Simulation(e) => simulation_error_to_py(e),
    }
}
