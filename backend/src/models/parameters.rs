//! Simulation parameters
//!
//! The input of a single run. A parameter set is immutable once handed to the
//! engine; the engine validates it before entering the loop.
//!
//! # Critical Invariants
//!
//! - All four fields must be finite and strictly positive
//! - Serialized field names are camelCase (`initialProjectDefinition`, ...)
//! - The fingerprint is independent of JSON key order

use crate::engine::error::SimulationError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Default total work required (drawings)
pub const DEFAULT_INITIAL_PROJECT_DEFINITION: f64 = 1000.0;
/// Default nominal work rate (drawings per month)
pub const DEFAULT_BASE_WORK_FLOW: f64 = 100.0;
/// Default horizon (months)
pub const DEFAULT_SIMULATION_TIME: f64 = 15.0;
/// Default integration step (months)
pub const DEFAULT_DT: f64 = 0.1;

/// Parameter set for one simulation run
///
/// # Example
///
/// ```rust
/// use project_simulator_core_rs::SimulationParameters;
///
/// let params = SimulationParameters::new(1000.0, 100.0, 15.0, 0.1);
/// assert!(params.validate().is_ok());
/// assert_eq!(params, SimulationParameters::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    /// Total work required to finish the project
    pub initial_project_definition: f64,

    /// Nominal work rate per unit time while the project is open
    pub base_work_flow: f64,

    /// Requested horizon (inclusive)
    pub simulation_time: f64,

    /// Fixed integration step
    pub dt: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_project_definition: DEFAULT_INITIAL_PROJECT_DEFINITION,
            base_work_flow: DEFAULT_BASE_WORK_FLOW,
            simulation_time: DEFAULT_SIMULATION_TIME,
            dt: DEFAULT_DT,
        }
    }
}

impl SimulationParameters {
    pub fn new(
        initial_project_definition: f64,
        base_work_flow: f64,
        simulation_time: f64,
        dt: f64,
    ) -> Self {
        Self {
            initial_project_definition,
            base_work_flow,
            simulation_time,
            dt,
        }
    }

    /// Parse parameters from JSON
    ///
    /// Missing fields fall back to the defaults, so a config file only needs
    /// the values it changes. The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// - `Serialization` if the text is not a JSON object of numbers
    /// - `InvalidParameter` if a value is not finite and positive
    ///
    /// # Example
    ///
    /// ```rust
    /// use project_simulator_core_rs::SimulationParameters;
    ///
    /// let params = SimulationParameters::from_json(r#"{"baseWorkFlow": 50}"#).unwrap();
    /// assert_eq!(params.base_work_flow, 50.0);
    /// assert_eq!(params.initial_project_definition, 1000.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let partial: PartialParameters = serde_json::from_str(json).map_err(|e| {
            SimulationError::Serialization(format!("Parameter parsing failed: {}", e))
        })?;
        let params = partial.resolve(Self::default());
        params.validate()?;
        Ok(params)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SimulationError::Serialization(format!("Parameter serialization failed: {}", e))
        })
    }

    /// Check that every field is finite and strictly positive
    ///
    /// Fields are checked in declaration order and the first offender is
    /// reported.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("initialProjectDefinition", self.initial_project_definition),
            ("baseWorkFlow", self.base_work_flow),
            ("simulationTime", self.simulation_time),
            ("dt", self.dt),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidParameter {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Upper estimate of the number of loop iterations before the horizon
    pub fn estimated_steps(&self) -> f64 {
        (self.simulation_time / self.dt).floor() + 1.0
    }

    /// Deterministic SHA256 fingerprint of this parameter set
    ///
    /// Uses canonical JSON (sorted keys) so two equal parameter sets always
    /// produce the same fingerprint.
    pub fn fingerprint(&self) -> Result<String, SimulationError> {
        compute_parameters_hash(self)
    }
}

/// Parameter overrides where every field is optional
///
/// Used by config files and the FFI layer to layer values over a base set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialParameters {
    pub initial_project_definition: Option<f64>,
    pub base_work_flow: Option<f64>,
    pub simulation_time: Option<f64>,
    pub dt: Option<f64>,
}

impl PartialParameters {
    /// Fill unset fields from `base`
    pub fn resolve(self, base: SimulationParameters) -> SimulationParameters {
        SimulationParameters {
            initial_project_definition: self
                .initial_project_definition
                .unwrap_or(base.initial_project_definition),
            base_work_flow: self.base_work_flow.unwrap_or(base.base_work_flow),
            simulation_time: self.simulation_time.unwrap_or(base.simulation_time),
            dt: self.dt.unwrap_or(base.dt),
        }
    }
}

/// Compute deterministic SHA256 hash of a serializable config
///
/// Serializes to a `serde_json::Value`, sorts object keys recursively, then
/// hashes the compact JSON text.
pub fn compute_parameters_hash<T: Serialize>(config: &T) -> Result<String, SimulationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        SimulationError::Serialization(format!("Parameter serialization failed: {}", e))
    })?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SimulationError::Serialization(format!("Parameter serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
