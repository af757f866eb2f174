//! Frame - one sampled state of the simulation
//!
//! Every numeric field is already display-rounded to two decimals when the
//! frame is built. The completion flag serializes as `0`/`1`.

use serde::{Deserialize, Serialize};

/// One sampled output record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Simulation clock value
    pub time: f64,

    /// Cumulative completed work (the stock)
    pub work_accomplished: f64,

    /// `max(0, initialProjectDefinition - workAccomplished)`
    pub work_remaining: f64,

    /// Flow applied during this step
    pub work_flow: f64,

    /// Whether the stock has reached the project definition
    #[serde(with = "flag")]
    pub project_is_done: bool,
}

impl Frame {
    /// Completion flag as the 0/1 integer used by external consumers
    pub fn done_flag(&self) -> u8 {
        u8::from(self.project_is_done)
    }
}

/// Serialize a bool as `0`/`1`; accept either form on input
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(u8),
        Bool(bool),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Int(0) => Ok(false),
            Repr::Int(1) => Ok(true),
            Repr::Int(other) => Err(serde::de::Error::custom(format!(
                "projectIsDone must be 0 or 1, got {}",
                other
            ))),
            Repr::Bool(b) => Ok(b),
        }
    }
}
