//! Core primitives: the simulation clock and display rounding.

pub mod rounding;
pub mod time;
