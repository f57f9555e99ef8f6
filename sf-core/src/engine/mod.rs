//! Fan control engine modules
//!
//! Contains the two-threshold hysteresis engine.

mod hysteresis;

pub use hysteresis::HysteresisController;
