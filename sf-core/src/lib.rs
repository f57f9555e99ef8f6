//! Smartfan Core Library
//!
//! Two-threshold fan control for single-board computers: the CPU temperature
//! is polled and a GPIO-driven fan is switched on above one threshold and off
//! below a lower one.
//!
//! # Module Structure
//!
//! - `data/` - Thresholds and fan state
//! - `engine/` - Hysteresis decision engine
//! - `hw/` - Temperature source and fan actuator capabilities
//!
//! # Example
//!
//! ```
//! use sf_core::{FanState, HysteresisController, ThresholdConfig};
//!
//! let controller = HysteresisController::new(ThresholdConfig::default());
//! let next = controller.decide(46.0);
//! assert_eq!(next, Some(FanState::On));
//! ```

// Grouped modules
pub mod data;
pub mod engine;
pub mod hw;

// Standalone modules
pub mod constants;

pub use data::{FanState, ThresholdConfig};
pub use engine::HysteresisController;
pub use hw::{ActiveLevel, FanActuator, GpioFan, TemperatureSource, ThermalZone};

pub use sf_error::{Result, SmartfanError};
