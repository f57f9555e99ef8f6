//! Hysteresis engine for on/off fan control
//!
//! # How It Works
//!
//! The fan has two states and two thresholds:
//!
//! 1. **Off**: turns on once a sample is strictly above `start_temp`.
//! 2. **On**: turns off once a sample is strictly below `close_temp`.
//!
//! Samples inside the band (equality included) never change anything, which
//! keeps a temperature hovering near one threshold from toggling the fan.
//!
//! Deciding and committing are separate steps. The caller drives the
//! hardware with the decided state and commits only once the write went
//! through, so the logical state never runs ahead of the pin.

use crate::data::{FanState, ThresholdConfig};

/// Two-threshold on/off controller
#[derive(Debug, Clone)]
pub struct HysteresisController {
    config: ThresholdConfig,
    state: FanState,
}

impl HysteresisController {
    /// Create a controller in the `Off` state, matching an actuator
    /// initialized to its de-energized level.
    pub fn new(config: ThresholdConfig) -> Self {
        Self {
            config,
            state: FanState::Off,
        }
    }

    /// Current logical fan state
    pub fn state(&self) -> FanState {
        self.state
    }

    /// Return the state to switch to for a sample, or `None` to stay put.
    pub fn decide(&self, temp: f32) -> Option<FanState> {
        match self.state {
            FanState::Off if temp > self.config.start_temp() => Some(FanState::On),
            FanState::On if temp < self.config.close_temp() => Some(FanState::Off),
            _ => None,
        }
    }

    /// Record a transition after the actuator has been driven to it.
    pub fn commit(&mut self, next: FanState) {
        self.state = next;
    }
}
