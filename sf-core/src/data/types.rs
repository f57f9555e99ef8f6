//! Core data types

use std::fmt;
use std::time::Duration;

use sf_error::{Result, SmartfanError};

use crate::constants::{temperature, timing};

/// Logical state of the fan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanState {
    On,
    #[default]
    Off,
}

impl FanState {
    pub fn is_on(self) -> bool {
        self == FanState::On
    }
}

impl fmt::Display for FanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanState::On => write!(f, "on"),
            FanState::Off => write!(f, "off"),
        }
    }
}

/// Immutable controller configuration
///
/// The fan switches on strictly above `start_temp` and off strictly below
/// `close_temp`. Between the two lies the hysteresis band where nothing
/// changes, so `close_temp < start_temp` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    start_temp: f32,
    close_temp: f32,
    poll_interval: Duration,
    startup_delay: Duration,
}

impl ThresholdConfig {
    /// Build a configuration, rejecting a degenerate band.
    pub fn new(
        start_temp: f32,
        close_temp: f32,
        poll_interval: Duration,
        startup_delay: Duration,
    ) -> Result<Self> {
        if !start_temp.is_finite() {
            return Err(SmartfanError::invalid_config(
                "start_temp",
                format!("{} is not a finite temperature", start_temp),
            ));
        }
        if !close_temp.is_finite() {
            return Err(SmartfanError::invalid_config(
                "close_temp",
                format!("{} is not a finite temperature", close_temp),
            ));
        }
        if close_temp >= start_temp {
            return Err(SmartfanError::invalid_config(
                "close_temp",
                format!(
                    "{}°C must be below start_temp {}°C",
                    close_temp, start_temp
                ),
            ));
        }

        Ok(Self {
            start_temp,
            close_temp,
            poll_interval,
            startup_delay,
        })
    }

    pub fn start_temp(&self) -> f32 {
        self.start_temp
    }

    pub fn close_temp(&self) -> f32 {
        self.close_temp
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn startup_delay(&self) -> Duration {
        self.startup_delay
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            start_temp: temperature::START_TEMP,
            close_temp: temperature::CLOSE_TEMP,
            poll_interval: timing::POLL_INTERVAL,
            startup_delay: timing::STARTUP_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let default = ThresholdConfig::default();
        let validated = ThresholdConfig::new(
            default.start_temp(),
            default.close_temp(),
            default.poll_interval(),
            default.startup_delay(),
        )
        .unwrap();
        assert_eq!(default, validated);
        assert_eq!(validated.start_temp(), 45.0);
        assert_eq!(validated.close_temp(), 40.0);
        assert_eq!(validated.poll_interval(), Duration::from_secs(15));
        assert_eq!(validated.startup_delay(), Duration::from_secs(30));
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let err = ThresholdConfig::new(45.0, 45.0, Duration::ZERO, Duration::ZERO).unwrap_err();
        assert!(matches!(err, SmartfanError::InvalidConfig { ref field, .. } if field == "close_temp"));
        assert!(!err.is_hardware_fault());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        assert!(ThresholdConfig::new(40.0, 45.0, Duration::ZERO, Duration::ZERO).is_err());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let err = ThresholdConfig::new(f32::NAN, 40.0, Duration::ZERO, Duration::ZERO).unwrap_err();
        assert!(matches!(err, SmartfanError::InvalidConfig { ref field, .. } if field == "start_temp"));
        assert!(ThresholdConfig::new(45.0, f32::NEG_INFINITY, Duration::ZERO, Duration::ZERO).is_err());
    }

    #[test]
    fn test_fan_state_starts_off() {
        assert_eq!(FanState::default(), FanState::Off);
        assert!(!FanState::Off.is_on());
        assert_eq!(FanState::On.to_string(), "on");
    }
}
