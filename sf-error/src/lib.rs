//! Unified error handling for Smartfan
//!
//! This crate provides the single error type shared by the core library and
//! the daemon. Hardware faults (sensor and GPIO I/O) are kept apart from
//! configuration mistakes so callers can tell which one stopped them.

use std::path::PathBuf;

/// Result type alias using SmartfanError
pub type Result<T> = std::result::Result<T, SmartfanError>;

/// Unified error type for all Smartfan operations
#[derive(thiserror::Error, Debug)]
pub enum SmartfanError {
    // ============================================================================
    // Hardware I/O Errors
    // ============================================================================
    #[error("Failed to read temperature from {path}: {reason}")]
    TemperatureRead {
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to initialize GPIO pin {pin}: {reason}")]
    GpioInit {
        pin: u8,
        reason: String,
    },

    #[error("Failed to write GPIO pin {pin}: {reason}")]
    GpioWrite {
        pin: u8,
        reason: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig {
        field: String,
        reason: String,
    },
}

impl SmartfanError {
    /// Create a temperature read error
    pub fn temperature_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::TemperatureRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for sensor and actuator failures, false for configuration mistakes.
    ///
    /// Hardware faults need someone to look at the board; configuration errors
    /// need someone to look at the code.
    pub fn is_hardware_fault(&self) -> bool {
        match self {
            Self::TemperatureRead { .. }
            | Self::GpioInit { .. }
            | Self::GpioWrite { .. } => true,
            Self::InvalidConfig { .. } => false,
        }
    }
}
