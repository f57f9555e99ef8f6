//! Daemon environment settings
//!
//! Control thresholds and wiring are compiled in (`sf_core::constants`).
//! Only where and how the daemon logs can be changed at run time:
//!
//! - `SMARTFAN_LOG` - filter directive (trace, debug, info, warn, error)
//! - `SMARTFAN_LOG_FILE` - append-only log file, empty to disable
//! - `SMARTFAN_TZ` - timezone for local timestamps

use std::path::PathBuf;

use sf_core::constants::{logging, paths};

pub const LOG_LEVEL_VAR: &str = "SMARTFAN_LOG";
pub const LOG_FILE_VAR: &str = "SMARTFAN_LOG_FILE";
pub const TIMEZONE_VAR: &str = "SMARTFAN_TZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub timezone: String,
}

impl DaemonConfig {
    pub fn from_env() -> Self {
        let log_level = std::env::var(LOG_LEVEL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string());

        let log_file = match std::env::var(LOG_FILE_VAR) {
            Ok(v) if v.trim().is_empty() => None,
            Ok(v) => Some(PathBuf::from(v)),
            Err(_) => Some(PathBuf::from(paths::LOG_FILE)),
        };

        let timezone = std::env::var(TIMEZONE_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| logging::DEFAULT_TIMEZONE.to_string());

        Self {
            log_level,
            log_file,
            timezone,
        }
    }

    /// Point local timestamps at the configured zone.
    ///
    /// Must run before logging starts and before any other thread exists.
    pub fn apply_timezone(&self) {
        std::env::set_var("TZ", &self.timezone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_vars() {
        for var in [LOG_LEVEL_VAR, LOG_FILE_VAR, TIMEZONE_VAR] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_environment() {
        clear_vars();
        let config = DaemonConfig::from_env();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/fan_control.log")));
        assert_eq!(config.timezone, "Asia/Shanghai");
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        clear_vars();
        std::env::set_var(LOG_LEVEL_VAR, "debug");
        std::env::set_var(LOG_FILE_VAR, "/tmp/smartfan-test.log");
        std::env::set_var(TIMEZONE_VAR, "UTC");

        let config = DaemonConfig::from_env();
        clear_vars();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/smartfan-test.log")));
        assert_eq!(config.timezone, "UTC");
    }

    #[test]
    #[serial]
    fn test_empty_log_file_disables_file_logging() {
        clear_vars();
        std::env::set_var(LOG_FILE_VAR, "");
        std::env::set_var(LOG_LEVEL_VAR, "  ");

        let config = DaemonConfig::from_env();
        clear_vars();

        assert_eq!(config.log_file, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_apply_timezone_sets_tz() {
        let previous = std::env::var("TZ").ok();
        let config = DaemonConfig {
            log_level: "info".into(),
            log_file: None,
            timezone: "Europe/Berlin".into(),
        };

        config.apply_timezone();
        assert_eq!(std::env::var("TZ").unwrap(), "Europe/Berlin");

        match previous {
            Some(tz) => std::env::set_var("TZ", tz),
            None => std::env::remove_var("TZ"),
        }
    }
}
