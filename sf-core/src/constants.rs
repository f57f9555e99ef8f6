//! Constants and configuration values for Smartfan
//!
//! Every compiled-in setting lives here. There is no config file: changing
//! a threshold or the fan pin means rebuilding.

use std::time::Duration;

/// System paths
pub mod paths {
    /// CPU die temperature in millidegrees Celsius
    pub const CPU_THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

    /// Append-only log file
    pub const LOG_FILE: &str = "/var/log/fan_control.log";

    /// Present when systemd-journald accepts native log records
    pub const JOURNALD_SOCKET: &str = "/run/systemd/journal/socket";
}

/// GPIO wiring of the fan driver
pub mod gpio {
    use crate::hw::ActiveLevel;

    /// BCM pin driving the fan transistor base
    pub const FAN_PIN: u8 = 14;

    /// NPN transistor: pin high energizes the fan
    pub const FAN_ACTIVE_LEVEL: ActiveLevel = ActiveLevel::High;
}

/// Temperature constants
pub mod temperature {
    /// Temperature readings are in millidegrees, divide by this to get Celsius
    pub const MILLIDEGREE_DIVISOR: f32 = 1000.0;

    /// Fan turns on strictly above this (Celsius)
    pub const START_TEMP: f32 = 45.0;

    /// Fan turns off strictly below this (Celsius)
    pub const CLOSE_TEMP: f32 = 40.0;
}

/// Timing constants for the control loop
pub mod timing {
    use super::*;

    /// Wait between temperature samples
    pub const POLL_INTERVAL: Duration = Duration::from_secs(15);

    /// One-time wait after start so the board settles before the first reading
    pub const STARTUP_DELAY: Duration = Duration::from_secs(30);
}

/// Logging defaults
pub mod logging {
    /// Default filter directive when SMARTFAN_LOG is unset
    pub const DEFAULT_LEVEL: &str = "info";

    /// Timestamp layout for the log file
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Timezone applied to local timestamps when SMARTFAN_TZ is unset
    pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_is_not_degenerate() {
        assert!(temperature::CLOSE_TEMP < temperature::START_TEMP);
    }
}
