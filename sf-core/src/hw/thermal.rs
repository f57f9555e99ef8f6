//! CPU temperature from the Linux thermal framework
//!
//! `thermal_zone0` on Raspberry Pi boards is the SoC die sensor. The kernel
//! reports millidegrees Celsius as a plain integer (e.g. `45123`).

use std::fs;
use std::path::{Path, PathBuf};

use sf_error::{Result, SmartfanError};
use tracing::trace;

use super::TemperatureSource;
use crate::constants::{paths, temperature};

/// Thermal zone temperature file
#[derive(Debug, Clone)]
pub struct ThermalZone {
    path: PathBuf,
}

impl ThermalZone {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Zone 0, the CPU die on single-board computers
    pub fn cpu() -> Self {
        Self::new(paths::CPU_THERMAL_ZONE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemperatureSource for ThermalZone {
    fn read_celsius(&mut self) -> Result<f32> {
        let celsius = read_temperature(&self.path)?;
        trace!(path = %self.path.display(), celsius, "Read CPU temperature");
        Ok(celsius)
    }
}

/// Read a millidegree file and convert to degrees Celsius
fn read_temperature(temp_path: &Path) -> Result<f32> {
    let content = fs::read_to_string(temp_path)
        .map_err(|e| SmartfanError::temperature_read(temp_path, format!("Failed to read: {}", e)))?;

    let millidegrees = content
        .trim()
        .parse::<i32>()
        .map_err(|e| SmartfanError::temperature_read(temp_path, format!("Failed to parse '{}': {}", content.trim(), e)))?;

    Ok(millidegrees as f32 / temperature::MILLIDEGREE_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn zone_with(content: &str) -> (NamedTempFile, ThermalZone) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let zone = ThermalZone::new(file.path());
        (file, zone)
    }

    #[test]
    fn test_reads_millidegrees() {
        let (_file, mut zone) = zone_with("45123\n");
        let celsius = zone.read_celsius().unwrap();
        assert!((celsius - 45.123).abs() < 0.001);
    }

    #[test]
    fn test_reads_negative_temperature() {
        let (_file, mut zone) = zone_with("-5000");
        assert_eq!(zone.read_celsius().unwrap(), -5.0);
    }

    #[test]
    fn test_samples_fresh_each_call() {
        let (file, mut zone) = zone_with("30000");
        assert_eq!(zone.read_celsius().unwrap(), 30.0);

        fs::write(file.path(), "46000\n").unwrap();
        assert_eq!(zone.read_celsius().unwrap(), 46.0);
    }

    #[test]
    fn test_missing_file_is_temperature_read_error() {
        let dir = TempDir::new().unwrap();
        let mut zone = ThermalZone::new(dir.path().join("temp"));
        let err = zone.read_celsius().unwrap_err();
        assert!(matches!(err, SmartfanError::TemperatureRead { .. }));
        assert!(err.is_hardware_fault());
    }

    #[test]
    fn test_garbage_content_is_temperature_read_error() {
        let (_file, mut zone) = zone_with("not a number");
        let err = zone.read_celsius().unwrap_err();
        match err {
            SmartfanError::TemperatureRead { reason, .. } => {
                assert!(reason.contains("not a number"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_cpu_zone_path() {
        assert_eq!(
            ThermalZone::cpu().path(),
            Path::new("/sys/class/thermal/thermal_zone0/temp")
        );
    }
}
