//! Hardware capabilities
//!
//! The controller only sees these two traits. Concrete implementations:
//!
//! - `thermal` - CPU temperature from the kernel thermal zone
//! - `gpio` - fan transistor on a GPIO output pin

mod gpio;
mod thermal;

pub use gpio::{ActiveLevel, GpioFan};
pub use thermal::ThermalZone;

use sf_error::Result;

/// Source of CPU temperature samples
pub trait TemperatureSource {
    /// Most recent CPU die temperature in degrees Celsius, sampled fresh.
    fn read_celsius(&mut self) -> Result<f32>;
}

/// Binary fan switch
pub trait FanActuator {
    /// `true` energizes the fan circuit, `false` de-energizes it.
    fn set_active(&mut self, active: bool) -> Result<()>;
}
