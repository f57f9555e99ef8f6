//! Fan switch on a GPIO output pin
//!
//! The pin drives the base of a transistor that powers the fan. With an NPN
//! transistor the circuit conducts when the pin is high; a PNP transistor
//! conducts when it is low. `ActiveLevel` captures which one is wired up.

use rppal::gpio::{Gpio, Level, OutputPin};
use sf_error::{Result, SmartfanError};
use tracing::{debug, info};

use super::FanActuator;

/// Electrical level that energizes the fan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveLevel {
    /// NPN driver: high turns the fan on
    #[default]
    High,
    /// PNP driver: low turns the fan on
    Low,
}

impl ActiveLevel {
    /// Pin level for a logical fan state
    pub fn level_for(self, active: bool) -> Level {
        match (self, active) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => Level::High,
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => Level::Low,
        }
    }
}

/// Fan driven by a BCM-numbered GPIO pin
pub struct GpioFan {
    pin: OutputPin,
    active_level: ActiveLevel,
}

impl GpioFan {
    /// Claim the pin as an output already at its de-energized level.
    ///
    /// Opening the same pin again yields the same de-energized output, so
    /// this is safe to call on every start.
    pub fn open(bcm_pin: u8, active_level: ActiveLevel) -> Result<Self> {
        let gpio_init = |e: rppal::gpio::Error| SmartfanError::GpioInit {
            pin: bcm_pin,
            reason: e.to_string(),
        };

        let pin = Gpio::new().map_err(gpio_init)?.get(bcm_pin).map_err(gpio_init)?;
        let mut pin = match active_level.level_for(false) {
            Level::High => pin.into_output_high(),
            Level::Low => pin.into_output_low(),
        };
        // The pin keeps its de-energized level after the daemon exits
        pin.set_reset_on_drop(false);

        info!(pin = bcm_pin, active_level = ?active_level, "GPIO fan output initialized (fan off)");
        Ok(Self { pin, active_level })
    }

    pub fn pin(&self) -> u8 {
        self.pin.pin()
    }
}

impl FanActuator for GpioFan {
    fn set_active(&mut self, active: bool) -> Result<()> {
        let level = self.active_level.level_for(active);
        self.pin.write(level);
        debug!(pin = self.pin.pin(), ?level, active, "GPIO fan output written");
        Ok(())
    }
}
