//! Fan Control Loop
//!
//! Polls the CPU temperature and switches the fan through the hysteresis
//! engine.
//!
//! # Safety Features
//! - **Fail-safe exit**: the fan is forced off on every exit path, including
//!   panics, through `ActuatorGuard`
//! - **No retries**: a sensor or GPIO fault stops the loop so the service
//!   manager can restart the daemon
//! - **Quiet steady state**: the pin is only written when the state changes

use std::future::Future;
use std::ops::{Deref, DerefMut};

use sf_core::{FanActuator, HysteresisController, TemperatureSource, ThresholdConfig};
use sf_error::Result;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Holds the actuator for the lifetime of the loop and switches it off on drop.
pub struct ActuatorGuard<'a, A: FanActuator> {
    actuator: &'a mut A,
}

impl<'a, A: FanActuator> ActuatorGuard<'a, A> {
    pub fn new(actuator: &'a mut A) -> Self {
        Self { actuator }
    }
}

impl<A: FanActuator> Deref for ActuatorGuard<'_, A> {
    type Target = A;

    fn deref(&self) -> &A {
        self.actuator
    }
}

impl<A: FanActuator> DerefMut for ActuatorGuard<'_, A> {
    fn deref_mut(&mut self) -> &mut A {
        self.actuator
    }
}

impl<A: FanActuator> Drop for ActuatorGuard<'_, A> {
    fn drop(&mut self) {
        // Forced regardless of the logical state
        match self.actuator.set_active(false) {
            Ok(()) => info!("Fan output released (off)"),
            Err(e) => warn!(error = %e, "Failed to switch fan off on exit"),
        }
    }
}

/// Run the fan control loop until `shutdown` resolves or the hardware fails.
///
/// Returns `Ok(())` only after a shutdown request. A temperature read or GPIO
/// write failure is logged once and returned; either way the fan is off by
/// the time this returns.
pub async fn run_control_loop<S, A, F>(
    config: &ThresholdConfig,
    source: &mut S,
    actuator: &mut A,
    shutdown: F,
) -> Result<()>
where
    S: TemperatureSource,
    A: FanActuator,
    F: Future<Output = ()>,
{
    let mut fan = ActuatorGuard::new(actuator);
    tokio::pin!(shutdown);

    info!(
        delay_secs = config.startup_delay().as_secs(),
        "Start fan control, delaying first reading"
    );
    tokio::select! {
        _ = sleep(config.startup_delay()) => {}
        _ = &mut shutdown => {
            info!("Shutdown requested during startup delay");
            return Ok(());
        }
    }

    info!(
        start_temp = config.start_temp(),
        close_temp = config.close_temp(),
        poll_secs = config.poll_interval().as_secs(),
        "Fan control loop started"
    );

    let mut controller = HysteresisController::new(config.clone());

    loop {
        if let Err(e) = process_control_iteration(&mut controller, &mut *source, &mut *fan) {
            error!(
                error = %e,
                state = %controller.state(),
                "Fan control stopped on hardware fault"
            );
            return Err(e);
        }

        tokio::select! {
            _ = sleep(config.poll_interval()) => {}
            _ = &mut shutdown => {
                info!(state = %controller.state(), "Fan control loop shutting down");
                return Ok(());
            }
        }
    }
}

/// One poll-compare-act step
fn process_control_iteration<S, A>(
    controller: &mut HysteresisController,
    source: &mut S,
    actuator: &mut A,
) -> Result<()>
where
    S: TemperatureSource,
    A: FanActuator,
{
    let temp = source.read_celsius()?;
    debug!(temp, state = %controller.state(), "Polled CPU temperature");

    if let Some(next) = controller.decide(temp) {
        actuator.set_active(next.is_on())?;
        controller.commit(next);

        if next.is_on() {
            info!(temp, "Power on fan, temp is {:.1}°C", temp);
        } else {
            info!(temp, "Power off fan, temp is {:.1}°C", temp);
        }
    }

    Ok(())
}
