//! Smartfan Daemon (smartfand)
//!
//! Switches a GPIO-driven fan on and off from the CPU temperature of a
//! single-board computer.
//!
//! # Behaviour
//! - Fan pin is claimed at its off level before anything else touches it
//! - First reading after a settle delay, then one reading per poll interval
//! - Fan on strictly above the start threshold, off strictly below the close
//!   threshold
//! - Any sensor or GPIO failure stops the daemon with the fan off, leaving
//!   the restart to the service manager
//! - SIGINT/SIGTERM stop the daemon with the fan off
//!
//! # Environment
//! - `SMARTFAN_LOG` - log level (trace, debug, info, warn, error)
//! - `SMARTFAN_LOG_FILE` - log file path, empty to disable
//! - `SMARTFAN_TZ` - timezone for log timestamps

mod config;
mod control;
mod logging;

use std::future::Future;

use sf_core::constants::{gpio, temperature, timing};
use sf_core::{GpioFan, ThermalZone, ThresholdConfig};
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

use config::DaemonConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve on the first SIGINT or SIGTERM.
///
/// Handlers are registered here, not on first poll, so a signal arriving
/// during startup is not lost.
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => info!("SIGNAL: Received SIGINT - initiating shutdown"),
            _ = terminate.recv() => info!("SIGNAL: Received SIGTERM - initiating shutdown"),
        }
    })
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        // Logging may not be up yet
        eprintln!("PANIC at {}: {}", location, message);
        error!(location = %location, "PANIC: {} - fan will be switched off", message);
    }));
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    install_panic_hook();

    let daemon_config = DaemonConfig::from_env();
    daemon_config.apply_timezone();
    let targets = logging::init_logging(&daemon_config);

    info!("STARTUP: smartfand {} starting", VERSION);
    info!(
        "STARTUP: Logging to {}{}",
        if targets.journald { "systemd journal" } else { "stdout" },
        targets
            .file
            .as_ref()
            .map(|p| format!(" and {}", p.display()))
            .unwrap_or_default()
    );
    info!("STARTUP: Timezone: {}", daemon_config.timezone);

    let shutdown = match shutdown_signal() {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Failed to install signal handlers");
            std::process::exit(1);
        }
    };

    let thresholds = match ThresholdConfig::new(
        temperature::START_TEMP,
        temperature::CLOSE_TEMP,
        timing::POLL_INTERVAL,
        timing::STARTUP_DELAY,
    ) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Compiled-in thresholds are invalid, refusing to start");
            std::process::exit(1);
        }
    };

    let mut fan = match GpioFan::open(gpio::FAN_PIN, gpio::FAN_ACTIVE_LEVEL) {
        Ok(fan) => fan,
        Err(e) => {
            error!(
                error = %e,
                hardware_fault = e.is_hardware_fault(),
                "Failed to initialize fan output"
            );
            std::process::exit(1);
        }
    };
    let mut zone = ThermalZone::cpu();
    info!(
        "STARTUP: Fan on GPIO {}, temperature from {}",
        fan.pin(),
        zone.path().display()
    );

    match control::run_control_loop(&thresholds, &mut zone, &mut fan, shutdown).await {
        Ok(()) => info!("SHUTDOWN: smartfand stopped"),
        Err(_) => {
            // Already logged by the control loop
            info!("SHUTDOWN: smartfand exiting after hardware fault");
            std::process::exit(1);
        }
    }
}
