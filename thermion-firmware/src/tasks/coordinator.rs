//! Coordinator task
//!
//! Owns the sensor and the display through the peripheral coordinator
//! and runs the poll/render loop. Button events adjust the display or
//! force a refresh between ticks.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_time::{Delay, Duration, Instant, Timer};

use thermion_core::config::{PinRole, SensorHwConfig};
use thermion_core::Coordinator;
use thermion_drivers::{ButtonEvent, Dht22, Ssd1306};

use crate::board::DhtLine;
use crate::channels::{BUTTON_EVENTS, INIT_FAULT, READING};

/// Display refresh cadence (the sensor allows faster, the panel does
/// not need it)
const POLL_PERIOD: Duration = Duration::from_secs(10);

/// Contrast steps cycled by the yellow button
const CONTRAST_LEVELS: [u8; 3] = [0x20, 0x8F, 0xFF];

pub type PanelSensor = Dht22<DhtLine, Delay>;
pub type PanelDisplay = Ssd1306<I2c<'static, Blocking>>;
pub type PanelCoordinator = Coordinator<PanelSensor, PanelDisplay>;

/// Poll/render loop
#[embassy_executor::task]
pub async fn coordinator_task(mut coordinator: PanelCoordinator, sensor_config: SensorHwConfig) {
    if let Err(e) = coordinator.init() {
        error!("Peripheral init failed: {:?}", e);
        INIT_FAULT.signal(());
        return;
    }
    info!("Peripherals initialized");

    let min_interval = Duration::from_millis(sensor_config.min_sample_interval_ms as u64);
    let mut contrast_step = 1;
    let mut display_on = true;

    // The sensor needs a quiet period after power-up before the first
    // transaction
    Timer::after(min_interval).await;

    loop {
        match coordinator.poll() {
            Ok(reading) => {
                if let Some(t) = reading.temperature_x10() {
                    debug!("Temperature: {}.{} C", t / 10, (t % 10).abs());
                } else {
                    warn!("Sensor fault: {:?}", reading.fault_kind());
                }
                READING.signal(reading);

                if let Err(e) = coordinator.render(&reading) {
                    // Transient display fault; the next tick redraws
                    warn!("Render failed: {:?}", e);
                }
            }
            Err(e) => {
                // Unreachable once init has succeeded
                error!("Poll rejected: {:?}", e);
            }
        }
        let sampled_at = Instant::now();

        // Wait out the tick, servicing buttons as they arrive
        let deadline = sampled_at + POLL_PERIOD;
        loop {
            match select(Timer::at(deadline), BUTTON_EVENTS.receive()).await {
                Either::First(()) => break,
                Either::Second((role, ButtonEvent::Pressed)) => match role {
                    PinRole::GreenButton => {
                        // Immediate refresh, clamped to the sensor's
                        // minimum sample interval
                        let since = Instant::now() - sampled_at;
                        if since >= min_interval {
                            break;
                        }
                        debug!("Refresh ignored, sensor interval not elapsed");
                    }
                    PinRole::YellowButton => {
                        contrast_step = (contrast_step + 1) % CONTRAST_LEVELS.len();
                        let contrast = CONTRAST_LEVELS[contrast_step];
                        info!("Contrast set to {}", contrast);
                        if let Err(e) = coordinator.display_mut().set_contrast(contrast) {
                            warn!("Contrast change failed: {:?}", e);
                        }
                    }
                    PinRole::RedButton => {
                        display_on = !display_on;
                        info!("Display {}", if display_on { "on" } else { "sleeping" });
                        if let Err(e) = coordinator.display_mut().set_power(display_on) {
                            warn!("Power change failed: {:?}", e);
                        }
                    }
                    _ => {}
                },
                Either::Second(_) => {}
            }
        }
    }
}
