//! Button scan task
//!
//! Polls the three panel buttons at a fixed cadence and pushes debounced
//! edges into the button channel.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use thermion_core::config::PinRole;
use thermion_drivers::Button;

use crate::channels::BUTTON_EVENTS;

/// Scan cadence; four stable scans debounce an edge
const SCAN_PERIOD: Duration = Duration::from_millis(10);

/// Scan loop over the panel buttons
#[embassy_executor::task]
pub async fn button_task(mut buttons: [(PinRole, Button<Input<'static>>); 3]) {
    let mut ticker = Ticker::every(SCAN_PERIOD);

    loop {
        for (role, button) in &mut buttons {
            if let Some(event) = button.poll() {
                debug!("Button {:?}: {:?}", role, event);
                if BUTTON_EVENTS.try_send((*role, event)).is_err() {
                    warn!("Button event dropped, channel full");
                }
            }
        }
        ticker.next().await;
    }
}
