//! Status LED task
//!
//! Mirrors the panel state onto the three LEDs: yellow while waiting for
//! the first reading, green while readings are valid, red on sensor
//! faults or failed initialization.

use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;

use thermion_drivers::StatusLed;

use crate::channels::{INIT_FAULT, READING};

/// LED update loop
#[embassy_executor::task]
pub async fn status_led_task(
    mut green: StatusLed<Output<'static>>,
    mut yellow: StatusLed<Output<'static>>,
    mut red: StatusLed<Output<'static>>,
) {
    // No reading yet
    yellow.on();

    loop {
        match select(READING.wait(), INIT_FAULT.wait()).await {
            Either::First(reading) => {
                yellow.off();
                green.set(reading.is_valid());
                red.set(!reading.is_valid());
            }
            Either::Second(()) => {
                // Initialization failed; latch red until power cycle
                yellow.off();
                green.off();
                red.on();
            }
        }
    }
}
