//! Thermion - Sensor Panel Firmware
//!
//! Main firmware binary for RP2040-based boards carrying a DHT22
//! temperature/humidity sensor, an SSD1306 128x32 OLED, three push
//! buttons, and three status LEDs.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use thermion_core::config::{PanelConfig, PinConfig, PinRole};
use thermion_core::Coordinator;
use thermion_drivers::{Button, Dht22, Ssd1306, StatusLed};

mod board;
mod channels;
mod tasks;

use board::DhtLine;

/// Pull setting for a configured input pin
fn input_pull(config: PinConfig) -> Pull {
    if config.pull_up {
        Pull::Up
    } else {
        Pull::None
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Thermion firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = PanelConfig::new();
    if let Err(e) = config.validate() {
        defmt::panic!("Invalid pin table: {:?}", e);
    }

    // Display on I2C0 (stock wiring: SDA=GPIO0, SCL=GPIO1), blocking
    // transactions since the coordinator serializes the bus anyway
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, i2c::Config::default());
    let display = Ssd1306::new(i2c, config.display.i2c_address);

    // Sensor data line (stock wiring: GPIO8)
    let sensor = Dht22::new(DhtLine::new(Flex::new(p.PIN_8)), Delay);

    let coordinator = Coordinator::new(sensor, display);

    // Panel inputs/outputs follow the pin table: buttons GPIO2-4,
    // LEDs GPIO5-7
    let pins = &config.pins;
    let green_btn = pins.lookup(PinRole::GreenButton);
    let yellow_btn = pins.lookup(PinRole::YellowButton);
    let red_btn = pins.lookup(PinRole::RedButton);
    let buttons = [
        (
            PinRole::GreenButton,
            Button::new(Input::new(p.PIN_2, input_pull(green_btn)), green_btn.inverted),
        ),
        (
            PinRole::YellowButton,
            Button::new(
                Input::new(p.PIN_3, input_pull(yellow_btn)),
                yellow_btn.inverted,
            ),
        ),
        (
            PinRole::RedButton,
            Button::new(Input::new(p.PIN_4, input_pull(red_btn)), red_btn.inverted),
        ),
    ];

    let green_led = StatusLed::new(
        Output::new(p.PIN_5, Level::Low),
        pins.lookup(PinRole::GreenLed).inverted,
    );
    let yellow_led = StatusLed::new(
        Output::new(p.PIN_6, Level::Low),
        pins.lookup(PinRole::YellowLed).inverted,
    );
    let red_led = StatusLed::new(
        Output::new(p.PIN_7, Level::Low),
        pins.lookup(PinRole::RedLed).inverted,
    );

    info!("Panel I/O configured");

    // Spawn tasks
    spawner
        .spawn(tasks::coordinator_task(coordinator, config.sensor))
        .unwrap();
    spawner.spawn(tasks::button_task(buttons)).unwrap();
    spawner
        .spawn(tasks::status_led_task(green_led, yellow_led, red_led))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
