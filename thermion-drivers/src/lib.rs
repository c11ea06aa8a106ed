//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermion-core for the panel's hardware:
//!
//! - DHT22 single-wire temperature/humidity sensor
//! - SSD1306 I2C OLED display
//! - Debounced push buttons
//! - Status LEDs

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod dht22;
mod font;
pub mod led;
pub mod ssd1306;

pub use button::{Button, ButtonEvent};
pub use dht22::Dht22;
pub use led::StatusLed;
pub use ssd1306::Ssd1306;
