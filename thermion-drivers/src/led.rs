//! Status LED output
//!
//! Drives a panel LED via a GPIO pin, directly or through a transistor.
//! The pin can be configured as active-high (default) or active-low.

use embedded_hal::digital::OutputPin;

/// Status LED
pub struct StatusLed<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = LED on)
    on: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Create a new LED output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the LED lights when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set(false);
        led
    }

    /// Set the LED state
    pub fn set(&mut self, on: bool) {
        self.on = on;
        // Pin writes on GPIO are infallible on this class of hardware
        if on != self.inverted {
            let _ = self.pin.set_high();
        } else {
            let _ = self.pin.set_low();
        }
    }

    /// Turn the LED on
    pub fn on(&mut self) {
        self.set(true);
    }

    /// Turn the LED off
    pub fn off(&mut self) {
        self.set(false);
    }

    /// Current logical state
    pub fn is_on(&self) -> bool {
        self.on
    }
}
