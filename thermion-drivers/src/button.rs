//! Debounced push buttons
//!
//! Polled integrator debounce over an `embedded-hal` input pin. The
//! scan loop calls `poll()` at a fixed cadence (10 ms works well); an
//! edge is reported only after the raw level has been stable for
//! [`DEBOUNCE_TICKS`] consecutive polls.

use embedded_hal::digital::InputPin;

/// Consecutive stable polls required before an edge is accepted
pub const DEBOUNCE_TICKS: u8 = 4;

/// Debounced button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Debounced button input
///
/// `active_low` matches the usual wiring of a button to ground with a
/// pull-up: the pin reads low while pressed.
pub struct Button<P> {
    pin: P,
    active_low: bool,
    /// Debounce integrator (0..=DEBOUNCE_TICKS)
    integrator: u8,
    /// Debounced pressed state
    pressed: bool,
}

impl<P: InputPin> Button<P> {
    /// Create a new button
    pub fn new(pin: P, active_low: bool) -> Self {
        Self {
            pin,
            active_low,
            integrator: 0,
            pressed: false,
        }
    }

    /// Debounced pressed state
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Sample the pin once and return a debounced edge, if any
    ///
    /// A pin read fault counts as "unchanged" rather than an edge.
    pub fn poll(&mut self) -> Option<ButtonEvent> {
        let raw_pressed = match self.pin.is_high() {
            Ok(high) => high != self.active_low,
            Err(_) => return None,
        };

        if raw_pressed {
            if self.integrator < DEBOUNCE_TICKS {
                self.integrator += 1;
            }
        } else if self.integrator > 0 {
            self.integrator -= 1;
        }

        if self.integrator == DEBOUNCE_TICKS && !self.pressed {
            self.pressed = true;
            return Some(ButtonEvent::Pressed);
        }
        if self.integrator == 0 && self.pressed {
            self.pressed = false;
            return Some(ButtonEvent::Released);
        }
        None
    }
}
