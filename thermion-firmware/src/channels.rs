//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use thermion_core::config::PinRole;
use thermion_core::SensorReading;
use thermion_drivers::ButtonEvent;

/// Channel capacity for button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Latest sensor reading (updated by the coordinator task)
pub static READING: Signal<CriticalSectionRawMutex, SensorReading> = Signal::new();

/// Debounced button edges from the scan task
pub static BUTTON_EVENTS: Channel<
    CriticalSectionRawMutex,
    (PinRole, ButtonEvent),
    BUTTON_CHANNEL_SIZE,
> = Channel::new();

/// Signal that peripheral initialization failed (latches the red LED)
pub static INIT_FAULT: Signal<CriticalSectionRawMutex, ()> = Signal::new();
