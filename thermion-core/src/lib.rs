//! Board-agnostic core logic for the Thermion sensor panel
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensor, display)
//! - Sensor reading data model
//! - Pin and peripheral configuration tables
//! - The peripheral coordinator (init / poll / render)
//! - Text rendering for the status display

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod coordinator;
pub mod reading;
pub mod render;
pub mod traits;

pub use coordinator::{Coordinator, CoordinatorError};
pub use reading::SensorReading;
