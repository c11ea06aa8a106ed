//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod sensor;

pub use display::{DisplayBackend, DisplayError};
pub use sensor::{EnvironmentSensor, Sample, SensorError};
