//! Sensor reading data model

use crate::traits::{Sample, SensorError};

/// Outcome of one sensor poll
///
/// A reading is either valid, carrying temperature and humidity, or a
/// fault carrying the cause. The numeric values of a fault reading are
/// not reachable through the public API, so stale or garbage values can
/// never be interpreted by mistake.
///
/// Readings are immutable once constructed and cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    sample: Sample,
    fault: Option<SensorError>,
}

impl SensorReading {
    /// Create a valid reading from a raw sample
    pub const fn valid(sample: Sample) -> Self {
        Self {
            sample,
            fault: None,
        }
    }

    /// Create a fault reading
    pub const fn fault(error: SensorError) -> Self {
        Self {
            sample: Sample {
                temperature_x10: 0,
                humidity_x10: 0,
            },
            fault: Some(error),
        }
    }

    /// Whether the reading carries usable values
    pub const fn is_valid(&self) -> bool {
        self.fault.is_none()
    }

    /// Temperature in 0.1 degrees Celsius, if valid
    pub fn temperature_x10(&self) -> Option<i16> {
        self.fault.is_none().then_some(self.sample.temperature_x10)
    }

    /// Relative humidity in 0.1 %RH, if valid
    pub fn humidity_x10(&self) -> Option<u16> {
        self.fault.is_none().then_some(self.sample.humidity_x10)
    }

    /// The fault that produced this reading, if any
    pub const fn fault_kind(&self) -> Option<SensorError> {
        self.fault
    }
}
