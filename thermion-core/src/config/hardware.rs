//! Hardware configuration types
//!
//! These types define the hardware-level configuration for the display,
//! the sensor, and the panel pins. Everything here is fixed at startup;
//! there is no runtime mutation and no on-device persistence.

use super::pins::{PinTable, PinTableError, DEFAULT_PINS};

/// Display transport configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayHwConfig {
    /// 7-bit I2C address (0x3C or 0x3D on common modules)
    pub i2c_address: u8,
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
}

impl Default for DisplayHwConfig {
    fn default() -> Self {
        Self {
            i2c_address: 0x3C,
            width: 128,
            height: 32,
        }
    }
}

/// Sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorHwConfig {
    /// GPIO for the single-wire data line
    pub data_pin: u8,
    /// Minimum interval between samples in milliseconds
    ///
    /// The sensor hardware rejects faster polling; the poll loop must
    /// honor this.
    pub min_sample_interval_ms: u32,
}

impl Default for SensorHwConfig {
    fn default() -> Self {
        Self {
            data_pin: 8,
            min_sample_interval_ms: 2_000,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Button and LED pin table
    pub pins: PinTable,
    /// Display transport parameters
    pub display: DisplayHwConfig,
    /// Sensor parameters
    pub sensor: SensorHwConfig,
}

impl PanelConfig {
    /// The stock board wiring
    pub const fn new() -> Self {
        Self {
            pins: DEFAULT_PINS,
            display: DisplayHwConfig {
                i2c_address: 0x3C,
                width: 128,
                height: 32,
            },
            sensor: SensorHwConfig {
                data_pin: 8,
                min_sample_interval_ms: 2_000,
            },
        }
    }

    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<(), PinTableError> {
        self.pins.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_config_is_consistent() {
        let config = PanelConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.i2c_address, 0x3C);
        assert_eq!(config.sensor.min_sample_interval_ms, 2_000);
    }
}
