//! Environment sensor trait

/// Errors that can occur while talking to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not respond on the data line
    Timeout,
    /// Frame checksum did not match the payload
    ChecksumMismatch,
    /// Decoded value outside the sensor's rated range
    OutOfRange,
    /// Underlying bus or pin fault
    Bus,
}

/// One raw measurement from the sensor
///
/// Values are fixed point with 0.1-unit resolution: 21.5 degrees Celsius
/// is `temperature_x10 == 215`, 45.2 %RH is `humidity_x10 == 452`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Temperature in 0.1 degrees Celsius
    pub temperature_x10: i16,
    /// Relative humidity in 0.1 %RH
    pub humidity_x10: u16,
}

/// Trait for combined temperature/humidity sensors
///
/// Implementations handle the specific sensor protocol (DHT22 single-wire,
/// I2C sensors, etc.). One `sample()` call is one bus transaction.
pub trait EnvironmentSensor {
    /// Make the sensor ready for sampling
    ///
    /// Called once before the first `sample()`. For single-wire sensors
    /// this releases the data line to its idle state.
    fn prepare(&mut self) -> Result<(), SensorError>;

    /// Take one measurement
    ///
    /// Takes `&mut self` because the bus transaction requires exclusive
    /// access to the line. Sensors typically enforce a minimum interval
    /// between transactions; callers are responsible for pacing.
    fn sample(&mut self) -> Result<Sample, SensorError>;
}
