//! DHT22 temperature/humidity sensor
//!
//! Single-wire protocol: the host pulls the line low to request a
//! measurement, the sensor answers with a preamble and 40 data bits
//! (16-bit humidity, 16-bit temperature, 8-bit checksum). Bit values are
//! distinguished by the length of the high phase.
//!
//! Frame decoding is kept separate from the line timing so checksum and
//! range handling are testable without hardware.

use embedded_hal::delay::DelayNs;

use thermion_core::traits::{EnvironmentSensor, Sample, SensorError};

/// Minimum interval between samples in milliseconds
///
/// The sensor needs this long to run a fresh conversion; polling faster
/// returns stale or corrupt frames.
pub const MIN_SAMPLE_INTERVAL_MS: u32 = 2_000;

/// Host start pulse length in microseconds (datasheet minimum is 1 ms)
const START_PULSE_US: u32 = 1_200;

/// High-phase length above which a bit reads as 1 (0 bits are ~26 us,
/// 1 bits are ~70 us)
const BIT_THRESHOLD_US: u32 = 40;

/// Single-wire data line abstraction
///
/// The DHT protocol switches one pin between output (start pulse) and
/// input (sensor response), which no single `embedded-hal` pin trait
/// expresses. Implementations wrap the platform's mode-switching pin;
/// the line must be pulled up so releasing it reads high when idle.
pub trait DataLine {
    /// Drive the line low
    fn set_low(&mut self);

    /// Stop driving; the pull-up returns the line high
    fn release(&mut self);

    /// Sample the current line level
    fn is_high(&mut self) -> bool;
}

/// Decode a 5-byte DHT22 frame into a sample
///
/// Byte layout: humidity hi/lo, temperature hi/lo, checksum. The
/// temperature uses sign-magnitude encoding: bit 15 set means negative.
/// Values are in 0.1-unit resolution already.
pub fn decode_frame(bytes: [u8; 5]) -> Result<Sample, SensorError> {
    let sum = bytes[0]
        .wrapping_add(bytes[1])
        .wrapping_add(bytes[2])
        .wrapping_add(bytes[3]);
    if sum != bytes[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let humidity_x10 = u16::from_be_bytes([bytes[0], bytes[1]]);

    let raw_temp = u16::from_be_bytes([bytes[2], bytes[3]]);
    let magnitude = (raw_temp & 0x7FFF) as i16;
    let temperature_x10 = if raw_temp & 0x8000 != 0 {
        -magnitude
    } else {
        magnitude
    };

    // Rated range: 0-100 %RH, -40..80 °C
    if humidity_x10 > 1_000 || !(-400..=800).contains(&temperature_x10) {
        return Err(SensorError::OutOfRange);
    }

    Ok(Sample {
        temperature_x10,
        humidity_x10,
    })
}

/// DHT22 sensor driver
///
/// Owns the data line and a delay source. One `sample()` call is one
/// complete bus transaction (~5 ms); the caller paces calls to at least
/// [`MIN_SAMPLE_INTERVAL_MS`].
pub struct Dht22<P, D> {
    line: P,
    delay: D,
}

impl<P, D> Dht22<P, D>
where
    P: DataLine,
    D: DelayNs,
{
    /// Create a new driver from a data line and delay source
    pub fn new(line: P, delay: D) -> Self {
        Self { line, delay }
    }

    /// Busy-wait until the line reaches `high`, or time out
    ///
    /// Returns the time waited in microseconds, used to classify bits.
    fn wait_level(&mut self, high: bool, timeout_us: u32) -> Result<u32, SensorError> {
        let mut waited = 0;
        while self.line.is_high() != high {
            if waited >= timeout_us {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            waited += 1;
        }
        Ok(waited)
    }

    /// Run one bus transaction and return the raw 5-byte frame
    fn read_raw(&mut self) -> Result<[u8; 5], SensorError> {
        // Host start pulse, then hand the line to the sensor
        self.line.set_low();
        self.delay.delay_us(START_PULSE_US);
        self.line.release();

        // Sensor preamble: ~30 us high, 80 us low, 80 us high
        self.wait_level(false, 60)?;
        self.wait_level(true, 100)?;
        self.wait_level(false, 100)?;

        // 40 bits: 50 us low separator, then a high phase whose length
        // encodes the bit
        let mut bytes = [0u8; 5];
        for bit in 0..40 {
            self.wait_level(true, 70)?;
            let high_time = self.wait_level(false, 100)?;
            if high_time > BIT_THRESHOLD_US {
                bytes[bit / 8] |= 1 << (7 - bit % 8);
            }
        }

        Ok(bytes)
    }
}

impl<P, D> EnvironmentSensor for Dht22<P, D>
where
    P: DataLine,
    D: DelayNs,
{
    /// Release the line and check the pull-up holds it high
    fn prepare(&mut self) -> Result<(), SensorError> {
        self.line.release();
        self.delay.delay_us(1_000);
        if !self.line.is_high() {
            // Line stuck low: missing pull-up or shorted sensor
            return Err(SensorError::Bus);
        }
        Ok(())
    }

    fn sample(&mut self) -> Result<Sample, SensorError> {
        let frame = self.read_raw()?;
        decode_frame(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame with a correct checksum for the given payload
    fn frame(b0: u8, b1: u8, b2: u8, b3: u8) -> [u8; 5] {
        [
            b0,
            b1,
            b2,
            b3,
            b0.wrapping_add(b1).wrapping_add(b2).wrapping_add(b3),
        ]
    }

    /// Line stuck at a fixed level
    struct StuckLine {
        high: bool,
    }

    impl DataLine for StuckLine {
        fn set_low(&mut self) {}
        fn release(&mut self) {}
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    /// Delay that just counts
    struct NullDelay;

    impl DelayNs for NullDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_decode_positive_temperature() {
        // 45.2 %RH, 21.5 °C
        let sample = decode_frame(frame(0x01, 0xC4, 0x00, 0xD7)).unwrap();
        assert_eq!(sample.humidity_x10, 452);
        assert_eq!(sample.temperature_x10, 215);
    }

    #[test]
    fn test_decode_negative_temperature() {
        // Sign-magnitude: 0x8000 | 95 is -9.5 °C
        let sample = decode_frame(frame(0x02, 0x58, 0x80, 0x5F)).unwrap();
        assert_eq!(sample.temperature_x10, -95);
        assert_eq!(sample.humidity_x10, 600);
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let mut bad = frame(0x01, 0xC4, 0x00, 0xD7);
        bad[4] = bad[4].wrapping_add(1);
        assert_eq!(decode_frame(bad), Err(SensorError::ChecksumMismatch));
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        // 110.0 %RH is above the rated range
        assert_eq!(
            decode_frame(frame(0x04, 0x4C, 0x00, 0xD7)),
            Err(SensorError::OutOfRange)
        );
        // -50.0 °C is below the rated range
        assert_eq!(
            decode_frame(frame(0x01, 0xC4, 0x81, 0xF4)),
            Err(SensorError::OutOfRange)
        );
    }

    #[test]
    fn test_sample_times_out_on_silent_sensor() {
        // Sensor never pulls the line low after the start pulse
        let mut dht = Dht22::new(StuckLine { high: true }, NullDelay);
        assert_eq!(dht.sample(), Err(SensorError::Timeout));
    }

    #[test]
    fn test_prepare_detects_stuck_line() {
        let mut dht = Dht22::new(StuckLine { high: false }, NullDelay);
        assert_eq!(dht.prepare(), Err(SensorError::Bus));

        let mut dht = Dht22::new(StuckLine { high: true }, NullDelay);
        assert_eq!(dht.prepare(), Ok(()));
    }
}
