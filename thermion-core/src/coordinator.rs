//! Peripheral coordinator
//!
//! Owns the sensor and the display and sequences their lifecycle:
//! one-time initialization, paced polling, and rendering. Both devices
//! are held as explicitly owned instances; there are no ambient hardware
//! globals and no hidden initialization-order dependencies.

use crate::reading::SensorReading;
use crate::render;
use crate::traits::{DisplayBackend, DisplayError, EnvironmentSensor, SensorError};

/// Coordinator-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoordinatorError {
    /// An operation was attempted before a successful `init()`
    NotInitialized,
    /// The sensor could not be prepared during `init()`
    Sensor(SensorError),
    /// The display failed to initialize or to accept a write
    Display(DisplayError),
}

impl From<DisplayError> for CoordinatorError {
    fn from(e: DisplayError) -> Self {
        CoordinatorError::Display(e)
    }
}

/// Coordinates one sensor and one display on the shared bus
///
/// All operations are synchronous blocking calls; the coordinator holds
/// `&mut` access to both devices, so bus transactions are serialized by
/// construction. The coordinator keeps no state between calls beyond the
/// initialized flag.
///
/// Sensor faults during `poll()` are not retried here. They surface as an
/// invalid [`SensorReading`]; retry policy belongs to the caller's poll
/// loop.
pub struct Coordinator<S, D> {
    sensor: S,
    display: D,
    initialized: bool,
}

impl<S, D> Coordinator<S, D>
where
    S: EnvironmentSensor,
    D: DisplayBackend,
{
    /// Create a coordinator from owned device instances
    ///
    /// The devices are not touched until [`Coordinator::init`].
    pub fn new(sensor: S, display: D) -> Self {
        Self {
            sensor,
            display,
            initialized: false,
        }
    }

    /// Initialize both peripherals
    ///
    /// Prepares the sensor, then initializes the display. Must succeed
    /// before any other operation. Failures are reported to the caller
    /// and leave the coordinator uninitialized; a repeated call after
    /// success is a no-op.
    pub fn init(&mut self) -> Result<(), CoordinatorError> {
        if self.initialized {
            return Ok(());
        }

        self.sensor.prepare().map_err(CoordinatorError::Sensor)?;
        self.display.init()?;

        self.initialized = true;
        Ok(())
    }

    /// Whether `init()` has completed successfully
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Take one sensor reading
    ///
    /// A sensor fault (timeout, checksum, out of range) is represented as
    /// an invalid reading, not an error. The sensor hardware enforces a
    /// minimum interval between samples; the coordinator does not pace
    /// calls itself, so callers must not poll faster than
    /// `SensorHwConfig::min_sample_interval_ms`.
    pub fn poll(&mut self) -> Result<SensorReading, CoordinatorError> {
        if !self.initialized {
            return Err(CoordinatorError::NotInitialized);
        }

        let reading = match self.sensor.sample() {
            Ok(sample) => SensorReading::valid(sample),
            Err(fault) => SensorReading::fault(fault),
        };
        Ok(reading)
    }

    /// Render a reading to the display and flush
    ///
    /// A valid reading renders the temperature and humidity lines; an
    /// invalid one renders the fixed error placeholder. Transport faults
    /// while writing are surfaced to the caller.
    pub fn render(&mut self, reading: &SensorReading) -> Result<(), CoordinatorError> {
        if !self.initialized {
            return Err(CoordinatorError::NotInitialized);
        }

        let lines = render::reading_lines(reading);

        self.display.clear()?;
        for (row, line) in lines.iter().enumerate() {
            if !line.is_empty() {
                self.display.draw_text(row as u8, 0, line.as_str())?;
            }
        }
        self.display.flush()?;
        Ok(())
    }

    /// Access the owned display for device-specific controls
    ///
    /// The coordinator stays the sole owner; this hands out a borrow for
    /// things outside the render path (contrast, sleep).
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Sample;
    use heapless::String;

    /// Scripted sensor for testing
    struct MockSensor {
        prepare_result: Result<(), SensorError>,
        sample_result: Result<Sample, SensorError>,
        prepare_calls: usize,
    }

    impl MockSensor {
        fn ok(temperature_x10: i16, humidity_x10: u16) -> Self {
            Self {
                prepare_result: Ok(()),
                sample_result: Ok(Sample {
                    temperature_x10,
                    humidity_x10,
                }),
                prepare_calls: 0,
            }
        }

        fn faulty(fault: SensorError) -> Self {
            Self {
                prepare_result: Ok(()),
                sample_result: Err(fault),
                prepare_calls: 0,
            }
        }
    }

    impl EnvironmentSensor for MockSensor {
        fn prepare(&mut self) -> Result<(), SensorError> {
            self.prepare_calls += 1;
            self.prepare_result
        }

        fn sample(&mut self) -> Result<Sample, SensorError> {
            self.sample_result
        }
    }

    /// Display that records drawn text
    struct MockDisplay {
        init_result: Result<(), DisplayError>,
        ready: bool,
        lines: [String<21>; 4],
        flushes: usize,
    }

    impl MockDisplay {
        fn ok() -> Self {
            Self {
                init_result: Ok(()),
                ready: false,
                lines: core::array::from_fn(|_| String::new()),
                flushes: 0,
            }
        }

        fn absent() -> Self {
            Self {
                init_result: Err(DisplayError::Communication),
                ready: false,
                lines: core::array::from_fn(|_| String::new()),
                flushes: 0,
            }
        }
    }

    impl DisplayBackend for MockDisplay {
        fn init(&mut self) -> Result<(), DisplayError> {
            self.init_result?;
            self.ready = true;
            Ok(())
        }

        fn clear(&mut self) -> Result<(), DisplayError> {
            for line in &mut self.lines {
                line.clear();
            }
            Ok(())
        }

        fn draw_text(&mut self, row: u8, _col: u8, text: &str) -> Result<(), DisplayError> {
            let line = self
                .lines
                .get_mut(row as usize)
                .ok_or(DisplayError::InvalidCoordinates)?;
            line.clear();
            line.push_str(text)
                .map_err(|_| DisplayError::BufferOverflow)?;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (21, 4)
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_operations_require_init() {
        let mut coord = Coordinator::new(MockSensor::ok(220, 400), MockDisplay::ok());
        assert_eq!(coord.poll(), Err(CoordinatorError::NotInitialized));

        let reading = SensorReading::valid(Sample {
            temperature_x10: 220,
            humidity_x10: 400,
        });
        assert_eq!(coord.render(&reading), Err(CoordinatorError::NotInitialized));
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut coord = Coordinator::new(MockSensor::ok(220, 400), MockDisplay::ok());
        assert_eq!(coord.init(), Ok(()));
        assert_eq!(coord.init(), Ok(()));
        // Second call did not re-run the sensor prepare sequence
        assert_eq!(coord.sensor.prepare_calls, 1);
        assert!(coord.is_initialized());
    }

    #[test]
    fn test_init_reports_absent_display() {
        let mut coord = Coordinator::new(MockSensor::ok(220, 400), MockDisplay::absent());
        assert_eq!(
            coord.init(),
            Err(CoordinatorError::Display(DisplayError::Communication))
        );
        assert!(!coord.is_initialized());
        // Still uninitialized: poll stays rejected
        assert_eq!(coord.poll(), Err(CoordinatorError::NotInitialized));
    }

    #[test]
    fn test_init_reports_sensor_failure() {
        let mut sensor = MockSensor::ok(0, 0);
        sensor.prepare_result = Err(SensorError::Bus);
        let mut coord = Coordinator::new(sensor, MockDisplay::ok());
        assert_eq!(
            coord.init(),
            Err(CoordinatorError::Sensor(SensorError::Bus))
        );
        assert!(!coord.is_initialized());
    }

    #[test]
    fn test_poll_wraps_fault_as_invalid_reading() {
        let mut coord = Coordinator::new(
            MockSensor::faulty(SensorError::ChecksumMismatch),
            MockDisplay::ok(),
        );
        coord.init().unwrap();

        let reading = coord.poll().unwrap();
        assert!(!reading.is_valid());
        assert_eq!(reading.temperature_x10(), None);
        assert_eq!(reading.fault_kind(), Some(SensorError::ChecksumMismatch));
    }

    #[test]
    fn test_poll_then_render_scenario() {
        let mut coord = Coordinator::new(MockSensor::ok(220, 387), MockDisplay::ok());
        coord.init().unwrap();

        let reading = coord.poll().unwrap();
        assert!(reading.is_valid());
        assert_eq!(reading.temperature_x10(), Some(220));

        coord.render(&reading).unwrap();
        assert_eq!(coord.display.lines[0].as_str(), "Temp: 22.0C");
        assert_eq!(coord.display.lines[1].as_str(), "RH: 38.7%");
        assert_eq!(coord.display.flushes, 1);
    }

    #[test]
    fn test_render_fault_overwrites_stale_values() {
        let mut coord = Coordinator::new(MockSensor::ok(215, 500), MockDisplay::ok());
        coord.init().unwrap();

        let good = coord.poll().unwrap();
        coord.render(&good).unwrap();
        assert_eq!(coord.display.lines[0].as_str(), "Temp: 21.5C");

        let bad = SensorReading::fault(SensorError::Timeout);
        coord.render(&bad).unwrap();
        assert_eq!(coord.display.lines[0].as_str(), "Sensor error");
        assert!(coord.display.lines[1].is_empty());
    }
}
