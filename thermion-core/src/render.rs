//! Text rendering for the status display
//!
//! Builds the display lines for a sensor reading. Kept separate from the
//! coordinator so the formatting is testable without a display backend.

use core::fmt::Write;

use heapless::String;

use crate::reading::SensorReading;

/// Maximum characters per display line (128px / 6px glyphs)
pub const LINE_LEN: usize = 21;

/// Placeholder shown when the reading is not valid
pub const SENSOR_ERROR_TEXT: &str = "Sensor error";

/// A display line of text
pub type Line = String<LINE_LEN>;

/// Format a fixed-point x10 value as `<int>.<frac>`
///
/// 215 becomes "21.5", -5 becomes "-0.5".
fn write_x10(line: &mut Line, value_x10: i32) {
    let sign = if value_x10 < 0 { "-" } else { "" };
    let magnitude = value_x10.unsigned_abs();
    let _ = write!(line, "{}{}.{}", sign, magnitude / 10, magnitude % 10);
}

/// Build the temperature line, e.g. `"Temp: 21.5C"`
pub fn temperature_line(temperature_x10: i16) -> Line {
    let mut line = Line::new();
    let _ = line.push_str("Temp: ");
    write_x10(&mut line, temperature_x10 as i32);
    let _ = line.push('C');
    line
}

/// Build the humidity line, e.g. `"RH: 45.2%"`
pub fn humidity_line(humidity_x10: u16) -> Line {
    let mut line = Line::new();
    let _ = line.push_str("RH: ");
    write_x10(&mut line, humidity_x10 as i32);
    let _ = line.push('%');
    line
}

/// Build both display lines for a reading
///
/// A fault reading produces the fixed error placeholder and an empty
/// second line, regardless of any previously valid values.
pub fn reading_lines(reading: &SensorReading) -> [Line; 2] {
    match (reading.temperature_x10(), reading.humidity_x10()) {
        (Some(t), Some(h)) => [temperature_line(t), humidity_line(h)],
        _ => {
            let mut line = Line::new();
            let _ = line.push_str(SENSOR_ERROR_TEXT);
            [line, Line::new()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Sample, SensorError};

    fn valid(temperature_x10: i16, humidity_x10: u16) -> SensorReading {
        SensorReading::valid(Sample {
            temperature_x10,
            humidity_x10,
        })
    }

    #[test]
    fn test_temperature_line() {
        assert_eq!(temperature_line(215).as_str(), "Temp: 21.5C");
        assert_eq!(temperature_line(220).as_str(), "Temp: 22.0C");
        assert_eq!(temperature_line(0).as_str(), "Temp: 0.0C");
    }

    #[test]
    fn test_negative_temperature_keeps_sign() {
        assert_eq!(temperature_line(-5).as_str(), "Temp: -0.5C");
        assert_eq!(temperature_line(-123).as_str(), "Temp: -12.3C");
    }

    #[test]
    fn test_humidity_line() {
        assert_eq!(humidity_line(452).as_str(), "RH: 45.2%");
        assert_eq!(humidity_line(1000).as_str(), "RH: 100.0%");
    }

    #[test]
    fn test_fault_renders_placeholder() {
        let lines = reading_lines(&SensorReading::fault(SensorError::Timeout));
        assert_eq!(lines[0].as_str(), SENSOR_ERROR_TEXT);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_valid_reading_lines() {
        let lines = reading_lines(&valid(220, 387));
        assert_eq!(lines[0].as_str(), "Temp: 22.0C");
        assert_eq!(lines[1].as_str(), "RH: 38.7%");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any temperature fits the line and contains its digits
            #[test]
            fn temperature_always_fits(t in i16::MIN..=i16::MAX) {
                let line = temperature_line(t);
                prop_assert!(line.len() <= LINE_LEN);
                prop_assert!(line.as_str().starts_with("Temp: "));
                prop_assert!(line.as_str().ends_with('C'));
                // The integer part must round-trip
                let body = &line.as_str()[6..line.len() - 1];
                let mut parts = body.split('.');
                let int_part: i32 = parts.next().unwrap().parse().unwrap();
                let frac_part: i32 = parts.next().unwrap().parse().unwrap();
                let sign = if t < 0 { -1 } else { 1 };
                prop_assert_eq!(int_part * 10 + sign * frac_part, t as i32);
            }

            /// Fault readings never leak numbers into the output
            #[test]
            fn fault_never_shows_digits(_seed in 0u8..4) {
                let reading = SensorReading::fault(SensorError::Bus);
                let lines = reading_lines(&reading);
                prop_assert!(!lines[0].as_str().chars().any(|c| c.is_ascii_digit()));
            }
        }
    }
}
