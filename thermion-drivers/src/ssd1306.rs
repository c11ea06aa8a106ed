//! SSD1306 OLED display driver
//!
//! Driver for 128x32 SSD1306-based OLED modules via I2C. Text-mode
//! rendering with a 6x8 font (21 chars x 4 rows), page-organized frame
//! buffer, single-burst flush in horizontal addressing mode.

use embedded_hal::i2c::I2c;

use thermion_core::traits::{DisplayBackend, DisplayError};

use crate::font::glyph;

/// SSD1306 I2C address (typically 0x3C, or 0x3D with the address strap)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 32;
const PAGES: usize = HEIGHT / 8;

/// Character cells (6x8 font)
const TEXT_COLS: u8 = (WIDTH / 6) as u8;
const TEXT_ROWS: u8 = PAGES as u8;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEM_MODE: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
}

/// SSD1306 OLED driver
///
/// Holds a page-organized frame buffer; drawing mutates the buffer and
/// `flush()` sends it to the device in one burst.
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
    ready: bool,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new driver for the given I2C address
    ///
    /// The device is not touched until [`DisplayBackend::init`].
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [[0; WIDTH]; PAGES],
            ready: false,
        }
    }

    /// Send one command byte to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[0x00, cmd])
            .map_err(|_| DisplayError::Communication)
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Turn the panel on or off (sleep mode)
    ///
    /// Sleep keeps the frame buffer and device state; waking restores the
    /// previous image without re-initialization.
    pub fn set_power(&mut self, on: bool) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }
        self.command(if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF })
    }
}

impl<I2C> DisplayBackend for Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Run the init command sequence
    ///
    /// The first command write doubles as the address probe: a missing or
    /// unpowered module does not acknowledge and this fails with
    /// [`DisplayError::Communication`].
    fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            (HEIGHT - 1) as u8, // 32 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEM_MODE,
            0x00,                  // Horizontal addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x02, // Sequential COM config for 128x32
            cmd::SET_CONTRAST,
            0x8F,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::DEACTIVATE_SCROLL,
            cmd::RESUME_FROM_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.ready = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }
        if row >= TEXT_ROWS || col >= TEXT_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }
        if text.chars().count() > (TEXT_COLS - col) as usize {
            return Err(DisplayError::BufferOverflow);
        }

        let page = &mut self.buffer[row as usize];
        let mut x = col as usize * 6;

        for ch in text.chars() {
            let g = glyph(ch);
            page[x..x + 6].copy_from_slice(g);
            x += 6;
        }

        Ok(())
    }

    /// Send the whole frame buffer in one burst
    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }

        // Reset the addressing window to the full panel
        for c in [
            cmd::SET_COL_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ] {
            self.command(c)?;
        }

        let mut data = [0u8; WIDTH * PAGES + 1];
        data[0] = 0x40; // Data mode
        for (page, chunk) in self.buffer.iter().zip(data[1..].chunks_mut(WIDTH)) {
            chunk.copy_from_slice(page);
        }
        self.i2c
            .write(self.address, &data)
            .map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u8, u8) {
        (TEXT_COLS, TEXT_ROWS)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT_6X8;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    /// I2C bus that records write lengths and the data-mode flag
    struct GoodBus {
        writes: usize,
        last_len: usize,
        last_first_byte: u8,
    }

    impl GoodBus {
        fn new() -> Self {
            Self {
                writes: 0,
                last_len: 0,
                last_first_byte: 0,
            }
        }
    }

    impl ErrorType for GoodBus {
        type Error = core::convert::Infallible;
    }

    impl I2c for GoodBus {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let Operation::Write(data) = op {
                    self.writes += 1;
                    self.last_len = data.len();
                    self.last_first_byte = data[0];
                }
            }
            Ok(())
        }
    }

    /// Bus with no device on it
    struct AbsentBus;

    #[derive(Debug)]
    struct Nack;

    impl embedded_hal::i2c::Error for Nack {
        fn kind(&self) -> ErrorKind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        }
    }

    impl ErrorType for AbsentBus {
        type Error = Nack;
    }

    impl I2c for AbsentBus {
        fn transaction(
            &mut self,
            _address: u8,
            _operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            Err(Nack)
        }
    }

    #[test]
    fn test_init_probes_address() {
        let mut oled = Ssd1306::new(AbsentBus, DEFAULT_ADDRESS);
        assert_eq!(oled.init(), Err(DisplayError::Communication));
        assert!(!oled.is_ready());
    }

    #[test]
    fn test_draw_before_init_rejected() {
        let mut oled = Ssd1306::new(GoodBus::new(), DEFAULT_ADDRESS);
        assert_eq!(
            oled.draw_text(0, 0, "hi"),
            Err(DisplayError::NotInitialized)
        );
        assert_eq!(oled.flush(), Err(DisplayError::NotInitialized));
        assert_eq!(oled.set_contrast(0x40), Err(DisplayError::NotInitialized));
    }

    #[test]
    fn test_text_lands_in_page_buffer() {
        let mut oled = Ssd1306::new(GoodBus::new(), DEFAULT_ADDRESS);
        oled.init().unwrap();

        oled.draw_text(1, 2, "A").unwrap();
        let expected = FONT_6X8[('A' as usize) - 0x20];
        assert_eq!(&oled.buffer[1][12..18], &expected);
        // Other pages untouched
        assert!(oled.buffer[0].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bounds_checks() {
        let mut oled = Ssd1306::new(GoodBus::new(), DEFAULT_ADDRESS);
        oled.init().unwrap();

        assert_eq!(
            oled.draw_text(4, 0, "x"),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            oled.draw_text(0, 21, "x"),
            Err(DisplayError::InvalidCoordinates)
        );
        // 22 chars cannot fit a 21-column row
        assert_eq!(
            oled.draw_text(0, 0, "0123456789012345678901"),
            Err(DisplayError::BufferOverflow)
        );
    }

    #[test]
    fn test_flush_sends_full_buffer() {
        let mut oled = Ssd1306::new(GoodBus::new(), DEFAULT_ADDRESS);
        oled.init().unwrap();
        oled.clear().unwrap();
        oled.flush().unwrap();

        // Last write is the burst: control byte plus 4 pages of 128
        assert_eq!(oled.i2c.last_len, WIDTH * PAGES + 1);
        assert_eq!(oled.i2c.last_first_byte, 0x40);
        // Init commands, window commands, and one data burst
        assert!(oled.i2c.writes > 10);
    }

    #[test]
    fn test_dimensions() {
        let oled = Ssd1306::new(GoodBus::new(), DEFAULT_ADDRESS);
        assert_eq!(oled.dimensions(), (21, 4));
    }
}
