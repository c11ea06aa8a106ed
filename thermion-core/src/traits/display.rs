//! Display backend trait
//!
//! Defines the interface for the status display.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display (no ACK, bus fault)
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Text does not fit the row
    BufferOverflow,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering text to the
/// status display. Implementations handle the specifics of the display
/// controller and its transport.
pub trait DisplayBackend {
    /// Initialize the display hardware
    ///
    /// Fails with [`DisplayError::Communication`] if the device does not
    /// acknowledge on its transport address.
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number in character cells (0-based)
    /// - `col`: Column number in character cells (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// Sends the frame buffer to the hardware; nothing drawn is visible
    /// until this is called.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display has been initialized and is usable
    fn is_ready(&self) -> bool;
}
