//! Board wiring helpers

use embassy_rp::gpio::{Flex, Pull};

use thermion_drivers::dht22::DataLine;

/// DHT22 data line on a mode-switching GPIO
///
/// The line idles as an input with the internal pull-up holding it high;
/// the start pulse briefly drives it low as an output.
pub struct DhtLine {
    pin: Flex<'static>,
}

impl DhtLine {
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self { pin }
    }
}

impl DataLine for DhtLine {
    fn set_low(&mut self) {
        self.pin.set_low();
        self.pin.set_as_output();
    }

    fn release(&mut self) {
        self.pin.set_as_input();
    }

    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}
