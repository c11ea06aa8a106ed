//! Pin role table
//!
//! Maps the board's named buttons and status LEDs to GPIO numbers.
//! The table is built once at startup and never mutated.

/// Named pin roles on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    GreenButton,
    YellowButton,
    RedButton,
    GreenLed,
    YellowLed,
    RedLed,
}

impl PinRole {
    /// All roles, in table order
    pub const ALL: [PinRole; 6] = [
        PinRole::GreenButton,
        PinRole::YellowButton,
        PinRole::RedButton,
        PinRole::GreenLed,
        PinRole::YellowLed,
        PinRole::RedLed,
    ];

    /// Position of this role in [`PinRole::ALL`]
    const fn index(self) -> usize {
        match self {
            PinRole::GreenButton => 0,
            PinRole::YellowButton => 1,
            PinRole::RedButton => 2,
            PinRole::GreenLed => 3,
            PinRole::YellowLed => 4,
            PinRole::RedLed => 5,
        }
    }
}

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create an inverted pin with pull-up enabled
    ///
    /// The usual wiring for a button to ground.
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// One role-to-pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    pub role: PinRole,
    pub config: PinConfig,
}

/// The full role-to-pin table
///
/// Holds exactly one assignment per role. Lookup is total: every role
/// has a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinTable {
    assignments: [PinAssignment; 6],
}

/// Default board wiring: buttons on GPIO 2-4, LEDs on GPIO 5-7
pub const DEFAULT_PINS: PinTable = PinTable::new([
    PinConfig::button(2),
    PinConfig::button(3),
    PinConfig::button(4),
    PinConfig::new(5),
    PinConfig::new(6),
    PinConfig::new(7),
]);

impl Default for PinTable {
    fn default() -> Self {
        DEFAULT_PINS
    }
}

impl PinTable {
    /// Build a table from per-role pin configs, in [`PinRole::ALL`] order
    pub const fn new(configs: [PinConfig; 6]) -> Self {
        let mut assignments = [PinAssignment {
            role: PinRole::GreenButton,
            config: PinConfig::new(0),
        }; 6];
        let mut i = 0;
        while i < 6 {
            assignments[i] = PinAssignment {
                role: PinRole::ALL[i],
                config: configs[i],
            };
            i += 1;
        }
        Self { assignments }
    }

    /// Look up the pin config for a role
    ///
    /// Total: every role has exactly one entry by construction.
    pub const fn lookup(&self, role: PinRole) -> PinConfig {
        self.assignments[role.index()].config
    }

    /// GPIO number for a role
    pub const fn pin(&self, role: PinRole) -> u8 {
        self.lookup(role).pin
    }

    /// Check that no two roles share a GPIO number
    pub fn validate(&self) -> Result<(), PinTableError> {
        for (i, a) in self.assignments.iter().enumerate() {
            for b in &self.assignments[i + 1..] {
                if a.config.pin == b.config.pin {
                    return Err(PinTableError::DuplicatePin {
                        pin: a.config.pin,
                        first: a.role,
                        second: b.role,
                    });
                }
            }
        }
        Ok(())
    }

    /// Iterate over all assignments
    pub fn iter(&self) -> impl Iterator<Item = &PinAssignment> {
        self.assignments.iter()
    }
}

/// Pin table validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinTableError {
    /// Two roles mapped to the same GPIO
    DuplicatePin {
        pin: u8,
        first: PinRole,
        second: PinRole,
    },
}
