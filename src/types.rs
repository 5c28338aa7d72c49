//! Shared types used across the LED console firmware
//!
//! This module defines the small domain vocabulary of the console:
//! which LED is addressed, what state it is in, and how that state maps
//! onto an electrical pin level.

use core::fmt;

/// Number of user LEDs driven by the console
pub const LED_COUNT: usize = 3;

/// One of the three board LEDs
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LedId {
    /// First user LED
    Led1,
    /// Second user LED
    Led2,
    /// Third user LED
    Led3,
}

impl LedId {
    /// All LEDs, in status-line order
    pub const ALL: [Self; LED_COUNT] = [Self::Led1, Self::Led2, Self::Led3];

    /// Zero-based index into LED arrays
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Led1 => 0,
            Self::Led2 => 1,
            Self::Led3 => 2,
        }
    }

    /// One-based number as printed on the board and in the status line
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Look up an LED by its one-based number
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Led1),
            2 => Some(Self::Led2),
            3 => Some(Self::Led3),
            _ => None,
        }
    }
}

impl fmt::Display for LedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LED{}", self.number())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LedId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "LED{}", self.number());
    }
}

/// Logical LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl LedState {
    /// Toggle the LED state
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Status text used on the serial console
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Electrical level of a GPIO output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedLevel {
    /// Pin driven low
    Low,
    /// Pin driven high
    High,
}

/// How an LED is wired to its pin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Polarity {
    /// LED lights when the pin is high
    ActiveHigh,
    /// LED lights when the pin is low (sinks current into the MCU)
    #[default]
    ActiveLow,
}

impl Polarity {
    /// Pin level that produces the given state
    #[must_use]
    pub const fn level_for(self, state: LedState) -> LedLevel {
        match (self, state) {
            (Self::ActiveHigh, LedState::On) | (Self::ActiveLow, LedState::Off) => LedLevel::High,
            (Self::ActiveHigh, LedState::Off) | (Self::ActiveLow, LedState::On) => LedLevel::Low,
        }
    }
}

/// How long a channel write may block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    /// Block until the host has accepted every byte
    Forever,
    /// Give up after this many milliseconds
    Millis(u32),
}
