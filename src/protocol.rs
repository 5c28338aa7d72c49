//! Console Protocol
//!
//! The serial vocabulary of the console: one-byte commands in,
//! a welcome banner and fixed-format status lines out.

use core::fmt::Write as _;

use heapless::String;

use crate::config::STATUS_LINE_CAPACITY;
use crate::types::{LedId, LedState, LED_COUNT};

/// Banner sent once when the console starts
pub const WELCOME_BANNER: &[u8] =
    b"*** Communications Module Guide Application Project ***\r\n\nTo toggle LEDs press 1, 2 or 3.\r\n\n";

/// Console command decoded from a single received byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Invert the state of one LED
    Toggle(LedId),
}

impl Command {
    /// Decode a received byte
    ///
    /// Only the ASCII digits `1`, `2` and `3` are commands; every other
    /// byte (line endings included) yields `None`.
    #[must_use]
    pub const fn parse(byte: u8) -> Option<Self> {
        match byte {
            b'1'..=b'3' => match LedId::from_number(byte - b'0') {
                Some(id) => Some(Self::Toggle(id)),
                None => None,
            },
            _ => None,
        }
    }
}

/// One formatted status line, e.g. `LED1: OFF\tLED2: ON\tLED3: OFF\r\n`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    text: String<STATUS_LINE_CAPACITY>,
}

impl StatusLine {
    /// Format the status of all LEDs
    #[must_use]
    pub fn new(states: [LedState; LED_COUNT]) -> Self {
        let mut text = String::new();
        for (id, state) in LedId::ALL.iter().zip(states) {
            let sep = if id.index() + 1 == LED_COUNT { "\r\n" } else { "\t" };
            // "LEDn: OFF" three times plus separators is 31 bytes
            let res = write!(text, "{id}: {state}{sep}");
            debug_assert!(res.is_ok(), "status line overflow");
        }
        Self { text }
    }

    /// Line as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Line as bytes ready to send
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the line is empty (never true for a formatted line)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
