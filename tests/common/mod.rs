//! Test doubles for the LED console.
//!
//! `MockPin` records every level it is driven to; `ScriptedPort` replays
//! canned input chunks and records everything written to it.

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use led_console::comms::CommsPort;
use led_console::error::{Error, Result};
use led_console::hal::gpio::LedBank;
use led_console::types::{LedLevel, LedState, Polarity, Wait};

// ── MockPin ──────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockPin {
    pub history: Vec<LedLevel>,
    pub fail: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            history: Vec::new(),
            fail: true,
        }
    }

    pub fn level(&self) -> Option<LedLevel> {
        self.history.last().copied()
    }

    fn drive(&mut self, level: LedLevel) -> core::result::Result<(), ErrorKind> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.history.push(level);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(LedLevel::Low)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(LedLevel::High)
    }
}

pub fn bank() -> LedBank<MockPin> {
    LedBank::new(
        [MockPin::new(), MockPin::new(), MockPin::new()],
        Polarity::ActiveLow,
        LedState::Off,
    )
}

// ── ScriptedPort ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ScriptedPort {
    input: VecDeque<Vec<u8>>,
    pub writes: Vec<(Vec<u8>, Wait)>,
    /// Fail the write with this index (0-based) with `Error::Timeout`
    pub fail_write_at: Option<usize>,
}

impl ScriptedPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one packet of host input
    pub fn push_input(&mut self, chunk: &[u8]) {
        self.input.push_back(chunk.to_vec());
    }

    pub fn with_input(chunks: &[&[u8]]) -> Self {
        let mut port = Self::new();
        for chunk in chunks {
            port.push_input(chunk);
        }
        port
    }

    /// Everything written so far, concatenated
    pub fn output(&self) -> Vec<u8> {
        self.writes.iter().flat_map(|(data, _)| data.clone()).collect()
    }

    pub fn output_str(&self) -> String {
        String::from_utf8(self.output()).unwrap()
    }
}

impl CommsPort for ScriptedPort {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let chunk = self.input.pop_front().ok_or(Error::Disconnected)?;
        if chunk.len() > buf.len() {
            return Err(Error::Overflow);
        }
        buf[..chunk.len()].copy_from_slice(&chunk);
        Ok(chunk.len())
    }

    async fn write_all(&mut self, data: &[u8], wait: Wait) -> Result<()> {
        if self.fail_write_at == Some(self.writes.len()) {
            return Err(Error::Timeout);
        }
        self.writes.push((data.to_vec(), wait));
        Ok(())
    }
}
