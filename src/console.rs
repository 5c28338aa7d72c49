//! LED Console
//!
//! The application loop: greet the host, then read bytes forever,
//! toggling the addressed LED and echoing the status of all LEDs.
//!
//! Decoding and state changes ([`Console::handle_byte`]) are kept apart
//! from channel I/O ([`Console::serve`]) so the logic can be tested
//! without a USB stack.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::comms::CommsPort;
use crate::config::{BANNER_WAIT, RX_BUFFER_SIZE, STATUS_WAIT};
use crate::error::Result;
use crate::hal::gpio::LedBank;
use crate::protocol::{Command, StatusLine, WELCOME_BANNER};
use crate::types::LedState;

/// Command loop owning the LED bank
pub struct Console<P> {
    leds: LedBank<P>,
}

impl<P: OutputPin> Console<P> {
    /// Create a console around the board LEDs
    #[must_use]
    pub fn new(leds: LedBank<P>) -> Self {
        Self { leds }
    }

    /// Drive every LED to its initial state
    pub fn init(&mut self) -> Result<()> {
        self.leds.apply_all()?;
        info!("LEDs initialized");
        Ok(())
    }

    /// Apply one received byte
    ///
    /// Returns the status line to send when the byte was a command, or
    /// `None` when it was ignored.
    pub fn handle_byte(&mut self, byte: u8) -> Result<Option<StatusLine>> {
        let Some(cmd) = Command::parse(byte) else {
            trace!("ignoring byte {=u8:#x}", byte);
            return Ok(None);
        };

        match cmd {
            Command::Toggle(id) => {
                let state = self.leds.toggle(id)?;
                debug!("{} -> {}", id, state);
            }
        }

        Ok(Some(self.leds.status_line()))
    }

    /// Send the welcome banner followed by the initial status line
    pub async fn greet<C: CommsPort>(&mut self, port: &mut C) -> Result<()> {
        port.write_all(WELCOME_BANNER, BANNER_WAIT).await?;
        self.send_status(port).await
    }

    /// Read and dispatch commands until a driver fails
    pub async fn serve<C: CommsPort>(&mut self, port: &mut C) -> Result<Infallible> {
        let mut buf = [0u8; RX_BUFFER_SIZE];
        loop {
            let n = port.read(&mut buf).await?;
            for &byte in &buf[..n] {
                if let Some(status) = self.handle_byte(byte)? {
                    port.write_all(status.as_bytes(), STATUS_WAIT).await?;
                }
            }
        }
    }

    /// Greet the host, then serve commands; returns only on error
    pub async fn run<C: CommsPort>(&mut self, port: &mut C) -> Result<Infallible> {
        self.greet(port).await?;
        info!("Console ready");
        self.serve(port).await
    }

    async fn send_status<C: CommsPort>(&self, port: &mut C) -> Result<()> {
        let status = self.leds.status_line();
        port.write_all(status.as_bytes(), STATUS_WAIT).await
    }

    /// Current LED states
    #[must_use]
    pub fn states(&self) -> [LedState; crate::types::LED_COUNT] {
        self.leds.states()
    }

    /// Borrow the LED bank
    #[must_use]
    pub fn leds(&self) -> &LedBank<P> {
        &self.leds
    }

    /// Release the LED bank
    pub fn into_leds(self) -> LedBank<P> {
        self.leds
    }
}
