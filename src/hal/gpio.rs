//! GPIO Abstractions
//!
//! LED drivers on top of `embedded_hal::digital::OutputPin`, so the same
//! code drives `embassy_stm32::gpio::Output` on the board and mock pins
//! on the host.

use embedded_hal::digital::OutputPin;

use crate::error::{Error, Result};
use crate::protocol::StatusLine;
use crate::types::{LedId, LedLevel, LedState, Polarity, LED_COUNT};

/// Single user LED
pub struct Led<P> {
    id: LedId,
    pin: P,
    polarity: Polarity,
    state: LedState,
}

impl<P: OutputPin> Led<P> {
    /// Wrap a pin; the recorded state starts as `initial` but the pin is
    /// not driven until [`Led::set`] or [`LedBank::apply_all`] is called
    #[must_use]
    pub fn new(id: LedId, pin: P, polarity: Polarity, initial: LedState) -> Self {
        Self {
            id,
            pin,
            polarity,
            state: initial,
        }
    }

    /// Set the LED state and drive the pin
    ///
    /// The state is recorded before the pin write, so it reflects the last
    /// command even when the write fails.
    pub fn set(&mut self, state: LedState) -> Result<()> {
        self.state = state;
        let res = match self.polarity.level_for(state) {
            LedLevel::High => self.pin.set_high(),
            LedLevel::Low => self.pin.set_low(),
        };
        res.map_err(|_| Error::Gpio(self.id))
    }

    /// Invert the LED, returning the new state
    pub fn toggle(&mut self) -> Result<LedState> {
        let next = self.state.toggle();
        self.set(next)?;
        Ok(next)
    }

    /// Re-drive the pin with the recorded state
    pub fn apply(&mut self) -> Result<()> {
        self.set(self.state)
    }

    /// Which LED this is
    #[must_use]
    pub const fn id(&self) -> LedId {
        self.id
    }

    /// Recorded state
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }

    /// Pin level implied by the recorded state
    #[must_use]
    pub const fn level(&self) -> LedLevel {
        self.polarity.level_for(self.state)
    }

    /// Release the underlying pin
    pub fn into_pin(self) -> P {
        self.pin
    }
}

/// The three user LEDs
pub struct LedBank<P> {
    leds: [Led<P>; LED_COUNT],
}

impl<P: OutputPin> LedBank<P> {
    /// Build a bank from pins in LED1, LED2, LED3 order
    #[must_use]
    pub fn new(pins: [P; LED_COUNT], polarity: Polarity, initial: LedState) -> Self {
        let [p1, p2, p3] = pins;
        Self {
            leds: [
                Led::new(LedId::Led1, p1, polarity, initial),
                Led::new(LedId::Led2, p2, polarity, initial),
                Led::new(LedId::Led3, p3, polarity, initial),
            ],
        }
    }

    /// Drive every pin to its recorded state
    pub fn apply_all(&mut self) -> Result<()> {
        for led in &mut self.leds {
            led.apply()?;
        }
        Ok(())
    }

    /// Toggle one LED, returning its new state
    pub fn toggle(&mut self, id: LedId) -> Result<LedState> {
        self.leds[id.index()].toggle()
    }

    /// State of one LED
    #[must_use]
    pub fn state(&self, id: LedId) -> LedState {
        self.leds[id.index()].state()
    }

    /// States of all LEDs in order
    #[must_use]
    pub fn states(&self) -> [LedState; LED_COUNT] {
        [
            self.leds[0].state(),
            self.leds[1].state(),
            self.leds[2].state(),
        ]
    }

    /// Status line for the current states
    #[must_use]
    pub fn status_line(&self) -> StatusLine {
        StatusLine::new(self.states())
    }

    /// Access one LED
    #[must_use]
    pub fn led(&self, id: LedId) -> &Led<P> {
        &self.leds[id.index()]
    }

    /// Release the pins in LED1, LED2, LED3 order
    pub fn into_pins(self) -> [P; LED_COUNT] {
        let [l1, l2, l3] = self.leds;
        [l1.into_pin(), l2.into_pin(), l3.into_pin()]
    }
}
