//! USB LED Console Firmware Library
//!
//! A small sample application for an STM32G474 evaluation board. The
//! host opens the board's USB virtual serial port, is greeted with a
//! banner, and toggles the three user LEDs by typing `1`, `2` or `3`.
//! Every accepted key is answered with the status of all LEDs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │          Console (banner, dispatch loop, status echo)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      DOMAIN LAYER                            │
//! │   Command decoding  │  Status line  │  LED state/polarity    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │   LED bank (embedded-hal OutputPin)  │  USB CDC ACM port     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything except the USB port and the entry point builds for the
//! host with `--no-default-features --features std`.

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;
#[cfg(feature = "embedded")]
pub use embassy_usb;

/// Hardware Abstraction Layer
///
/// LED drivers over `embedded-hal` output pins.
pub mod hal;

/// USB Subsystem
///
/// CDC ACM virtual serial port.
#[cfg(feature = "embedded")]
pub mod usb;

/// Communications port abstraction
pub mod comms;

/// Console command loop
pub mod console;

/// Console protocol: commands, banner, status lines
pub mod protocol;

/// Error type
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::comms::CommsPort;
    pub use crate::console::Console;
    pub use crate::error::Error;
    pub use crate::hal::gpio::LedBank;

    // Common traits
    pub use embedded_hal::digital::OutputPin;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
