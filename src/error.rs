//! Error type shared by the drivers and the console loop

use core::fmt;

use embassy_usb_driver::EndpointError;

use crate::types::LedId;

/// Driver-level failure
///
/// Every variant is fatal to the console: the loop stops and the caller
/// decides what to do (the firmware parks).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Writing the pin level of an LED failed
    Gpio(LedId),
    /// The host closed the port or the USB bus was reset
    Disconnected,
    /// A received packet did not fit the read buffer
    Overflow,
    /// A bounded write did not complete in time
    Timeout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(id) => write!(f, "{id} pin write failed"),
            Self::Disconnected => f.write_str("USB port disconnected"),
            Self::Overflow => f.write_str("USB receive buffer overflow"),
            Self::Timeout => f.write_str("USB write timed out"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Gpio(id) => defmt::write!(f, "{} pin write failed", id),
            Self::Disconnected => defmt::write!(f, "USB port disconnected"),
            Self::Overflow => defmt::write!(f, "USB receive buffer overflow"),
            Self::Timeout => defmt::write!(f, "USB write timed out"),
        }
    }
}

impl From<EndpointError> for Error {
    fn from(err: EndpointError) -> Self {
        match err {
            EndpointError::BufferOverflow => Self::Overflow,
            EndpointError::Disabled => Self::Disconnected,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;
