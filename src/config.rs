//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the LED console.
//! Pin mappings, timeouts, and USB descriptor values are centralized here.

use crate::types::{LedState, Polarity, Wait};

/// Wiring of the three user LEDs
pub const LED_POLARITY: Polarity = Polarity::ActiveLow;

/// State every LED is driven to at startup
pub const INITIAL_LED_STATE: LedState = LedState::Off;

/// Time given to the USB stack to enumerate before the banner is sent
pub const STARTUP_SETTLE_MS: u64 = 1_000;

/// Timeout for each status line write
pub const STATUS_WRITE_TIMEOUT_MS: u32 = 1_000;

/// Wait policy for the welcome banner
pub const BANNER_WAIT: Wait = Wait::Forever;

/// Wait policy for status lines
pub const STATUS_WAIT: Wait = Wait::Millis(STATUS_WRITE_TIMEOUT_MS);

/// Capacity of a formatted status line
pub const STATUS_LINE_CAPACITY: usize = 40;

/// USB VID (use test VID for development)
pub const USB_VID: u16 = 0x1209;

/// USB PID (get from pid.codes for production)
pub const USB_PID: u16 = 0x0002;

/// USB manufacturer string
pub const USB_MANUFACTURER: &str = "Comms Guide";

/// USB product string
pub const USB_PRODUCT: &str = "LED Console";

/// USB serial number string
pub const USB_SERIAL: &str = "0001";

/// USB CDC ACM packet size
pub const USB_CDC_PACKET_SIZE: u16 = 64;

/// Receive buffer size, one full CDC packet
pub const RX_BUFFER_SIZE: usize = USB_CDC_PACKET_SIZE as usize;

/// USB configuration descriptor buffer size
pub const USB_CONFIG_DESCRIPTOR_SIZE: usize = 256;

/// USB BOS descriptor buffer size
pub const USB_BOS_DESCRIPTOR_SIZE: usize = 256;

/// USB control endpoint buffer size
pub const USB_CONTROL_BUFFER_SIZE: usize = 64;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments for the evaluation board

    /// User LED 1
    pub const LED1: &str = "PA5";

    /// User LED 2
    pub const LED2: &str = "PC0";

    /// User LED 3
    pub const LED3: &str = "PC1";

    /// USB D+ (handled by USB peripheral)
    pub const USB_DP: &str = "PA12";

    /// USB D- (handled by USB peripheral)
    pub const USB_DM: &str = "PA11";
}
