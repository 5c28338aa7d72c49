//! Hardware Abstraction Layer
//!
//! Safe wrappers over the board peripherals used by the console.
//! Drivers are written against `embedded-hal` traits, not concrete
//! embassy types, so they also run on the host.

pub mod gpio;
