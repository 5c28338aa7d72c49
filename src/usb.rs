//! USB Subsystem
//!
//! CDC ACM virtual serial port carrying the console.

pub mod cdc;
