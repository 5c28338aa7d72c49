//! Communications Port
//!
//! The serial-like channel the console talks over. On the board it is a
//! USB CDC ACM class (see `usb::cdc`); tests substitute a scripted port.

use crate::error::{Error, Result};
use crate::types::Wait;

/// Byte channel to the host terminal
#[allow(async_fn_in_trait)]
pub trait CommsPort {
    /// Receive at least one byte into `buf`, blocking until data arrives
    ///
    /// Returns the number of bytes written to `buf`.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Send all of `data`, waiting at most as long as `wait` allows
    async fn write_all(&mut self, data: &[u8], wait: Wait) -> Result<()>;
}

/// Split `data` into bulk packets of at most `max` bytes
///
/// When the last packet is exactly `max` bytes a zero-length packet is
/// appended so the host sees the end of the transfer. Empty data yields
/// no packets at all.
#[must_use]
pub fn packets(data: &[u8], max: usize) -> Packets<'_> {
    let max = max.max(1);
    Packets {
        rest: data,
        max,
        zlp: !data.is_empty() && data.len() % max == 0,
    }
}

/// Iterator returned by [`packets`]
#[derive(Clone, Debug)]
pub struct Packets<'a> {
    rest: &'a [u8],
    max: usize,
    zlp: bool,
}

impl<'a> Iterator for Packets<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if !self.rest.is_empty() {
            let (head, tail) = self.rest.split_at(self.rest.len().min(self.max));
            self.rest = tail;
            Some(head)
        } else if self.zlp {
            self.zlp = false;
            Some(&[])
        } else {
            None
        }
    }
}

/// Collapse the outcome of a bounded write: an elapsed deadline is
/// `Error::Timeout`, otherwise the write's own result stands
pub fn bounded<T, E>(outcome: core::result::Result<Result<T>, E>) -> Result<T> {
    outcome.map_err(|_| Error::Timeout)?
}
