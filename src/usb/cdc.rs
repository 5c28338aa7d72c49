//! USB CDC ACM (Serial) Implementation
//!
//! Provides the virtual serial port the console talks over.

use embassy_time::{with_timeout, Duration};
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::driver::Driver;

use crate::comms::{bounded, packets, CommsPort};
use crate::error::Result;
use crate::types::Wait;

/// CDC ACM state
pub struct CdcState<'d> {
    state: State<'d>,
}

impl<'d> Default for CdcState<'d> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> CdcState<'d> {
    /// Create new CDC state
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::new(),
        }
    }

    /// Get reference to state for class creation
    pub fn state_mut(&mut self) -> &mut State<'d> {
        &mut self.state
    }
}

/// [`CommsPort`] over a CDC ACM class
pub struct CdcPort<'d, D: Driver<'d>> {
    class: CdcAcmClass<'d, D>,
}

impl<'d, D: Driver<'d>> CdcPort<'d, D> {
    /// Wrap a CDC ACM class
    #[must_use]
    pub fn new(class: CdcAcmClass<'d, D>) -> Self {
        Self { class }
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        self.class.wait_connection().await;

        let max = usize::from(self.class.max_packet_size());
        for packet in packets(data, max) {
            self.class.write_packet(packet).await?;
        }
        Ok(())
    }
}

impl<'d, D: Driver<'d>> CommsPort for CdcPort<'d, D> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            self.class.wait_connection().await;
            let n = self.class.read_packet(buf).await?;
            if n > 0 {
                return Ok(n);
            }
        }
    }

    async fn write_all(&mut self, data: &[u8], wait: Wait) -> Result<()> {
        match wait {
            Wait::Forever => self.send(data).await,
            Wait::Millis(ms) => {
                bounded(with_timeout(Duration::from_millis(u64::from(ms)), self.send(data)).await)
            }
        }
    }
}

/// USB device descriptor strings
pub struct UsbStrings {
    /// Manufacturer name
    pub manufacturer: &'static str,
    /// Product name
    pub product: &'static str,
    /// Serial number
    pub serial: &'static str,
}

impl Default for UsbStrings {
    fn default() -> Self {
        Self {
            manufacturer: crate::config::USB_MANUFACTURER,
            product: crate::config::USB_PRODUCT,
            serial: crate::config::USB_SERIAL,
        }
    }
}

/// USB device info for descriptor
#[derive(Clone, Copy, Debug)]
pub struct UsbDeviceInfo {
    /// Vendor ID
    pub vid: u16,
    /// Product ID
    pub pid: u16,
    /// Device release number
    pub device_release: u16,
}

impl Default for UsbDeviceInfo {
    fn default() -> Self {
        Self {
            vid: crate::config::USB_VID,
            pid: crate::config::USB_PID,
            device_release: 0x0100,
        }
    }
}

impl defmt::Format for UsbDeviceInfo {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "USB({:04X}:{:04X})", self.vid, self.pid);
    }
}

/// Build the `embassy-usb` device configuration
#[must_use]
pub fn device_config(info: UsbDeviceInfo, strings: &UsbStrings) -> embassy_usb::Config<'static> {
    let mut config = embassy_usb::Config::new(info.vid, info.pid);
    config.manufacturer = Some(strings.manufacturer);
    config.product = Some(strings.product);
    config.serial_number = Some(strings.serial);
    config.device_release = info.device_release;
    config.max_power = 100;
    config.max_packet_size_0 = 64;

    // IAD descriptors, required for Windows to bind the CDC driver
    config.device_class = 0xEF;
    config.device_sub_class = 0x02;
    config.device_protocol = 0x01;
    config.composite_with_iads = true;

    config
}
