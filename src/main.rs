//! USB LED Console Main Application
//!
//! Entry point for the STM32G474 LED console firmware.
//! Initializes hardware, brings up the USB serial port and runs the
//! console loop.

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::usb::{self, Driver};
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::{Builder, UsbDevice};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use led_console::prelude::*;
use led_console::usb::cdc::{device_config, CdcPort, CdcState, UsbDeviceInfo, UsbStrings};

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    USB_LP => usb::InterruptHandler<peripherals::USB>;
});

type UsbDriver = Driver<'static, peripherals::USB>;

static CONFIG_DESCRIPTOR: StaticCell<[u8; USB_CONFIG_DESCRIPTOR_SIZE]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; USB_BOS_DESCRIPTOR_SIZE]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; USB_CONTROL_BUFFER_SIZE]> = StaticCell::new();
static CDC_STATE: StaticCell<CdcState<'static>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("LED Console Firmware v{}", env!("CARGO_PKG_VERSION"));

    // USB needs a 48 MHz clock; take it from HSI48 trimmed by USB SOF
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::{mux, Hsi48Config};
        config.rcc.hsi48 = Some(Hsi48Config { sync_from_usb: true });
        config.rcc.mux.clk48sel = mux::Clk48sel::HSI48;
    }
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // User LEDs, active low: start high so they are off before the console takes over
    let leds = LedBank::new(
        [
            Output::new(p.PA5, Level::High, Speed::Low),
            Output::new(p.PC0, Level::High, Speed::Low),
            Output::new(p.PC1, Level::High, Speed::Low),
        ],
        LED_POLARITY,
        INITIAL_LED_STATE,
    );

    // USB full-speed device on PA12 (D+) / PA11 (D-)
    let driver = Driver::new(p.USB, Irqs, p.PA12, p.PA11);
    let device_info = UsbDeviceInfo::default();
    let mut builder = Builder::new(
        driver,
        device_config(device_info, &UsbStrings::default()),
        CONFIG_DESCRIPTOR.init([0; USB_CONFIG_DESCRIPTOR_SIZE]),
        BOS_DESCRIPTOR.init([0; USB_BOS_DESCRIPTOR_SIZE]),
        &mut [], // no msos descriptors
        CONTROL_BUF.init([0; USB_CONTROL_BUFFER_SIZE]),
    );
    let class = CdcAcmClass::new(
        &mut builder,
        CDC_STATE.init(CdcState::new()).state_mut(),
        USB_CDC_PACKET_SIZE,
    );
    let device = builder.build();

    info!("{} CDC ACM configured", device_info);

    spawner.spawn(usb_task(device)).unwrap();

    let mut console = Console::new(leds);
    let mut port = CdcPort::new(class);

    if let Err(err) = console.init() {
        park(err).await;
    }

    // Let the USB stack enumerate before talking to the host
    Timer::after(Duration::from_millis(STARTUP_SETTLE_MS)).await;

    if let Err(err) = console.run(&mut port).await {
        park(err).await;
    }
}

/// Fatal error: report and stop the application task forever
async fn park(err: Error) -> ! {
    error!("Console halted: {}", err);
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

/// USB device task - services bus events and control requests
#[embassy_executor::task]
async fn usb_task(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    device.run().await
}
