//! Console Loop Tests
//!
//! Drives the console against mock pins and a scripted serial port.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test console_tests

mod common;

use common::{bank, MockPin, ScriptedPort};
use embassy_futures::block_on;
use led_console::config::STATUS_WRITE_TIMEOUT_MS;
use led_console::console::Console;
use led_console::error::Error;
use led_console::hal::gpio::LedBank;
use led_console::protocol::WELCOME_BANNER;
use led_console::types::{LedId, LedLevel, LedState, Polarity, Wait};

const ALL_OFF: &str = "LED1: OFF\tLED2: OFF\tLED3: OFF\r\n";

fn console() -> Console<MockPin> {
    let mut console = Console::new(bank());
    console.init().unwrap();
    console
}

fn banner() -> String {
    String::from_utf8(WELCOME_BANNER.to_vec()).unwrap()
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_init_turns_all_leds_off() {
    let console = console();
    assert_eq!(console.states(), [LedState::Off; 3]);

    let pins = console.into_leds().into_pins();
    for pin in &pins {
        // Active low: off means driven high
        assert_eq!(pin.history, vec![LedLevel::High]);
    }
}

#[test]
fn test_greet_sends_banner_then_initial_status() {
    let mut console = console();
    let mut port = ScriptedPort::new();

    block_on(console.greet(&mut port)).unwrap();

    assert_eq!(port.output_str(), format!("{}{ALL_OFF}", banner()));
    assert_eq!(port.writes.len(), 2);
    assert_eq!(port.writes[0].1, Wait::Forever);
    assert_eq!(port.writes[1].1, Wait::Millis(STATUS_WRITE_TIMEOUT_MS));
}

#[test]
fn test_run_without_input_stops_on_disconnect() {
    let mut console = console();
    let mut port = ScriptedPort::new();

    let err = block_on(console.run(&mut port)).unwrap_err();

    assert_eq!(err, Error::Disconnected);
    assert_eq!(port.output_str(), format!("{}{ALL_OFF}", banner()));
}

// ============================================================================
// Command dispatch
// ============================================================================

#[test]
fn test_key_1_toggles_led1() {
    let mut console = console();
    let mut port = ScriptedPort::with_input(&[b"1"]);

    let err = block_on(console.run(&mut port)).unwrap_err();
    assert_eq!(err, Error::Disconnected);

    let out = port.output_str();
    assert!(out.ends_with("LED1: ON\tLED2: OFF\tLED3: OFF\r\n"));
    assert_eq!(console.states(), [LedState::On, LedState::Off, LedState::Off]);

    let pins = console.into_leds().into_pins();
    assert_eq!(pins[0].level(), Some(LedLevel::Low));
    assert_eq!(pins[1].level(), Some(LedLevel::High));
    assert_eq!(pins[2].level(), Some(LedLevel::High));
}

#[test]
fn test_each_key_toggles_its_own_led() {
    for (key, id) in [(b'1', LedId::Led1), (b'2', LedId::Led2), (b'3', LedId::Led3)] {
        let mut console = console();
        let status = console.handle_byte(key).unwrap().expect("status line");

        for other in LedId::ALL {
            let expected = if other == id { LedState::On } else { LedState::Off };
            assert_eq!(console.leds().state(other), expected);
        }
        assert_eq!(status, console.leds().status_line());
    }
}

#[test]
fn test_status_line_follows_every_command() {
    let mut console = console();
    let mut port = ScriptedPort::with_input(&[b"2", b"3", b"2"]);

    let _ = block_on(console.run(&mut port));

    let expected = format!(
        "{}{ALL_OFF}{}{}{}",
        banner(),
        "LED1: OFF\tLED2: ON\tLED3: OFF\r\n",
        "LED1: OFF\tLED2: ON\tLED3: ON\r\n",
        "LED1: OFF\tLED2: OFF\tLED3: ON\r\n",
    );
    assert_eq!(port.output_str(), expected);
}

#[test]
fn test_bytes_in_one_packet_are_handled_in_order() {
    let mut console = console();
    let mut port = ScriptedPort::with_input(&[b"1x2\r\n3"]);

    let _ = block_on(console.run(&mut port));

    // banner + initial status + three command echoes
    assert_eq!(port.writes.len(), 5);
    assert_eq!(
        port.writes[4].0,
        b"LED1: ON\tLED2: ON\tLED3: ON\r\n".to_vec()
    );
    assert!(port.writes[2..]
        .iter()
        .all(|(_, wait)| *wait == Wait::Millis(STATUS_WRITE_TIMEOUT_MS)));
}

#[test]
fn test_toggling_twice_restores_state() {
    let mut console = console();
    console.handle_byte(b'3').unwrap();
    let status = console.handle_byte(b'3').unwrap().unwrap();

    assert_eq!(console.states(), [LedState::Off; 3]);
    assert_eq!(status.as_str(), ALL_OFF);

    let pins = console.into_leds().into_pins();
    assert_eq!(
        pins[2].history,
        vec![LedLevel::High, LedLevel::Low, LedLevel::High]
    );
}

#[test]
fn test_unsupported_bytes_change_nothing() {
    let mut console = console();

    for byte in 0..=u8::MAX {
        if (b'1'..=b'3').contains(&byte) {
            continue;
        }
        assert_eq!(console.handle_byte(byte).unwrap(), None, "byte {byte:#x}");
    }

    assert_eq!(console.states(), [LedState::Off; 3]);
    let pins = console.into_leds().into_pins();
    for pin in &pins {
        assert_eq!(pin.history.len(), 1, "only the init write");
    }
}

#[test]
fn test_ignored_input_emits_nothing() {
    let mut console = console();
    let mut port = ScriptedPort::with_input(&[b"\r\n", b"a", b"0", b"4"]);

    let _ = block_on(console.run(&mut port));

    assert_eq!(port.writes.len(), 2);
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn test_gpio_failure_is_fatal_and_keeps_commanded_state() {
    let leds = LedBank::new(
        [MockPin::new(), MockPin::failing(), MockPin::new()],
        Polarity::ActiveLow,
        LedState::Off,
    );
    let mut console = Console::new(leds);

    assert_eq!(console.init(), Err(Error::Gpio(LedId::Led2)));

    assert_eq!(console.handle_byte(b'2'), Err(Error::Gpio(LedId::Led2)));
    assert_eq!(console.leds().state(LedId::Led2), LedState::On);
}

#[test]
fn test_gpio_failure_stops_the_loop_without_status() {
    let leds = LedBank::new(
        [MockPin::new(), MockPin::new(), MockPin::failing()],
        Polarity::ActiveLow,
        LedState::Off,
    );
    let mut console = Console::new(leds);
    let mut port = ScriptedPort::with_input(&[b"3", b"1"]);

    let err = block_on(console.run(&mut port)).unwrap_err();

    assert_eq!(err, Error::Gpio(LedId::Led3));
    assert_eq!(port.writes.len(), 2);
    // The second packet was never read
    assert_eq!(console.leds().state(LedId::Led1), LedState::Off);
}

#[test]
fn test_banner_write_failure_is_fatal() {
    let mut console = console();
    let mut port = ScriptedPort::with_input(&[b"1"]);
    port.fail_write_at = Some(0);

    let err = block_on(console.run(&mut port)).unwrap_err();

    assert_eq!(err, Error::Timeout);
    assert!(port.writes.is_empty());
    assert_eq!(console.states(), [LedState::Off; 3]);
}

#[test]
fn test_status_write_timeout_is_fatal() {
    let mut console = console();
    let mut port = ScriptedPort::with_input(&[b"12"]);
    port.fail_write_at = Some(2);

    let err = block_on(console.run(&mut port)).unwrap_err();

    assert_eq!(err, Error::Timeout);
    // LED1 toggled before the echo failed; '2' was never handled
    assert_eq!(console.states(), [LedState::On, LedState::Off, LedState::Off]);
}

#[test]
fn test_oversized_packet_is_fatal() {
    let mut console = console();
    let mut port = ScriptedPort::with_input(&[&[b'1'; 65]]);

    let err = block_on(console.run(&mut port)).unwrap_err();

    assert_eq!(err, Error::Overflow);
    assert_eq!(console.states(), [LedState::Off; 3]);
}
