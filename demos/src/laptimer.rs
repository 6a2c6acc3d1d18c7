#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use hexserial_rs::{
    Hex,
    HexSerial,
    TxBuffer,
    DEFAULT_TX_BUFFER_SIZE,
};
use ufmt::uwriteln;

const BAUD_RATE: u32 = 57600;
const LOOP_PERIOD_MS: u32 = 10;

const BAND: u8 = 0x4;
const CHANNEL: u8 = 0x25;

// Receivers key off the first byte of each line
const PREFIX_BAND: u8 = b'B';
const PREFIX_CHANNEL: u8 = b'C';
const PREFIX_RSSI: u8 = b'S';
const PREFIX_LAP: u8 = b'L';
const PREFIX_DROPPED: u8 = b'D';

// Dropped-message count is reported every this many loop iterations
const REPORT_EVERY: u32 = 500;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = match arduino_hal::Peripherals::take() {
        Some(p) => p,
        None => panic!("Aborting"),
    };
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, BAUD_RATE);
    let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
    let rssi_pin = pins.a0.into_analog_input(&mut adc);
    let lap_button = pins.d2.into_pull_up_input();

    uwriteln!(
        &mut serial,
        "\nhexserial laptimer: band {} channel 0x{}, {} byte tx buffer\r",
        BAND,
        Hex(CHANNEL),
        DEFAULT_TX_BUFFER_SIZE,
    )
    .unwrap_infallible();

    let mut hex = HexSerial::new(TxBuffer::<_, DEFAULT_TX_BUFFER_SIZE>::new(serial));

    let mut band_sent = false;
    let mut channel_sent = false;
    let mut was_pressed = false;
    let mut laps: u8 = 0;
    let mut dropped: u16 = 0;
    let mut ticks: u32 = 0;

    loop {
        if !band_sent {
            band_sent = hex.send_nibble(PREFIX_BAND, BAND).is_ok();
        }
        if !channel_sent {
            channel_sent = hex.send_byte(PREFIX_CHANNEL, CHANNEL).is_ok();
        }

        let rssi: u16 = rssi_pin.analog_read(&mut adc);
        if hex.send_int(PREFIX_RSSI, rssi).is_err() {
            dropped = dropped.saturating_add(1);
        }

        let pressed = lap_button.is_low();
        if pressed && !was_pressed {
            laps = laps.wrapping_add(1);
            let lap_time_ms = ticks.wrapping_mul(LOOP_PERIOD_MS);
            if hex.send_long(PREFIX_LAP, laps, lap_time_ms).is_err() {
                dropped = dropped.saturating_add(1);
            }
        }
        was_pressed = pressed;

        if ticks % REPORT_EVERY == 0 && hex.send_int(PREFIX_DROPPED, dropped).is_ok() {
            dropped = 0;
        }

        match hex.sink_mut().poll() {
            Ok(()) | Err(nb::Error::WouldBlock) => {},
            Err(nb::Error::Other(e)) => match e {},
        }

        ticks = ticks.wrapping_add(1);
        arduino_hal::delay_ms(LOOP_PERIOD_MS);
    }
}

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // Whatever owned the peripherals is gone for good at this point
    let dp = unsafe { arduino_hal::Peripherals::steal() };
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, BAUD_RATE);
    uwriteln!(&mut serial, "Firmware panic!\r").unwrap_infallible();

    if let Some(loc) = info.location() {
        uwriteln!(&mut serial, "  At {}:{}:{}\r", loc.file(), loc.line(), loc.column()).unwrap_infallible();
    }

    let mut led = pins.d13.into_output();
    loop {
        led.set_high();
        arduino_hal::delay_ms(100);
        led.set_low();
        arduino_hal::delay_ms(100);
    }
}
