#![no_std]

//! Platform glue binding digit-matrix to the RP2040.
//!
//! Implements the library's hardware traits on top of the Pico HAL: PIO
//! output for the WS2812 chain, GPIO adapters for the buttons and the
//! status LED, and hardware timer wrappers for the time traits.

pub mod buttons;
pub mod status_led;
pub mod time;
pub mod ws2812;
