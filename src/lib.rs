//! DHT11 Protocol Decoder for Embedded Rust
//!
//! This crate decodes the single-wire, pulse-width encoded protocol of the DHT11
//! temperature and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! A read sends the start request, times the sensor's acknowledgement, samples
//! 40 data bits by the width of their high pulse, and validates the checksum
//! byte before anything is handed back.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Pulse timing isolated behind [`PulseTimer`] and [`LineDriver`] so reads
//!   can be replayed without hardware
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for microsecond timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs through `defmt`
//! - `log`: Logs through the `log` facade
//!
//! # Example
//! ```ignore
//! use dht11_decoder::{Dht11, GpioMask, OpenDrainLine};
//!
//! let mut dht = Dht11::init(4, GpioMask::ESP32, OpenDrainLine::new(pin), delay)?;
//! match dht.read() {
//!     Ok(reading) => { /* reading.temperature, reading.humidity */ }
//!     Err(_) => { /* retry after MIN_SAMPLING_INTERVAL_MS */ }
//! }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod bus;
pub mod dht11;
pub mod error;
pub mod frame;
pub mod gpio;
pub mod line;
pub mod pulse;
pub mod reading;
pub mod timing;

pub use bus::SingleWire;
pub use dht11::{Dht11, State};
pub use error::{DhtError, InitError, Stage};
pub use frame::{BitTiming, RawFrame, classify_bit};
pub use gpio::{GpioMask, GpioNum};
pub use line::{DataLine, LineDriver, OpenDrainLine};
pub use pulse::{PulseError, PulseTimer};
pub use reading::{Reading, ReadingStore};
pub use timing::{MIN_SAMPLING_INTERVAL_MS, Timing};
