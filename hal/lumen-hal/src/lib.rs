//! Hardware abstraction traits for the Lumen display driver
//!
//! This crate defines the narrow set of capabilities the driver borrows
//! from the surrounding system:
//!
//! - Digital output pins (reset line, data/command select, chip select)
//! - An SPI bus master
//! - Blocking millisecond delays (reset pulse timing)
//! - The display `Transport` built from the above
//!
//! Chip-specific HALs implement these traits; the driver crates never
//! touch hardware registers directly.

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;
pub mod transport;

pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use spi::SpiBus;
pub use transport::{FourWireSpi, Transport};
