//! Hardware driver implementations
//!
//! This crate provides the concrete display driver built on the traits
//! defined in lumen-hal and the pure layers beneath it:
//!
//! - `oled::Sh1107` - SH1107 128x128 monochrome OLED over any `Transport`
//! - `compat` - adapters for running on embedded-hal 1.0 peripherals

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod compat;
pub mod oled;

pub use oled::{BuildError, DisplayConfig, Sh1107, HEIGHT, PAGES, WIDTH};
