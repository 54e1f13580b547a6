//! Board-agnostic core logic for the Lumen display driver
//!
//! This crate contains everything that does not depend on a bus or a
//! specific board:
//!
//! - Paged 1-bit-per-pixel framebuffer with the SH1107 byte layout
//! - Raster engine (pixel, line, circle, bitmap, glyph, string)
//! - 5x7 ASCII font table
//! - Device lifecycle state machine

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod font;
pub mod framebuffer;
pub mod raster;
pub mod state;

pub use framebuffer::{Framebuffer, GeometryError, MAX_FRAME_BUF_SIZE};
pub use state::{DeviceState, Event};
