//! SH1107 controller command codec
//!
//! The SH1107 is programmed with a fixed set of one- and two-byte
//! commands written over the command channel of the display transport.
//! This crate is the pure translation layer: a `Command` value maps to
//! exactly one byte image, with no bus knowledge and no failure path.
//!
//! ```text
//! single byte:  ┌────────────────┐        two bytes: ┌────────┬───────┐
//!               │ opcode │ param │                   │ opcode │ value │
//!               └────────────────┘                   └────────┴───────┘
//! ```
//!
//! The protocol is write-only; the only thing the controller can say
//! back is the status byte, decoded by [`Status`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod status;

pub use command::{
    AddressingMode, Command, CommandError, EncodedCommand, ScanDirection, MAX_COMMAND_LEN,
};
pub use status::Status;
