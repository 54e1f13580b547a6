//! OLED display drivers

mod config;
mod sh1107;

pub use config::DisplayConfig;
pub use sh1107::{BuildError, Sh1107, HEIGHT, PAGES, WIDTH};
