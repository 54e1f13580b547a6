//! Blocking delay abstraction
//!
//! The SH1107 reset pulse is specified in milliseconds of held level;
//! the driver needs nothing finer.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
