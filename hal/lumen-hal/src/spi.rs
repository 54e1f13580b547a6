//! SPI bus abstractions
//!
//! Provides a write-oriented SPI master trait that can be implemented
//! by chip-specific HALs. Bus bring-up (clock tree, pin muxing, mode
//! selection) belongs to the chip HAL.

/// SPI bus master
///
/// The display protocol is write-only; `read` exists for peripherals
/// that expose a status byte on the same bus.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data (writes zeros)
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}
