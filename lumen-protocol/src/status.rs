//! Status byte decoding.
//!
//! The one read the SH1107 supports: a status byte on the command
//! channel carrying a busy flag, the display on/off state, and a
//! six-bit chip ID. Write-only transports never see one; the driver
//! surfaces it as an optional capability.

/// Decoded controller status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    raw: u8,
}

impl Status {
    /// Wrap a raw status byte read from the command channel
    pub fn from_raw(raw: u8) -> Self {
        Self { raw }
    }

    /// The raw byte as read off the bus
    pub fn raw(&self) -> u8 {
        self.raw
    }

    /// Controller is executing an internal operation (D7)
    pub fn busy(&self) -> bool {
        self.raw & 0x80 != 0
    }

    /// Display is on (D6 is the *off* flag per the datasheet)
    pub fn display_on(&self) -> bool {
        self.raw & 0x40 == 0
    }

    /// Chip identifier (D5..D0)
    pub fn id(&self) -> u8 {
        self.raw & 0x3F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_fields() {
        let status = Status::from_raw(0b1000_0111);
        assert!(status.busy());
        assert!(status.display_on());
        assert_eq!(status.id(), 0x07);
    }

    #[test]
    fn test_display_off_flag_is_inverted() {
        let status = Status::from_raw(0b0100_0000);
        assert!(!status.busy());
        assert!(!status.display_on());
    }
}
