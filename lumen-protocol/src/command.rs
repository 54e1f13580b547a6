//! Command encoding for the SH1107 command set.
//!
//! Every command serializes to one or two bytes. Single-byte commands
//! carry their parameter in the low bits of the opcode; two-byte
//! commands send a register opcode followed by the value byte.
//!
//! Parameters are stored as plain integers. The checked constructors
//! reject out-of-range values; `encode` additionally masks parameters
//! to their field width so that encoding stays total and deterministic
//! for any value of the enum.

use heapless::Vec;

/// Maximum encoded command length in bytes
pub const MAX_COMMAND_LEN: usize = 2;

/// A command encoded to its transport byte image
pub type EncodedCommand = Vec<u8, MAX_COMMAND_LEN>;

/// Opcode constants, straight from the SH1107 datasheet command table
mod opcode {
    pub const SET_COLUMN_LOW: u8 = 0x00; // 0x00..=0x0F
    pub const SET_COLUMN_HIGH: u8 = 0x10; // 0x10..=0x17
    pub const SET_ADDRESSING_MODE: u8 = 0x20; // 0x20 page / 0x21 vertical
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_SEGMENT_REMAP: u8 = 0xA0; // 0xA0 normal / 0xA1 reverse
    pub const ENTIRE_DISPLAY_ON: u8 = 0xA4; // 0xA4 resume / 0xA5 force on
    pub const SET_REVERSE: u8 = 0xA6; // 0xA6 normal / 0xA7 reverse
    pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;
    pub const SET_DC_DC_MODE: u8 = 0xAD;
    pub const DISPLAY_ON: u8 = 0xAE; // 0xAE off / 0xAF on
    pub const SET_PAGE_ADDRESS: u8 = 0xB0; // 0xB0..=0xBF
    pub const SET_SCAN_DIRECTION: u8 = 0xC0; // 0xC0 forward / 0xC8 reverse
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIVIDE: u8 = 0xD5;
    pub const SET_CHARGE_PERIOD: u8 = 0xD9;
    pub const SET_VCOM_LEVEL: u8 = 0xDB;
    pub const SET_START_LINE: u8 = 0xDC;
    pub const READ_MODIFY_WRITE: u8 = 0xE0;
    pub const NOP: u8 = 0xE3;
    pub const END: u8 = 0xEE;

    /// Fixed high nibble of the DC-DC mode value byte
    pub const DC_DC_MODE_PREFIX: u8 = 0x80;
}

/// Errors from checked command construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Parameter does not fit the command's bit field
    ValueOutOfRange,
}

/// Memory addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    /// Column address increments within a page (POR default)
    #[default]
    Page,
    /// Page address increments within a column
    Vertical,
}

/// Common output scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanDirection {
    /// COM0 -> COM[N-1] (POR default)
    #[default]
    Forward,
    /// COM[N-1] -> COM0 (vertical flip)
    Reverse,
}

/// One operation of the SH1107 command set
///
/// Documented ranges are enforced by the checked constructors; encoding
/// masks values to the same widths, so every enum value has exactly one
/// fixed-length byte image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Lower 4 bits of the column address (0..=15)
    SetColumnLow(u8),
    /// Upper 3 bits of the column address (0..=7)
    SetColumnHigh(u8),
    /// Page or vertical addressing
    SetAddressingMode(AddressingMode),
    /// Segment remap (horizontal flip)
    SetSegmentRemap(bool),
    /// Force every pixel lit regardless of RAM
    EntireDisplayOn(bool),
    /// Reverse (1 = dark) rendering
    SetReverse(bool),
    /// Display multiplex ratio minus one (0..=127)
    SetMultiplexRatio(u8),
    /// DC-DC converter mode nibble (0..=15)
    SetDcDcMode(u8),
    /// Display on/off
    DisplayOn(bool),
    /// Page address for page addressing mode (0..=15)
    SetPageAddress(u8),
    /// Common output scan direction
    SetScanDirection(ScanDirection),
    /// Vertical display offset in rows (0..=127)
    SetDisplayOffset(u8),
    /// Clock divide ratio minus one (0..=15) and oscillator
    /// frequency adjustment (0..=15)
    SetClockDivide { divide: u8, osc_freq: u8 },
    /// Pre-charge and dis-charge periods in clocks (each 0..=15)
    SetChargePeriod { precharge: u8, discharge: u8 },
    /// VCOM deselect level
    SetVcomLevel(u8),
    /// Display start line (0..=127)
    SetStartLine(u8),
    /// Contrast / segment current
    SetContrast(u8),
    /// Begin a read-modify-write session (column address latched)
    ReadModifyWrite,
    /// End a read-modify-write session
    End,
    /// No operation
    Nop,
}

impl Command {
    /// Checked constructor for [`Command::SetColumnLow`]
    pub fn set_column_low(address: u8) -> Result<Self, CommandError> {
        check_width(address, 4)?;
        Ok(Self::SetColumnLow(address))
    }

    /// Checked constructor for [`Command::SetColumnHigh`]
    pub fn set_column_high(address: u8) -> Result<Self, CommandError> {
        check_width(address, 3)?;
        Ok(Self::SetColumnHigh(address))
    }

    /// Checked constructor for [`Command::SetMultiplexRatio`]
    pub fn set_multiplex_ratio(ratio: u8) -> Result<Self, CommandError> {
        check_width(ratio, 7)?;
        Ok(Self::SetMultiplexRatio(ratio))
    }

    /// Checked constructor for [`Command::SetDcDcMode`]
    pub fn set_dc_dc_mode(mode: u8) -> Result<Self, CommandError> {
        check_width(mode, 4)?;
        Ok(Self::SetDcDcMode(mode))
    }

    /// Checked constructor for [`Command::SetPageAddress`]
    pub fn set_page_address(page: u8) -> Result<Self, CommandError> {
        check_width(page, 4)?;
        Ok(Self::SetPageAddress(page))
    }

    /// Checked constructor for [`Command::SetDisplayOffset`]
    pub fn set_display_offset(offset: u8) -> Result<Self, CommandError> {
        check_width(offset, 7)?;
        Ok(Self::SetDisplayOffset(offset))
    }

    /// Checked constructor for [`Command::SetClockDivide`]
    pub fn set_clock_divide(divide: u8, osc_freq: u8) -> Result<Self, CommandError> {
        check_width(divide, 4)?;
        check_width(osc_freq, 4)?;
        Ok(Self::SetClockDivide { divide, osc_freq })
    }

    /// Checked constructor for [`Command::SetChargePeriod`]
    pub fn set_charge_period(precharge: u8, discharge: u8) -> Result<Self, CommandError> {
        check_width(precharge, 4)?;
        check_width(discharge, 4)?;
        Ok(Self::SetChargePeriod {
            precharge,
            discharge,
        })
    }

    /// Checked constructor for [`Command::SetStartLine`]
    pub fn set_start_line(line: u8) -> Result<Self, CommandError> {
        check_width(line, 7)?;
        Ok(Self::SetStartLine(line))
    }

    /// Encode to the transport byte image
    ///
    /// Pure and total: the same command always yields the same bytes,
    /// and every variant has a fixed length.
    pub fn encode(&self) -> EncodedCommand {
        use opcode::*;

        match *self {
            Self::SetColumnLow(a) => single(SET_COLUMN_LOW | (a & 0x0F)),
            Self::SetColumnHigh(a) => single(SET_COLUMN_HIGH | (a & 0x07)),
            Self::SetAddressingMode(m) => {
                single(SET_ADDRESSING_MODE | matches!(m, AddressingMode::Vertical) as u8)
            }
            Self::SetSegmentRemap(r) => single(SET_SEGMENT_REMAP | r as u8),
            Self::EntireDisplayOn(e) => single(ENTIRE_DISPLAY_ON | e as u8),
            Self::SetReverse(r) => single(SET_REVERSE | r as u8),
            Self::SetMultiplexRatio(n) => pair(SET_MULTIPLEX_RATIO, n & 0x7F),
            Self::SetDcDcMode(m) => pair(SET_DC_DC_MODE, DC_DC_MODE_PREFIX | (m & 0x0F)),
            Self::DisplayOn(o) => single(DISPLAY_ON | o as u8),
            Self::SetPageAddress(p) => single(SET_PAGE_ADDRESS | (p & 0x0F)),
            Self::SetScanDirection(d) => {
                single(SET_SCAN_DIRECTION | ((matches!(d, ScanDirection::Reverse) as u8) << 3))
            }
            Self::SetDisplayOffset(o) => pair(SET_DISPLAY_OFFSET, o & 0x7F),
            Self::SetClockDivide { divide, osc_freq } => {
                pair(SET_CLOCK_DIVIDE, ((osc_freq & 0x0F) << 4) | (divide & 0x0F))
            }
            Self::SetChargePeriod {
                precharge,
                discharge,
            } => pair(SET_CHARGE_PERIOD, ((discharge & 0x0F) << 4) | (precharge & 0x0F)),
            Self::SetVcomLevel(v) => pair(SET_VCOM_LEVEL, v),
            Self::SetStartLine(l) => pair(SET_START_LINE, l & 0x7F),
            Self::SetContrast(c) => pair(SET_CONTRAST, c),
            Self::ReadModifyWrite => single(READ_MODIFY_WRITE),
            Self::End => single(END),
            Self::Nop => single(NOP),
        }
    }
}

fn check_width(value: u8, bits: u8) -> Result<(), CommandError> {
    if value >> bits != 0 {
        return Err(CommandError::ValueOutOfRange);
    }
    Ok(())
}

fn single(byte: u8) -> EncodedCommand {
    let mut bytes = Vec::new();
    // Capacity is MAX_COMMAND_LEN; a single byte always fits
    let _ = bytes.push(byte);
    bytes
}

fn pair(op: u8, value: u8) -> EncodedCommand {
    let mut bytes = single(op);
    let _ = bytes.push(value);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_byte_opcodes() {
        assert_eq!(Command::SetColumnLow(0x0B).encode().as_slice(), &[0x0B]);
        assert_eq!(Command::SetColumnHigh(0x05).encode().as_slice(), &[0x15]);
        assert_eq!(Command::SetPageAddress(0x0F).encode().as_slice(), &[0xBF]);
        assert_eq!(Command::ReadModifyWrite.encode().as_slice(), &[0xE0]);
        assert_eq!(Command::End.encode().as_slice(), &[0xEE]);
        assert_eq!(Command::Nop.encode().as_slice(), &[0xE3]);
    }

    #[test]
    fn test_flag_opcodes() {
        assert_eq!(Command::DisplayOn(false).encode().as_slice(), &[0xAE]);
        assert_eq!(Command::DisplayOn(true).encode().as_slice(), &[0xAF]);
        assert_eq!(Command::SetReverse(false).encode().as_slice(), &[0xA6]);
        assert_eq!(Command::SetReverse(true).encode().as_slice(), &[0xA7]);
        assert_eq!(Command::EntireDisplayOn(true).encode().as_slice(), &[0xA5]);
        assert_eq!(Command::SetSegmentRemap(true).encode().as_slice(), &[0xA1]);
        assert_eq!(
            Command::SetScanDirection(ScanDirection::Forward)
                .encode()
                .as_slice(),
            &[0xC0]
        );
        assert_eq!(
            Command::SetScanDirection(ScanDirection::Reverse)
                .encode()
                .as_slice(),
            &[0xC8]
        );
        assert_eq!(
            Command::SetAddressingMode(AddressingMode::Vertical)
                .encode()
                .as_slice(),
            &[0x21]
        );
    }

    #[test]
    fn test_two_byte_commands() {
        assert_eq!(Command::SetContrast(137).encode().as_slice(), &[0x81, 0x89]);
        assert_eq!(
            Command::SetMultiplexRatio(0x7F).encode().as_slice(),
            &[0xA8, 0x7F]
        );
        assert_eq!(
            Command::SetDisplayOffset(0x60).encode().as_slice(),
            &[0xD3, 0x60]
        );
        assert_eq!(
            Command::SetClockDivide {
                divide: 0,
                osc_freq: 8
            }
            .encode()
            .as_slice(),
            &[0xD5, 0x80]
        );
        assert_eq!(
            Command::SetChargePeriod {
                precharge: 2,
                discharge: 2
            }
            .encode()
            .as_slice(),
            &[0xD9, 0x22]
        );
        assert_eq!(Command::SetVcomLevel(0x35).encode().as_slice(), &[0xDB, 0x35]);
        assert_eq!(Command::SetStartLine(0x40).encode().as_slice(), &[0xDC, 0x40]);
        assert_eq!(Command::SetDcDcMode(0x0A).encode().as_slice(), &[0xAD, 0x8A]);
    }

    #[test]
    fn test_checked_constructors_reject_out_of_range() {
        assert_eq!(
            Command::set_column_low(16),
            Err(CommandError::ValueOutOfRange)
        );
        assert_eq!(
            Command::set_column_high(8),
            Err(CommandError::ValueOutOfRange)
        );
        assert_eq!(
            Command::set_multiplex_ratio(128),
            Err(CommandError::ValueOutOfRange)
        );
        assert_eq!(
            Command::set_clock_divide(16, 0),
            Err(CommandError::ValueOutOfRange)
        );
        assert_eq!(
            Command::set_charge_period(0, 16),
            Err(CommandError::ValueOutOfRange)
        );
        assert_eq!(Command::set_start_line(128), Err(CommandError::ValueOutOfRange));
        assert!(Command::set_page_address(15).is_ok());
    }

    #[test]
    fn test_checked_constructor_roundtrip() {
        let cmd = Command::set_clock_divide(3, 9).unwrap();
        assert_eq!(cmd.encode().as_slice(), &[0xD5, 0x93]);
    }

    proptest! {
        /// Encoding is a pure function: no state, no call-order effects
        #[test]
        fn prop_contrast_encoding_is_pure(c in 0u8..=255) {
            let cmd = Command::SetContrast(c);
            prop_assert_eq!(cmd.encode(), cmd.encode());
            let encoded = cmd.encode();
            prop_assert_eq!(encoded.as_slice(), &[0x81, c]);
        }

        /// Masked parameters never leak outside their field
        #[test]
        fn prop_column_low_stays_in_nibble(a in 0u8..=255) {
            let byte = Command::SetColumnLow(a).encode()[0];
            prop_assert!(byte <= 0x0F);
        }

        /// In-range constructor parameters encode exactly once each
        #[test]
        fn prop_page_address_injective(a in 0u8..16, b in 0u8..16) {
            let ea = Command::set_page_address(a).unwrap().encode();
            let eb = Command::set_page_address(b).unwrap().encode();
            prop_assert_eq!(a == b, ea == eb);
        }
    }
}
