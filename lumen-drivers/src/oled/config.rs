//! SH1107 configuration.
//!
//! A plain value object bundling the initial register values written
//! during initialization. Defaults follow the datasheet power-on values
//! for a 128x128 panel. The struct is copied into the driver at
//! construction so re-initialization replays the same registers.

use lumen_protocol::{Command, CommandError, ScanDirection};

/// Initial register configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Lower 4 bits of the start column (0..=15)
    pub column_low: u8,
    /// Upper 3 bits of the start column (0..=7)
    pub column_high: u8,
    /// Start page (0..=15)
    pub page: u8,
    /// Display start line (0..=127)
    pub start_line: u8,
    /// Contrast / segment current
    pub contrast: u8,
    /// Reverse rendering (1 = dark)
    pub reverse: bool,
    /// Horizontal flip
    pub segment_remap: bool,
    /// Common output scan direction (vertical flip)
    pub scan_direction: ScanDirection,
    /// Multiplex ratio minus one (0..=127)
    pub multiplex_ratio: u8,
    /// Vertical offset in rows (0..=127)
    pub display_offset: u8,
    /// Clock divide ratio minus one (0..=15)
    pub clock_divide: u8,
    /// Oscillator frequency adjustment (0..=15)
    pub osc_freq: u8,
    /// Pre-charge period in clocks (0..=15)
    pub precharge: u8,
    /// Dis-charge period in clocks (0..=15)
    pub discharge: u8,
    /// VCOM deselect level
    pub vcom_level: u8,
    /// DC-DC converter mode nibble (0..=15)
    pub dc_dc_mode: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            column_low: 0,
            column_high: 0,
            page: 0,
            start_line: 0,
            contrast: 0x80,
            reverse: false,
            segment_remap: false,
            scan_direction: ScanDirection::Forward,
            multiplex_ratio: 0x7F, // 128 mux for a 128-row panel
            display_offset: 0,
            clock_divide: 0,
            osc_freq: 0x08,
            precharge: 0x02,
            discharge: 0x02,
            vcom_level: 0x35,
            dc_dc_mode: 0x0A,
        }
    }
}

impl DisplayConfig {
    /// Reject values that do not fit their register fields
    ///
    /// Programmer errors surface here, at device construction, instead
    /// of being silently masked on the bus.
    pub fn validate(&self) -> Result<(), CommandError> {
        Command::set_column_low(self.column_low)?;
        Command::set_column_high(self.column_high)?;
        Command::set_page_address(self.page)?;
        Command::set_start_line(self.start_line)?;
        Command::set_multiplex_ratio(self.multiplex_ratio)?;
        Command::set_display_offset(self.display_offset)?;
        Command::set_clock_divide(self.clock_divide, self.osc_freq)?;
        Command::set_charge_period(self.precharge, self.discharge)?;
        Command::set_dc_dc_mode(self.dc_dc_mode)?;
        Ok(())
    }

    /// The register programming sequence, in the order the controller
    /// expects it during initialization
    pub(crate) fn command_sequence(&self) -> [Command; 14] {
        [
            Command::SetColumnLow(self.column_low),
            Command::SetColumnHigh(self.column_high),
            Command::SetPageAddress(self.page),
            Command::SetStartLine(self.start_line),
            Command::SetContrast(self.contrast),
            Command::SetReverse(self.reverse),
            Command::SetSegmentRemap(self.segment_remap),
            Command::SetScanDirection(self.scan_direction),
            Command::SetMultiplexRatio(self.multiplex_ratio),
            Command::SetDisplayOffset(self.display_offset),
            Command::SetClockDivide {
                divide: self.clock_divide,
                osc_freq: self.osc_freq,
            },
            Command::SetChargePeriod {
                precharge: self.precharge,
                discharge: self.discharge,
            },
            Command::SetVcomLevel(self.vcom_level),
            Command::SetDcDcMode(self.dc_dc_mode),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DisplayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let config = DisplayConfig {
            multiplex_ratio: 0xFF,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(CommandError::ValueOutOfRange));

        let config = DisplayConfig {
            dc_dc_mode: 0x10,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(CommandError::ValueOutOfRange));
    }

    #[test]
    fn test_sequence_order() {
        let seq = DisplayConfig::default().command_sequence();

        assert_eq!(seq[0], Command::SetColumnLow(0));
        assert_eq!(seq[4], Command::SetContrast(0x80));
        assert_eq!(seq[13], Command::SetDcDcMode(0x0A));
    }
}
