//! SH1107 OLED display driver
//!
//! Driver for 128x128 SH1107-based monochrome OLED panels behind a
//! write-only byte transport. The driver owns an off-device framebuffer
//! in the controller's page layout; drawing mutates the buffer and
//! `flush` streams it out page by page.
//!
//! The bus carries no acknowledgments, so every write is fire-and-forget
//! and runtime edge cases degrade silently: drawing before `initialize`
//! completes, off-screen coordinates and unprintable characters all do
//! nothing instead of failing.

use core::fmt;

use heapless::String;
use lumen_core::framebuffer::GeometryError;
use lumen_core::{raster, DeviceState, Event, Framebuffer};
use lumen_hal::{DelayMs, OutputPin, Transport};
use lumen_protocol::{Command, CommandError, Status};

use super::config::DisplayConfig;

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 128;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Reset line hold time per level, in milliseconds
const RESET_HOLD_MS: u32 = 100;

/// Formatted-drawing scratch capacity; generous for a 21-column panel
const FMT_CAPACITY: usize = 64;

/// Errors from driver construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuildError {
    /// Framebuffer geometry is invalid
    Geometry(GeometryError),
    /// A configured register value does not fit its field
    InvalidConfig(CommandError),
}

impl From<GeometryError> for BuildError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl From<CommandError> for BuildError {
    fn from(e: CommandError) -> Self {
        Self::InvalidConfig(e)
    }
}

/// SH1107 OLED driver
///
/// Generic over the display transport, the reset line and a blocking
/// delay source. Single-owner and non-reentrant: the transport beneath
/// it has one chip-select line, so callers wanting concurrent access
/// must serialize externally.
pub struct Sh1107<T, RST, D> {
    transport: T,
    reset: RST,
    delay: D,
    config: DisplayConfig,
    state: DeviceState,
    frame: Framebuffer,
}

impl<T, RST, D> Sh1107<T, RST, D>
where
    T: Transport,
    RST: OutputPin,
    D: DelayMs,
{
    /// Create a driver bound to a transport
    ///
    /// Takes ownership of the transport, reset line and delay source
    /// for the life of the device; no bus traffic happens until
    /// [`initialize`](Self::initialize).
    pub fn new(
        transport: T,
        config: DisplayConfig,
        reset: RST,
        delay: D,
    ) -> Result<Self, BuildError> {
        config.validate()?;
        let frame = Framebuffer::new(WIDTH, HEIGHT)?;

        Ok(Self {
            transport,
            reset,
            delay,
            config,
            state: DeviceState::Uninitialized,
            frame,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// The off-device pixel buffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.frame
    }

    /// Get access to the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Tear down and release the transport
    pub fn release(mut self) -> T {
        self.deinitialize();
        self.transport
    }

    /// Reset the controller and program the configured registers
    ///
    /// Pulses the reset line with three equal holds, writes the
    /// register sequence in the controller's documented order, then
    /// switches the display on. May be called again after
    /// [`deinitialize`](Self::deinitialize) to bring the panel back.
    pub fn initialize(&mut self) {
        self.state = self.state.transition(Event::ResetStarted);
        self.pulse_reset();
        self.state = self.state.transition(Event::ResetReleased);

        for command in self.config.command_sequence() {
            self.send_command(command);
        }
        self.state = self.state.transition(Event::ConfigApplied);

        self.send_command(Command::DisplayOn(true));
        self.state = self.state.transition(Event::DisplayEnabled);
    }

    /// Reset the controller and switch the display off
    ///
    /// Idempotent: the second and later calls produce no bus traffic.
    pub fn deinitialize(&mut self) {
        if self.state.is_deinitialized() {
            return;
        }

        self.pulse_reset();
        self.send_command(Command::DisplayOn(false));
        self.state = self.state.transition(Event::Teardown);
    }

    /// Switch the panel on (RAM contents become visible)
    pub fn display_on(&mut self) {
        if !self.state.is_initialized() {
            return;
        }
        self.send_command(Command::DisplayOn(true));
        self.state = self.state.transition(Event::DisplayEnabled);
    }

    /// Blank the panel without losing RAM or configuration
    pub fn display_off(&mut self) {
        if !self.state.is_initialized() {
            return;
        }
        self.send_command(Command::DisplayOn(false));
        self.state = self.state.transition(Event::DisplayDisabled);
    }

    /// Force every pixel lit (or resume showing RAM)
    pub fn entire_display(&mut self, on: bool) {
        if !self.state.is_initialized() {
            return;
        }
        self.send_command(Command::EntireDisplayOn(on));
    }

    /// Set the segment output current
    pub fn set_contrast(&mut self, contrast: u8) {
        if !self.state.is_initialized() {
            return;
        }
        self.send_command(Command::SetContrast(contrast));
    }

    /// Reverse rendering (1 = dark)
    pub fn set_reverse(&mut self, reverse: bool) {
        if !self.state.is_initialized() {
            return;
        }
        self.send_command(Command::SetReverse(reverse));
    }

    /// Read the controller status byte, when the transport can read
    pub fn read_id(&mut self) -> Option<Status> {
        if !self.state.is_initialized() {
            return None;
        }
        self.transport.select_command();
        self.transport.read_byte().map(Status::from_raw)
    }

    /// Zero the framebuffer
    pub fn clear(&mut self) {
        if !self.state.accepts_drawing() {
            return;
        }
        self.frame.clear();
    }

    /// Set or clear one pixel; off-screen coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if !self.state.accepts_drawing() {
            return;
        }
        self.frame.set_pixel(x, y, on);
    }

    /// Draw a line between two points, endpoints inclusive
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, on: bool) {
        if !self.state.accepts_drawing() {
            return;
        }
        raster::draw_line(&mut self.frame, x0, y0, x1, y1, on);
    }

    /// Draw a circle outline around a center point
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: u32, on: bool) {
        if !self.state.accepts_drawing() {
            return;
        }
        raster::draw_circle(&mut self.frame, cx, cy, r, on);
    }

    /// Stencil-blit a packed MSB-first monochrome bitmap
    pub fn draw_bitmap(&mut self, x: i32, y: i32, w: u32, h: u32, bitmap: &[u8], on: bool) {
        if !self.state.accepts_drawing() {
            return;
        }
        raster::draw_bitmap(&mut self.frame, x, y, w, h, bitmap, on);
    }

    /// Draw one printable ASCII character
    pub fn draw_char(&mut self, x: i32, y: i32, c: char) {
        if !self.state.accepts_drawing() {
            return;
        }
        raster::draw_char(&mut self.frame, x, y, c);
    }

    /// Draw a string, truncated at the right edge
    pub fn draw_string(&mut self, x: i32, y: i32, s: &str) {
        if !self.state.accepts_drawing() {
            return;
        }
        raster::draw_string(&mut self.frame, x, y, s);
    }

    /// Draw formatted text, truncated at the right edge
    ///
    /// Renders `format_args!` output into a fixed scratch buffer and
    /// delegates to [`draw_string`](Self::draw_string). A formatting
    /// failure, including scratch overflow, draws nothing.
    pub fn draw_fmt(&mut self, x: i32, y: i32, args: fmt::Arguments<'_>) {
        if !self.state.accepts_drawing() {
            return;
        }

        let mut text: String<FMT_CAPACITY> = String::new();
        if fmt::write(&mut text, args).is_err() {
            return;
        }
        raster::draw_string(&mut self.frame, x, y, &text);
    }

    /// Stream the framebuffer to the panel
    ///
    /// Walks pages in ascending order; per page, re-addresses the
    /// controller and writes the full row of column bytes. The whole
    /// buffer is retransmitted every time, so a flush always reflects
    /// the complete current framebuffer regardless of history.
    pub fn flush(&mut self) {
        if !self.state.accepts_drawing() {
            return;
        }

        for page in 0..self.frame.pages() {
            self.send_command(Command::SetPageAddress(page as u8));
            self.send_command(Command::SetColumnLow(0));
            self.send_command(Command::SetColumnHigh(0));

            self.transport.select_data();
            if let Some(data) = self.frame.page(page) {
                self.transport.write(data);
            }
        }
    }

    fn send_command(&mut self, command: Command) {
        self.transport.select_command();
        self.transport.write(&command.encode());
    }

    fn pulse_reset(&mut self) {
        self.reset.set_high();
        self.delay.delay_ms(RESET_HOLD_MS);
        self.reset.set_low();
        self.delay.delay_ms(RESET_HOLD_MS);
        self.reset.set_high();
        self.delay.delay_ms(RESET_HOLD_MS);
    }
}
