//! Paged monochrome framebuffer.
//!
//! The SH1107 addresses display RAM as horizontal pages of 8 rows, one
//! byte per column. The off-device buffer mirrors that layout so a
//! flush is a straight per-page copy:
//!
//! ```text
//! byte index = (y / 8) * width + x
//! bit index  = y % 8          (bit 0 = top row of the page, 1 = lit)
//! ```
//!
//! Geometry is validated at construction; every runtime pixel access is
//! bounds-checked and out-of-range writes are silently dropped. A lost
//! off-screen pixel must never take down the process driving the panel.

use heapless::Vec;

/// Backing capacity, sized for the largest supported panel (128x128)
pub const MAX_FRAME_BUF_SIZE: usize = 128 * 128 / 8;

/// Errors from framebuffer construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Width or height is zero or not a multiple of 8
    NotByteAligned,
    /// Dimensions exceed the backing capacity
    TooLarge,
}

/// In-memory 1bpp pixel buffer in device page layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    buf: Vec<u8, MAX_FRAME_BUF_SIZE>,
}

impl Framebuffer {
    /// Create a zeroed framebuffer
    ///
    /// Both dimensions must be non-zero multiples of 8 (the paging
    /// scheme is exact only then) and fit the backing capacity.
    pub fn new(width: usize, height: usize) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 || width % 8 != 0 || height % 8 != 0 {
            return Err(GeometryError::NotByteAligned);
        }

        let size = width * height / 8;
        let mut buf = Vec::new();
        buf.resize_default(size).map_err(|_| GeometryError::TooLarge)?;

        Ok(Self { width, height, buf })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> usize {
        self.height / 8
    }

    /// Set every byte to zero
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Set or clear one pixel
    ///
    /// Out-of-range coordinates are ignored; coordinates are signed so
    /// shape algorithms may produce negative intermediates without
    /// wrapping.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }

        let (x, y) = (x as usize, y as usize);
        let index = (y / 8) * self.width + x;
        let mask = 1u8 << (y % 8);

        if on {
            self.buf[index] |= mask;
        } else {
            self.buf[index] &= !mask;
        }
    }

    /// Read one pixel (false when out of range)
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }

        let (x, y) = (x as usize, y as usize);
        self.buf[(y / 8) * self.width + x] & (1 << (y % 8)) != 0
    }

    /// One page of column bytes, ready for the data channel
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        if page >= self.pages() {
            return None;
        }
        Some(&self.buf[page * self.width..(page + 1) * self.width])
    }

    /// The whole buffer in page order
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of lit pixels (test and diagnostics helper)
    pub fn lit_pixels(&self) -> usize {
        self.buf.iter().map(|b| b.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_geometry_validation() {
        assert!(Framebuffer::new(128, 128).is_ok());
        assert!(Framebuffer::new(128, 64).is_ok());
        assert_eq!(
            Framebuffer::new(100, 64),
            Err(GeometryError::NotByteAligned)
        );
        assert_eq!(Framebuffer::new(128, 0), Err(GeometryError::NotByteAligned));
        assert_eq!(Framebuffer::new(256, 128), Err(GeometryError::TooLarge));
    }

    #[test]
    fn test_byte_layout() {
        let mut fb = Framebuffer::new(128, 128).unwrap();

        // (x=3, y=10): page 1, bit 2
        fb.set_pixel(3, 10, true);
        assert_eq!(fb.as_bytes()[128 + 3], 0b0000_0100);

        fb.set_pixel(3, 10, false);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut fb = Framebuffer::new(128, 64).unwrap();
        fb.set_pixel(0, 0, true);
        fb.set_pixel(127, 63, true);
        fb.clear();
        assert_eq!(fb.lit_pixels(), 0);
    }

    #[test]
    fn test_page_slices() {
        let mut fb = Framebuffer::new(128, 64).unwrap();
        assert_eq!(fb.pages(), 8);

        fb.set_pixel(5, 63, true);
        let last = fb.page(7).unwrap();
        assert_eq!(last.len(), 128);
        assert_eq!(last[5], 0x80);
        assert!(fb.page(8).is_none());
    }

    proptest! {
        /// Setting then clearing restores the original byte value
        #[test]
        fn prop_set_pixel_roundtrip(x in 0i32..128, y in 0i32..128) {
            let mut fb = Framebuffer::new(128, 128).unwrap();
            let before = fb.as_bytes().to_vec();

            fb.set_pixel(x, y, true);
            prop_assert!(fb.pixel(x, y));
            fb.set_pixel(x, y, false);

            prop_assert_eq!(fb.as_bytes(), before.as_slice());
        }

        /// Out-of-range writes never touch the buffer and never panic
        #[test]
        fn prop_out_of_range_is_noop(x in -300i32..300, y in -300i32..300) {
            prop_assume!(!(0..128).contains(&x) || !(0..128).contains(&y));

            let mut fb = Framebuffer::new(128, 128).unwrap();
            fb.set_pixel(x, y, true);
            prop_assert_eq!(fb.lit_pixels(), 0);
            prop_assert!(!fb.pixel(x, y));
        }
    }
}
