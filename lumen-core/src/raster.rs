//! Raster engine.
//!
//! Classic integer rasterization over the paged framebuffer: Bresenham
//! lines, midpoint circles, MSB-first stencil blits and fixed-width
//! glyph text. Everything funnels through `Framebuffer::set_pixel`, so
//! all clipping happens in one place and shapes may hang off any edge.

use crate::font;
use crate::framebuffer::Framebuffer;

/// Geometry bound for the shape algorithms.
///
/// No supported panel edge comes close to this, so anything beyond it
/// is invisible, and inside it every delta and octant offset fits in
/// `i32` without wrapping.
const COORD_ENVELOPE: i32 = 1 << 14;

fn in_envelope(v: i32) -> bool {
    (-COORD_ENVELOPE..=COORD_ENVELOPE).contains(&v)
}

/// Draw a straight line with the integer Bresenham algorithm
///
/// Endpoints are inclusive; a degenerate line plots a single pixel.
/// Endpoints outside the coordinate envelope drop the whole line.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, on: bool) {
    if !(in_envelope(x0) && in_envelope(y0) && in_envelope(x1) && in_envelope(y1)) {
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let (mut x, mut y) = (x0, y0);
    loop {
        fb.set_pixel(x, y, on);

        if x == x1 && y == y1 {
            break;
        }

        let err2 = 2 * err;

        if err2 >= dy {
            err += dy;
            x += sx;
        }

        if err2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a circle outline with the midpoint algorithm
///
/// Plots the eight symmetric octant points per step. Radius 0 plots
/// exactly the center pixel. A center or radius outside the coordinate
/// envelope drops the whole circle.
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, r: u32, on: bool) {
    if r > COORD_ENVELOPE as u32 || !(in_envelope(cx) && in_envelope(cy)) {
        return;
    }

    let mut x = r as i32;
    let mut y = 0;
    let mut err = 1 - x;

    while y <= x {
        fb.set_pixel(cx + x, cy + y, on);
        fb.set_pixel(cx + y, cy + x, on);
        fb.set_pixel(cx - y, cy + x, on);
        fb.set_pixel(cx - x, cy + y, on);
        fb.set_pixel(cx - x, cy - y, on);
        fb.set_pixel(cx - y, cy - x, on);
        fb.set_pixel(cx + y, cy - x, on);
        fb.set_pixel(cx + x, cy - y, on);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Stencil-blit a packed monochrome bitmap
///
/// The source is MSB-first, row-major, `(w + 7) / 8` bytes per row.
/// Only set source bits are plotted, with the caller's color; clear
/// bits leave the destination untouched. A source slice shorter than
/// the declared geometry is a no-op.
pub fn draw_bitmap(fb: &mut Framebuffer, x: i32, y: i32, w: u32, h: u32, bitmap: &[u8], on: bool) {
    let row_bytes = (w as usize + 7) / 8;
    if bitmap.len() < row_bytes * h as usize {
        return;
    }

    for row in 0..h as usize {
        for col in 0..w as usize {
            let byte = bitmap[row * row_bytes + col / 8];
            if byte & (0x80 >> (col % 8)) != 0 {
                fb.set_pixel(x + col as i32, y + row as i32, on);
            }
        }
    }
}

/// Draw one printable ASCII character
///
/// Glyph cells are opaque: lit and unlit glyph pixels are both written,
/// so redrawing text over old text needs no preceding erase. Characters
/// outside 0x20..=0x7F are ignored.
pub fn draw_char(fb: &mut Framebuffer, x: i32, y: i32, c: char) {
    let Some(glyph) = font::glyph(c) else {
        return;
    };

    for (col, &column) in glyph.iter().enumerate() {
        for row in 0..font::GLYPH_HEIGHT {
            fb.set_pixel(
                x + col as i32,
                y + row as i32,
                column & (1 << row) != 0,
            );
        }
    }
}

/// Draw a string left to right
///
/// Advances by the glyph width plus one pixel of spacing and stops,
/// without wrapping, once the cursor passes the right edge; remaining
/// characters are dropped.
pub fn draw_string(fb: &mut Framebuffer, x: i32, y: i32, s: &str) {
    let mut cx = x;

    for c in s.chars() {
        if cx >= fb.width() as i32 {
            break;
        }
        draw_char(fb, cx, y, c);
        cx += font::GLYPH_ADVANCE as i32;
    }
}
