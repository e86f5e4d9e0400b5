//! Viewport scaling: fit the render frame to the terminal.
//!
//! Pure (no I/O), so it can be unit-tested. The local preview stretches to
//! whatever the terminal offers; the streamed frame goes through the proper
//! Lanczos path instead, this is display-only.

use crate::render::PixelBuffer;

/// Terminal area available for the picture, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions this viewport can show with half-block glyphs:
    /// one terminal row carries two image rows.
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize * 2)
    }
}

/// Nearest-neighbor resample of the frame to the viewport's pixel size.
pub fn preview(frame: &PixelBuffer, viewport: Viewport) -> PixelBuffer {
    let (dst_w, dst_h) = viewport.pixel_size();
    let mut out = PixelBuffer::new(dst_w, dst_h);
    if dst_w == 0 || dst_h == 0 || frame.width() == 0 || frame.height() == 0 {
        return out;
    }

    for y in 0..dst_h {
        let src_y = y * frame.height() / dst_h;
        for x in 0..dst_w {
            let src_x = x * frame.width() / dst_w;
            if let Some(color) = frame.get(src_x, src_y) {
                out.set(x, y, color);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    #[test]
    fn viewport_pixel_size_doubles_rows() {
        let vp = Viewport::new(80, 24);
        assert_eq!(vp.pixel_size(), (80, 48));
    }

    #[test]
    fn preview_matches_viewport_dimensions() {
        let frame = PixelBuffer::new(320, 200);
        let out = preview(&frame, Viewport::new(100, 30));
        assert_eq!(out.width(), 100);
        assert_eq!(out.height(), 60);
    }

    #[test]
    fn preview_preserves_solid_color() {
        let mut frame = PixelBuffer::new(32, 20);
        let c = Rgb::new(10, 200, 30);
        frame.fill(c);

        let out = preview(&frame, Viewport::new(8, 4));
        for &p in out.pixels() {
            assert_eq!(p, c);
        }
    }

    #[test]
    fn preview_keeps_left_right_orientation() {
        let mut frame = PixelBuffer::new(4, 2);
        let left = Rgb::new(255, 0, 0);
        let right = Rgb::new(0, 0, 255);
        for y in 0..2 {
            for x in 0..2 {
                frame.set(x, y, left);
                frame.set(x + 2, y, right);
            }
        }

        let out = preview(&frame, Viewport::new(8, 2));
        assert_eq!(out.get(0, 0), Some(left));
        assert_eq!(out.get(7, 3), Some(right));
    }
}
