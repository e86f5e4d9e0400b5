//! RGB pixel framebuffer and drawing primitives.

use crate::types::Rgb;

/// 2D framebuffer of RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Set a pixel; writes outside the buffer are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                let px = x + dx;
                let py = y + dy;
                if px >= 0 && py >= 0 {
                    self.set(px as usize, py as usize, color);
                }
            }
        }
    }

    /// Fill a vertical strip in one column, clipped to the buffer.
    pub fn fill_column(&mut self, x: usize, y_top: i32, y_bottom: i32, color: Rgb) {
        if x >= self.width {
            return;
        }
        let top = y_top.max(0) as usize;
        let bottom = (y_bottom.min(self.height as i32 - 1)).max(-1);
        if bottom < 0 {
            return;
        }
        for y in top..=bottom as usize {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Fill a circle, clipped to the buffer.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    let px = cx + dx;
                    let py = cy + dy;
                    if px >= 0 && py >= 0 {
                        self.set(px as usize, py as usize, color);
                    }
                }
            }
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}
