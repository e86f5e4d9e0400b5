//! TerminalRenderer: flushes an RGB framebuffer to a real terminal.
//!
//! Each terminal cell shows two vertically stacked pixels via '▀' with the
//! foreground as the top pixel and the background as the bottom one. Redraws
//! are diffed per changed run of cells; the HUD lines below the picture are
//! redrawn only when their text changes.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::render::PixelBuffer;
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<PixelBuffer>,
    last_hud: Vec<String>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            last_hud: Vec::new(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
        self.last_hud.clear();
    }

    /// Draw a frame and HUD, swapping the frame into internal state so the
    /// caller can reuse its buffer without cloning.
    pub fn draw_swap(&mut self, frame: &mut PixelBuffer, hud: &[String]) -> Result<()> {
        if self.last.is_none() {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            self.last = Some(PixelBuffer::new(0, 0));
        }

        let mut prev = self.last.take().unwrap_or_else(|| PixelBuffer::new(0, 0));
        let full = prev.width() != frame.width() || prev.height() != frame.height();
        self.draw_cells(frame, &prev, full)?;
        std::mem::swap(&mut prev, frame);
        self.last = Some(prev);

        self.draw_hud(hud)?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Number of terminal rows the picture occupies.
    fn cell_rows(frame: &PixelBuffer) -> u16 {
        ((frame.height() + 1) / 2) as u16
    }

    fn draw_cells(&mut self, next: &PixelBuffer, prev: &PixelBuffer, full: bool) -> Result<()> {
        let mut style: Option<(Rgb, Rgb)> = None;

        for ty in 0..Self::cell_rows(next) {
            let mut x: usize = 0;
            let width = next.width();
            while x < width {
                if !full && cell_pixels(next, x, ty) == cell_pixels(prev, x, ty) {
                    x += 1;
                    continue;
                }

                // Start of a changed run.
                self.stdout.queue(cursor::MoveTo(x as u16, ty))?;
                while x < width
                    && (full || cell_pixels(next, x, ty) != cell_pixels(prev, x, ty))
                {
                    let (top, bottom) = cell_pixels(next, x, ty);
                    if style != Some((top, bottom)) {
                        self.stdout.queue(SetForegroundColor(to_color(top)))?;
                        self.stdout.queue(SetBackgroundColor(to_color(bottom)))?;
                        style = Some((top, bottom));
                    }
                    self.stdout.queue(Print('▀'))?;
                    x += 1;
                }
            }
        }
        Ok(())
    }

    fn draw_hud(&mut self, hud: &[String]) -> Result<()> {
        let base = self
            .last
            .as_ref()
            .map(|fb| Self::cell_rows(fb))
            .unwrap_or(0);

        let changed = self.last_hud.len() != hud.len()
            || self.last_hud.iter().zip(hud).any(|(a, b)| a != b);
        if !changed {
            return Ok(());
        }

        self.stdout.queue(ResetColor)?;
        for (i, line) in hud.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, base + i as u16))?;
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
            self.stdout.queue(Print(line))?;
        }
        self.last_hud = hud.to_vec();
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// The two pixels a terminal cell displays. Odd-height frames show black in
/// the missing bottom row.
fn cell_pixels(frame: &PixelBuffer, x: usize, ty: u16) -> (Rgb, Rgb) {
    let y = ty as usize * 2;
    let top = frame.get(x, y).unwrap_or(Rgb::BLACK);
    let bottom = frame.get(x, y + 1).unwrap_or(Rgb::BLACK);
    (top, bottom)
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
