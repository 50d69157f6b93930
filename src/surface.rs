// The raster the whiteboard paints on.
// A surface knows its size, where it sits in global (pointer) space, and how
// to stamp a sprite. Anything off the edge is clipped without complaint.

use crate::error::{Error, Result};
use crate::sprite::BrushSprite;
use crate::types::{Color, FrameBuffer, Point};

pub trait Surface {
    /// Pixel dimensions (width, height).
    fn size(&self) -> (usize, usize);

    /// Top-left corner of the surface in global coordinates. May change
    /// between calls if the host moves the surface.
    fn offset(&self) -> Point;

    /// Composite `sprite` with its top-left at (x,y), scaled by `opacity`.
    fn stamp(&mut self, sprite: &BrushSprite, x: i32, y: i32, opacity: f32);

    /// Reset every pixel to the background.
    fn clear(&mut self);
}

/// Software surface over a `FrameBuffer`.
#[derive(Clone, Debug)]
pub struct Canvas {
    frame: FrameBuffer,
    offset: Point,
    background: Color,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self { frame: FrameBuffer::filled(width, height, background), offset: Point::default(), background }
    }

    /// Wrap an existing buffer. Fails when the buffer can't be a raster.
    pub fn from_frame(frame: FrameBuffer, background: Color) -> Result<Self> {
        if frame.width == 0 || frame.height == 0 {
            return Err(Error::InvalidTarget(format!("zero-area surface {}x{}", frame.width, frame.height)));
        }
        if frame.pixels.len() != frame.width * frame.height {
            return Err(Error::InvalidTarget(format!(
                "pixel buffer holds {} entries, expected {}x{}",
                frame.pixels.len(),
                frame.width,
                frame.height
            )));
        }
        Ok(Self { frame, offset: Point::default(), background })
    }

    /// Move the surface within global space.
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

impl Surface for Canvas {
    fn size(&self) -> (usize, usize) {
        (self.frame.width, self.frame.height)
    }

    fn offset(&self) -> Point {
        self.offset
    }

    fn stamp(&mut self, sprite: &BrushSprite, x: i32, y: i32, opacity: f32) {
        if opacity <= 0.0 {
            return;
        }
        for sy in 0..sprite.height() {
            for sx in 0..sprite.width() {
                let [r, g, b, a] = sprite.rgba(sx, sy);
                if a == 0 {
                    continue;
                }
                let Some(idx) = self.frame.index(x.saturating_add(sx as i32), y.saturating_add(sy as i32)) else {
                    continue;
                };
                let alpha = (a as f32 / 255.0) * opacity;
                self.frame.pixels[idx] = source_over(self.frame.pixels[idx], Color::rgb(r, g, b), alpha);
            }
        }
    }

    fn clear(&mut self) {
        let bg = self.background.to_u32();
        self.frame.pixels.fill(bg);
    }
}

/// Classic "source-over" for an opaque destination: dst + (src - dst) * alpha.
#[inline]
fn source_over(dst: u32, src: Color, alpha: f32) -> u32 {
    if alpha >= 1.0 {
        return src.to_u32();
    }
    let d = Color::from_u32(dst);
    let mix = |d: u8, s: u8| (d as f32 + (s as f32 - d as f32) * alpha).round().clamp(0.0, 255.0) as u8;
    Color::rgb(mix(d.r, src.r), mix(d.g, src.g), mix(d.b, src.b)).to_u32()
}
