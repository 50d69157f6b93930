// Brush sprite: the round stamp we blit at every point of a stroke.
// Built once when the whiteboard is created, then only read.

use crate::error::Result;
use crate::types::Color;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// A square RGBA stamp. Alpha is either 0 (outside the disk) or 255 (inside);
/// the color channels carry the brush color everywhere.
#[derive(Clone, Debug)]
pub struct BrushSprite {
    image: RgbaImage,
}

impl BrushSprite {
    /// Build a filled disk of `diameter` pixels in `color`.
    ///
    /// The disk test is done in half-pixel units so odd diameters (radius x.5)
    /// stay exact: offset `o` from the center is `(2*p - d) / 2`.
    pub fn generate(color: Color, diameter: u32) -> Self {
        let d = diameter as i64;
        let clear = Rgba([color.r, color.g, color.b, 0]);
        let mut image = RgbaImage::from_pixel(diameter, diameter, clear);

        // Scan offsets -r..=r around the center; the last step lands one past
        // the edge and is dropped by put_opaque.
        for oy2 in (-d..=d).step_by(2) {
            for ox2 in (-d..=d).step_by(2) {
                if ox2 * ox2 + oy2 * oy2 <= d * d {
                    put_opaque(&mut image, (d + ox2) / 2, (d + oy2) / 2);
                }
            }
        }

        // At radius 0.5 the only offset is (-0.5,-0.5), which misses the disk.
        if diameter == 1 {
            put_opaque(&mut image, 0, 0);
        }

        tracing::debug!(diameter, ?color, "generated brush sprite");
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Row-major RGBA, `width * height * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// RGBA at (x,y) inside the sprite.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Encode to an in-memory PNG (handy for debugging the brush shape).
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Set alpha to 255 at (x,y); indices outside the sprite are ignored.
#[inline]
fn put_opaque(image: &mut RgbaImage, x: i64, y: i64) {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return;
    }
    image.get_pixel_mut(x as u32, y as u32).0[3] = 255;
}
