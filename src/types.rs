// Core value types shared by the stroke pipeline.

use crate::error::Error;
use std::str::FromStr;

/// A pixel position. Surface-local or global depending on who hands it to you;
/// the mapper is the only place that converts between the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An opaque RGB color. Only ever built from a valid `#RRGGBB` string or
/// directly from channels, so there is no "null color".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed as 0x00RRGGBB, the layout minifb wants.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_u32(px: u32) -> Self {
        Self {
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `RRGGBB` with an optional leading `#`, any letter case.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let hex = spec.strip_prefix('#').unwrap_or(spec);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorSpec(spec.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColorSpec(spec.to_string()))
        };
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }
}

/// A software raster: what the canvas and the window both draw into.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pub width: usize,      // pixels across
    pub height: usize,     // pixels down
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer filled with one color.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self { width, height, pixels: vec![color.to_u32(); width * height] }
    }

    /// Pixel at (x,y), or None when outside.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Row-major index of (x,y) if it lies inside the buffer.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}
