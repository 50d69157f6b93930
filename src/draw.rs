// Window + software drawing utilities for the host side.
// 1) A minifb window whose mouse turns into pointer down/move/up events.
// 2) Copying the canvas into the window buffer at its offset.
// 3) A tiny 5x7 bitmap font for the HUD strip above the canvas.

use crate::error::{Error, Result};
use crate::types::{FrameBuffer, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// What the whiteboard gets fed. Coordinates are window pixels (global space).
/// Visual: none by itself; the whiteboard turns these into strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
}

/// Turns sampled (button, position) pairs into edge-triggered events.
/// Visual: pressing starts a stroke exactly where the cursor is; releasing ends it.
#[derive(Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
    last_pos: Option<Point>,
}

impl PointerTracker {
    /// One sample per frame. Order within a frame: Move, then Down/Up, so a
    /// press starts at the current position.
    pub fn sample(&mut self, down: bool, pos: Option<Point>) -> Vec<PointerEvent> {
        let mut events = Vec::with_capacity(2);
        if let Some(p) = pos {
            if self.last_pos != Some(p) {
                events.push(PointerEvent::Move(p));
                self.last_pos = Some(p);
            }
        }
        match (self.was_down, down) {
            (false, true) => {
                if let Some(p) = self.last_pos {
                    events.push(PointerEvent::Down(p));
                    self.was_down = true;
                }
            }
            (true, false) => {
                events.push(PointerEvent::Up);
                self.was_down = false;
            }
            _ => {}
        }
        events
    }
}

pub struct Drawer {
    window: Window,
    pointer: PointerTracker,
}

impl Drawer {
    /// Open a window of the given size.
    /// No window means no raster to draw on, so that's UnsupportedEnvironment.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::UnsupportedEnvironment(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, pointer: PointerTracker::default() })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<()> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Mouse position in window pixels, even outside the window, so strokes
    /// that leave the canvas keep going (and get clipped).
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| Point::new(x.floor() as i32, y.floor() as i32))
    }

    /// Pointer events since the last call.
    /// Visual: holding the left button and dragging draws on the canvas.
    pub fn pointer_events(&mut self) -> Vec<PointerEvent> {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let pos = self.mouse_pos();
        self.pointer.sample(down, pos)
    }
}

/* ---------- Software drawing: pixels, frame copy, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if let Some(idx) = fb.index(x, y) {
        fb.pixels[idx] = color;
    }
}

/// Copy `src` into `dst` with its top-left at `at`, clipped to `dst`.
/// Visual: the canvas shows up in the window, just below the HUD strip.
pub fn blit_frame(dst: &mut FrameBuffer, src: &FrameBuffer, at: Point) {
    for sy in 0..src.height {
        let dy = at.y + sy as i32;
        let row = &src.pixels[sy * src.width..(sy + 1) * src.width];
        for (sx, &px) in row.iter().enumerate() {
            put_pixel(dst, at.x + sx as i32, dy, px);
        }
    }
}

/// Fill a rectangle (clipped).
/// Visual: a solid block, e.g. the dark HUD background.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: usize, h: usize, color: u32) {
    for yy in y..y + h as i32 {
        for xx in x..x + w as i32 {
            put_pixel(fb, xx, yy, color);
        }
    }
}

/* ---------- 5x7 bitmap font (what the HUD needs: "DRAW | C: CLEAR | FPS: 60.0") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5i32 {
                if (rowbits >> (4 - rx)) & 1 != 0 {
                    put_pixel(fb, x + rx, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs with 1-pixel spacing.
/// Characters without a glyph leave a blank cell.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6;
    }
}
