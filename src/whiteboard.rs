// The whiteboard: config + brush + pointer session + the surface it paints.
// Hosts feed it pointer_down / pointer_move / pointer_up in global
// coordinates from whatever event mechanism they have.

use crate::config::{BrushSettings, SurfaceConfig};
use crate::error::{Error, Result};
use crate::mapper;
use crate::raster;
use crate::session::{DrawingSession, StrokeState};
use crate::sprite::BrushSprite;
use crate::surface::Surface;
use crate::types::{FrameBuffer, Point};

/// Gray the cursor ring is multiplied with.
const CURSOR_GRAY: u32 = 0xB3;

pub struct Whiteboard<S: Surface> {
    settings: BrushSettings,
    sprite: BrushSprite,
    session: DrawingSession,
    surface: S,
}

impl<S: Surface> Whiteboard<S> {
    /// Validate `config`, check the surface against it and build the brush.
    /// Any failure here means no whiteboard at all.
    pub fn new(surface: S, config: &SurfaceConfig) -> Result<Self> {
        let settings = config.validate()?;

        let (w, h) = surface.size();
        if w == 0 || h == 0 {
            return Err(Error::InvalidTarget(format!("zero-area surface {w}x{h}")));
        }
        if (w, h) != (settings.width, settings.height) {
            return Err(Error::InvalidTarget(format!(
                "surface is {w}x{h} but config asks for {}x{}",
                settings.width, settings.height
            )));
        }

        let sprite = BrushSprite::generate(settings.color, settings.size);
        tracing::info!(
            width = w,
            height = h,
            stroke_size = settings.size,
            stroke_opacity = settings.opacity,
            "whiteboard ready"
        );

        Ok(Self { settings, sprite, session: DrawingSession::new(), surface })
    }

    /// Pointer pressed at `global`. Starts a stroke; draws nothing.
    pub fn pointer_down(&mut self, global: Point) {
        let local = mapper::to_local(&self.surface, global);
        tracing::debug!(?local, "stroke start");
        self.session.pointer_down(local);
    }

    /// Pointer moved to `global`. Paints the segment from the last sample
    /// while a stroke is active, otherwise ignored.
    /// Visual: the stroke grows up to the pointer; hovering leaves no trace.
    pub fn pointer_move(&mut self, global: Point) {
        if !self.session.is_active() {
            return;
        }
        let local = mapper::to_local(&self.surface, global);
        if let Some((from, to)) = self.session.pointer_move(local) {
            raster::draw_segment(&mut self.surface, &self.sprite, self.settings.opacity, from, to);
        }
    }

    pub fn pointer_up(&mut self) {
        if self.session.is_active() {
            tracing::debug!("stroke end");
        }
        self.session.pointer_up();
    }

    /// Wipe the surface back to its background.
    /// Visual: every stroke disappears; the blank paper is back.
    pub fn clear(&mut self) {
        tracing::debug!("clear surface");
        self.surface.clear();
    }

    /// Draw a brush-sized gray ring around the pointer into `overlay`.
    ///
    /// `overlay` is in surface-local pixels (same size as the surface). This
    /// never touches the surface itself.
    /// Visual: a thin gray circle the size of the brush follows the mouse.
    pub fn preview_cursor(&self, global: Point, overlay: &mut FrameBuffer) {
        let c = mapper::to_local(&self.surface, global);
        let r = self.settings.size as f32 / 2.0;
        let inner = (r - 1.0).max(0.0);
        let reach = r.ceil() as i32;

        for y in c.y.saturating_sub(reach)..=c.y.saturating_add(reach) {
            for x in c.x.saturating_sub(reach)..=c.x.saturating_add(reach) {
                let (dx, dy) = ((x - c.x) as f32, (y - c.y) as f32);
                let d2 = dx * dx + dy * dy;
                let on_ring = d2 <= r * r && (inner == 0.0 || d2 > inner * inner);
                if !on_ring {
                    continue;
                }
                if let Some(idx) = overlay.index(x, y) {
                    overlay.pixels[idx] = multiply(overlay.pixels[idx], CURSOR_GRAY);
                }
            }
        }
    }

    pub fn state(&self) -> StrokeState {
        self.session.state()
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    pub fn sprite(&self) -> &BrushSprite {
        &self.sprite
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// For hosts that reposition the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Multiply composite against a flat gray level, per channel.
#[inline]
fn multiply(px: u32, gray: u32) -> u32 {
    let ch = |shift: u32| (((px >> shift) & 0xFF) * gray / 255) << shift;
    ch(16) | ch(8) | ch(0)
}
