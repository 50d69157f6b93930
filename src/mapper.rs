// Global pointer coordinates <-> surface-local pixels.
// The offset is read from the surface on every call; surfaces can move.
// Results saturate at the i32 range instead of wrapping.

use crate::surface::Surface;
use crate::types::Point;

/// Pointer position relative to the surface's top-left corner.
#[inline]
pub fn to_local<S: Surface + ?Sized>(surface: &S, global: Point) -> Point {
    let origin = surface.offset();
    Point::new(global.x.saturating_sub(origin.x), global.y.saturating_sub(origin.y))
}

/// Inverse of [`to_local`] for the surface's current offset.
#[inline]
pub fn to_global<S: Surface + ?Sized>(surface: &S, local: Point) -> Point {
    let origin = surface.offset();
    Point::new(local.x.saturating_add(origin.x), local.y.saturating_add(origin.y))
}
