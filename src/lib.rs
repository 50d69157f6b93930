// Freehand whiteboard: pointer samples in, round-brush strokes out.
//
// Pipeline: pointer event -> mapper (global -> local) -> session (Idle/Active)
// -> raster (Bresenham) -> surface stamps of the prebuilt brush sprite.

pub mod config;
pub mod draw;
pub mod error;
pub mod mapper;
pub mod raster;
pub mod session;
pub mod sprite;
pub mod surface;
pub mod types;
pub mod whiteboard;

pub use config::{BrushSettings, SurfaceConfig};
pub use error::{Error, Result};
pub use session::{DrawingSession, StrokeState};
pub use sprite::BrushSprite;
pub use surface::{Canvas, Surface};
pub use types::{Color, FrameBuffer, Point};
pub use whiteboard::Whiteboard;
