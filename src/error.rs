// One error type for the whole crate.
// Every variant states *where* things went wrong.
// Construction-time failures only: pointer handling itself never errors.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The host can't give us a 2D raster to draw into (window creation failed).
    #[error("2D raster drawing unsupported: {0}")]
    UnsupportedEnvironment(String),

    /// The surface handed to the whiteboard isn't a usable raster.
    #[error("Invalid drawing target: {0}")]
    InvalidTarget(String),

    /// strokeColor didn't look like `#RRGGBB`.
    #[error("Invalid color spec {0:?}: expected 6 hex digits like #FF0000")]
    InvalidColorSpec(String),

    /// Any other option outside its allowed range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config read error ({path}): {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Encoding the brush sprite to PNG failed.
    #[error("Brush encode error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Brush write error: {0}")]
    Io(#[from] std::io::Error),

    /// Updating the window buffer failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
