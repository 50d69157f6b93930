// Whiteboard options with their defaults, loadable from a TOML file.
// Key names match the option names hosts already use (strokeColor, ...).

use crate::error::{Error, Result};
use crate::types::Color;
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Canvas size in pixels.
    pub width: usize,
    pub height: usize,
    /// `#RRGGBB`
    pub stroke_color: String,
    /// Brush diameter in pixels.
    pub stroke_size: u32,
    /// Global alpha applied to every stamp, in [0,1].
    pub stroke_opacity: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            stroke_color: "#FF0000".to_string(),
            stroke_size: 10,
            stroke_opacity: 0.1,
        }
    }
}

/// Config after validation: everything the whiteboard needs, already typed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushSettings {
    pub width: usize,
    pub height: usize,
    pub color: Color,
    pub size: u32,
    pub opacity: f32,
}

impl SurfaceConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded whiteboard config");
        Ok(config)
    }

    /// Check every option once, up front.
    pub fn validate(&self) -> Result<BrushSettings> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "surface must have a non-zero area, got {}x{}",
                self.width, self.height
            )));
        }
        if self.stroke_size == 0 {
            return Err(Error::InvalidConfig("strokeSize must be at least 1".into()));
        }
        // NaN fails this too
        if !(0.0..=1.0).contains(&self.stroke_opacity) {
            return Err(Error::InvalidConfig(format!(
                "strokeOpacity must be within [0, 1], got {}",
                self.stroke_opacity
            )));
        }
        let color = self.stroke_color.parse::<Color>()?;

        Ok(BrushSettings {
            width: self.width,
            height: self.height,
            color,
            size: self.stroke_size,
            opacity: self.stroke_opacity,
        })
    }
}
