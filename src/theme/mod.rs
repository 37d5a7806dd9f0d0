pub mod palette;

pub use palette::{is_hex_color, DefaultColorMap, Palette};

use crate::errors::ChatterError;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Color tables shared by every chatter of a session.
///
/// A theme is loaded once at startup and handed to chatters by reference.
/// Loading validates that remapping is idempotent: no replacement color may
/// itself be a mapped default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    #[serde(default = "DefaultColorMap::builtin")]
    default_colors: DefaultColorMap,
    #[serde(default = "Palette::builtin")]
    palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            default_colors: DefaultColorMap::builtin(),
            palette: Palette::builtin(),
        }
    }
}

impl Theme {
    pub fn new(default_colors: DefaultColorMap, palette: Palette) -> Result<Self, ChatterError> {
        let theme = Theme {
            default_colors,
            palette,
        };
        theme.validate()?;
        Ok(theme)
    }

    /// Reads a TOML theme. A missing file yields the built-in theme.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChatterError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No theme at {:?}, using built-in colors", path);
            return Ok(Self::default());
        }

        let theme = Self::from_toml(&fs::read_to_string(path)?)?;
        debug!(
            "Loaded theme from {:?}: {} default colors, {} palette colors",
            path,
            theme.default_colors.len(),
            theme.palette.len()
        );
        Ok(theme)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ChatterError> {
        let theme: Theme = toml::from_str(contents)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn validate(&self) -> Result<(), ChatterError> {
        for (default_color, replacement) in self.default_colors.iter() {
            for color in [default_color, replacement] {
                if !is_hex_color(color) {
                    return Err(ChatterError::InvalidThemeColor(color.to_string()));
                }
            }
            if self.default_colors.is_default(replacement) {
                return Err(ChatterError::NonIdempotentColorMap {
                    from: default_color.to_string(),
                    to: replacement.to_string(),
                });
            }
        }

        if let Some(color) = self.palette.colors().iter().find(|c| !is_hex_color(c)) {
            return Err(ChatterError::InvalidThemeColor(color.clone()));
        }

        Ok(())
    }

    pub fn default_colors(&self) -> &DefaultColorMap {
        &self.default_colors
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Swaps a known protocol default color for its theme equivalent.
    /// Custom colors come back untouched.
    pub fn sanitize_color(&self, color: Option<&str>) -> Option<String> {
        let color = color?;
        let sanitized = self.default_colors.replacement(color).unwrap_or(color);
        Some(sanitized.to_string())
    }
}
