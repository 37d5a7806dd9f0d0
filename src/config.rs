use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::ChatterError;
use crate::logging::LogLevel;
use crate::theme::Theme;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub log_level: LogLevel,
    pub theme_path: Option<PathBuf>,
}

impl Config {
    pub const CONFIG_PATH: &'static str = "chatter.toml";

    pub fn new() -> Result<Self, ChatterError> {
        Self::load(Self::CONFIG_PATH)
    }

    /// Missing files are not an error; the defaults apply.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChatterError> {
        let path = path.as_ref();
        if path.exists() {
            Ok(toml::from_str(&fs::read_to_string(path)?)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn theme(&self) -> Result<Theme, ChatterError> {
        match &self.theme_path {
            Some(path) => Theme::load(path),
            None => {
                info!("No theme configured, using built-in colors");
                Ok(Theme::default())
            }
        }
    }
}
