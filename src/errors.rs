use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid theme color: {0:?}")]
    InvalidThemeColor(String),

    #[error("Default color {from} is replaced by {to}, which is itself a mapped default")]
    NonIdempotentColorMap { from: String, to: String },

    #[error("Unsupported slow mode duration: {0} seconds")]
    UnsupportedSlowModeDuration(u32),

    #[error("Unknown chatter role: {0}")]
    UnknownRole(String),

    #[error("Failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
