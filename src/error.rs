//! Error types for the platform layer.
//!
//! Pixel computation cannot fail; everything here comes from SDL setup,
//! presentation or configuration loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize SDL: {0}")]
    Sdl(String),

    #[error("failed to create window: {0}")]
    Window(String),

    #[error("failed to create renderer: {0}")]
    Renderer(String),

    #[error("failed to create texture: {0}")]
    Texture(String),

    #[error("failed to present frame: {0}")]
    Present(String),

    #[error("failed to access config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
