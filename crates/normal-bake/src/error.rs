use normal_lighting::LightError;
use std::path::PathBuf;

/// Errors that can occur while baking lit frames.
#[derive(Debug, thiserror::Error)]
pub enum BakeError {
    /// Creating the output directory failed.
    #[error("Output directory error: {0}")]
    Io(#[from] std::io::Error),

    /// A normal or diffuse map could not be opened or decoded.
    #[error("Cannot read map {path}: {message}")]
    ImageDecode { path: PathBuf, message: String },

    /// A lit frame could not be encoded or written.
    #[error("Cannot write frame {path}: {message}")]
    ImageEncode { path: PathBuf, message: String },

    /// Lighting rejected the inputs.
    #[error("Lighting error: {0}")]
    Lighting(#[from] LightError),

    /// Configuration or input validation failed.
    #[error("Validation error: {0}")]
    Validation(String),
}
