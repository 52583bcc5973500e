use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwingError {
    #[error("invalid input: {field} must be finite, got {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    /// Swing length is the divisor of swing acceleration.
    #[error(
        "degenerate swing: swing length {swing_length} is not positive (bat speed and time to contact must be > 0)"
    )]
    DegenerateSwingLength { swing_length: f64 },

    #[error("unknown category: {0} (use one of Orange|Purple|Red|Grey|Green|Pink|Brown|Blue)")]
    UnknownCategory(String),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SwingError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwingError>;
