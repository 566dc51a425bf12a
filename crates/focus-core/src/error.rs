use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FocusError {
    #[error("No input image provided")]
    InputMissing,

    #[error("Image file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to decode image: {0}")]
    DecodeFailure(String),

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidGrid { width: usize, height: usize },

    #[error("Invalid job configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write result to {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FocusError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputMissing => ErrorKind::InputMissing,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DecodeFailure(_) => ErrorKind::DecodeFailure,
            Self::InvalidGrid { .. } => ErrorKind::InvalidGrid,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::OutputWriteFailure { .. } => ErrorKind::OutputWriteFailure,
        }
    }
}

impl From<image::ImageError> for FocusError {
    fn from(err: image::ImageError) -> Self {
        Self::DecodeFailure(err.to_string())
    }
}

/// Machine-checkable error category carried in error result documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InputMissing,
    NotFound,
    DecodeFailure,
    InvalidGrid,
    InvalidConfig,
    OutputWriteFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InputMissing => "input_missing",
            Self::NotFound => "not_found",
            Self::DecodeFailure => "decode_failure",
            Self::InvalidGrid => "invalid_grid",
            Self::InvalidConfig => "invalid_config",
            Self::OutputWriteFailure => "output_write_failure",
        };
        f.pad(name)
    }
}

pub type Result<T> = std::result::Result<T, FocusError>;
