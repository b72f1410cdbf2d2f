//! Errors

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a scene record could not be read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("invalid number {token:?}, expected {expected}")]
    InvalidNumber { token: String, expected: &'static str },
    #[error("invalid vertex count {token:?}")]
    InvalidVertexCount { token: String },
}

impl ParseError {
    /// Returns true if input simply ran out
    pub fn is_eof(&self) -> bool {
        matches!(self, ParseError::UnexpectedEof { .. })
    }
}

/// Errors from reading scenes and configuration or writing images
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
