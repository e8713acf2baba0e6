use std::io;
use thiserror::Error;

/// Errors surfaced while loading the raw catalog artifact.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file is not a JSON object of name → vector entries.
    #[error("catalog parse failed: {0}")]
    Parse(String),
    /// Low-level IO failures while reading the artifact.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
