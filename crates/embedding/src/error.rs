use std::io;
use thiserror::Error;

/// Errors surfaced by feature extraction and artifact loading.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The input bytes were empty or did not decode as a still image.
    #[error("image decode failed: {0}")]
    Decode(String),
    /// The backbone model file could not be located.
    #[error("model file not found: {0}")]
    ModelNotFound(String),
    /// ONNX Runtime failures while loading or running the backbone.
    #[error("inference failure: {0}")]
    Inference(String),
    /// A vector had a different dimension than the loaded artifacts expect.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// The scaler parameter file is malformed (unequal lengths, empty, bad JSON).
    #[error("invalid scaler parameters: {0}")]
    InvalidScaler(String),
    /// Low-level IO failures while touching the filesystem.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
