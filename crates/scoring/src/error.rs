use thiserror::Error;

/// Errors surfaced by the compatibility scorer and the scoring network.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// The two embeddings handed to the scorer disagree on dimensionality.
    /// A caller error under the shared-extractor guarantee, surfaced as a
    /// typed failure rather than a panic.
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    /// The scoring-network file could not be located.
    #[error("scoring model not found: {0}")]
    ModelNotFound(String),
    /// ONNX Runtime failures while running the scoring network.
    #[error("scoring inference failure: {0}")]
    Inference(String),
}
