use std::sync::Arc;

use crate::error::EmbeddingError;
use crate::model::EmbeddingModel;
use crate::preprocess::decode_to_tensor;
use crate::scaler::Scaler;
use crate::types::ScaledEmbedding;

/// Converts raw image bytes into the canonical scaled embedding.
///
/// decode → resize → backbone forward pass → standardize. No retries, no
/// side effects beyond transient compute; a decode or inference failure
/// surfaces immediately as a typed error.
pub struct FeatureExtractor {
    model: Arc<dyn EmbeddingModel>,
    scaler: Scaler,
}

impl FeatureExtractor {
    /// Pair a backbone with the scaler fitted for it. The dimensions must
    /// agree — that is the guarantee that keeps catalog vectors and query
    /// vectors comparable.
    pub fn new(model: Arc<dyn EmbeddingModel>, scaler: Scaler) -> Result<Self, EmbeddingError> {
        if model.dim() != scaler.dim() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: model.dim(),
                actual: scaler.dim(),
            });
        }
        Ok(Self { model, scaler })
    }

    pub fn dim(&self) -> usize {
        self.model.dim()
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    /// `extract(image_bytes) -> ScaledEmbedding`, the one entry point the
    /// engine facade calls per image.
    pub fn extract(&self, bytes: &[u8]) -> Result<ScaledEmbedding, EmbeddingError> {
        let tensor = decode_to_tensor(bytes)?;
        let raw = self.model.infer(&tensor)?;
        self.scaler.transform(raw)
    }
}
