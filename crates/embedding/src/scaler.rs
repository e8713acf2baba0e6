use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;
use crate::types::{Embedding, ScaledEmbedding};

/// Fitted per-dimension standardization (mean/scale pair) applied uniformly
/// to every embedding before comparison or ranking.
///
/// The parameters are produced offline during training and loaded read-only
/// at engine start. Catalog vectors and query vectors must go through the
/// same scaler instance — mixing transforms from different training runs is
/// what the loader's fail-fast checks exist to prevent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl Scaler {
    /// Build a scaler from explicit parameters. The two vectors must be
    /// non-empty and of equal length.
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, EmbeddingError> {
        if mean.is_empty() {
            return Err(EmbeddingError::InvalidScaler(
                "mean vector is empty".into(),
            ));
        }
        if mean.len() != scale.len() {
            return Err(EmbeddingError::InvalidScaler(format!(
                "mean has {} entries but scale has {}",
                mean.len(),
                scale.len()
            )));
        }
        Ok(Self { mean, scale })
    }

    /// Identity transform of the given dimension (zero mean, unit scale).
    /// Handy for tests and stub artifacts.
    pub fn identity(dim: usize) -> Self {
        Self {
            mean: vec![0.0; dim],
            scale: vec![1.0; dim],
        }
    }

    /// Load the parameter file (JSON `{"mean": [...], "scale": [...]}`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EmbeddingError> {
        let bytes = std::fs::read(path.as_ref())?;
        let raw: Scaler = serde_json::from_slice(&bytes)
            .map_err(|e| EmbeddingError::InvalidScaler(e.to_string()))?;
        Self::new(raw.mean, raw.scale)
    }

    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Standardize a raw embedding: `(x - mean) / scale` per dimension.
    ///
    /// A zero scale entry leaves that dimension centered but undivided, the
    /// same convention the fitting library uses for constant features.
    pub fn transform(&self, embedding: Embedding) -> Result<ScaledEmbedding, EmbeddingError> {
        if embedding.dim() != self.dim() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dim(),
                actual: embedding.dim(),
            });
        }
        let vector = embedding
            .into_values()
            .into_iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (&m, &s))| {
                let centered = x - m;
                if s == 0.0 {
                    centered
                } else {
                    centered / s
                }
            })
            .collect();
        Ok(ScaledEmbedding::new(vector))
    }
}
