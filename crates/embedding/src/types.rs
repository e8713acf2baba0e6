use serde::{Deserialize, Serialize};

/// Raw backbone output before standardization.
///
/// Produced only by an [`EmbeddingModel`](crate::EmbeddingModel); the scorer
/// and ranker never see this form — they consume [`ScaledEmbedding`] only.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[f32] {
        &self.0
    }

    pub fn into_values(self) -> Vec<f32> {
        self.0
    }
}

/// An [`Embedding`] after the fitted mean/scale transform has been applied.
///
/// This is the only form the compatibility scorer, the ranker, and the
/// catalog accept. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledEmbedding {
    vector: Vec<f32>,
}

impl ScaledEmbedding {
    pub fn new(vector: Vec<f32>) -> Self {
        Self { vector }
    }

    pub fn dim(&self) -> usize {
        self.vector.len()
    }

    pub fn values(&self) -> &[f32] {
        &self.vector
    }
}
