use fxhash::hash64;

use crate::error::EmbeddingError;
use crate::model::{EmbeddingModel, ImageTensor};
use crate::types::Embedding;

/// Deterministic stand-in backbone for tests and model-free environments.
///
/// Hashes the quantized pixel buffer and fills the vector with sinusoid
/// values derived from the hash, so identical image bytes always map to
/// identical embeddings and different images almost always diverge. Never a
/// silent fallback — callers construct it explicitly.
pub struct StubEmbeddingModel {
    dim: usize,
}

impl StubEmbeddingModel {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl EmbeddingModel for StubEmbeddingModel {
    fn dim(&self) -> usize {
        self.dim
    }

    fn infer(&self, image: &ImageTensor) -> Result<Embedding, EmbeddingError> {
        // Re-quantize so the hash sees the same bytes the decoder produced.
        let quantized: Vec<u8> = image
            .iter()
            .map(|v| ((v + 1.0) * 127.5).round().clamp(0.0, 255.0) as u8)
            .collect();
        let h = hash64(&quantized);
        let mut vector = vec![0f32; self.dim];
        for (idx, value) in vector.iter_mut().enumerate() {
            *value = ((h >> (idx % 32)) as f32 * 0.0001).sin();
        }
        Ok(Embedding::new(vector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onnxruntime::ndarray::Array4;

    fn tensor_of(fill: f32) -> ImageTensor {
        Array4::from_elem((1, 4, 4, 3), fill)
    }

    #[test]
    fn stub_output_has_requested_dimension() {
        let model = StubEmbeddingModel::new(16);
        let emb = model.infer(&tensor_of(0.0)).unwrap();
        assert_eq!(emb.dim(), 16);
    }

    #[test]
    fn identical_tensors_produce_identical_embeddings() {
        let model = StubEmbeddingModel::new(32);
        let a = model.infer(&tensor_of(0.25)).unwrap();
        let b = model.infer(&tensor_of(0.25)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_tensors_produce_different_embeddings() {
        let model = StubEmbeddingModel::new(32);
        let a = model.infer(&tensor_of(-0.5)).unwrap();
        let b = model.infer(&tensor_of(0.5)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn values_stay_in_sinusoid_range() {
        let model = StubEmbeddingModel::new(64);
        let emb = model.infer(&tensor_of(0.1)).unwrap();
        for &v in emb.values() {
            assert!((-1.0..=1.0).contains(&v));
        }
    }
}
