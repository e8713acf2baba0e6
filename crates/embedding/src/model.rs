use std::path::{Path, PathBuf};

use onnxruntime::ndarray::Array4;

use crate::error::EmbeddingError;
use crate::runtime;
use crate::types::Embedding;

/// Decoded, preprocessed image ready for the backbone: NHWC, `(1, H, W, 3)`.
pub type ImageTensor = Array4<f32>;

/// The backbone seam: a frozen convolutional network plus the learned dense
/// reduction layer, exported as a single graph that maps one preprocessed
/// image to one D-dimensional raw embedding.
///
/// Implementations must be deterministic — same tensor in, same vector out.
pub trait EmbeddingModel: Send + Sync {
    /// Output dimension of the reduction layer.
    fn dim(&self) -> usize;

    /// One forward pass. The returned embedding has exactly [`dim`](Self::dim)
    /// entries or the call fails.
    fn infer(&self, image: &ImageTensor) -> Result<Embedding, EmbeddingError>;
}

/// Backbone loaded from an ONNX file.
///
/// The struct only holds the path; sessions live in the per-thread cache in
/// [`runtime`], which keeps this handle `Send + Sync`.
pub struct OnnxEmbeddingModel {
    model_path: PathBuf,
    dim: usize,
}

impl OnnxEmbeddingModel {
    /// Point the model at an ONNX file on disk. The file must already exist;
    /// the session itself loads lazily on first inference per thread.
    pub fn open(path: impl AsRef<Path>, dim: usize) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EmbeddingError::ModelNotFound(path.display().to_string()));
        }
        Ok(Self {
            model_path: path.to_path_buf(),
            dim,
        })
    }

    pub fn path(&self) -> &Path {
        &self.model_path
    }
}

impl EmbeddingModel for OnnxEmbeddingModel {
    fn dim(&self) -> usize {
        self.dim
    }

    fn infer(&self, image: &ImageTensor) -> Result<Embedding, EmbeddingError> {
        let values = runtime::run_model(&self.model_path, image.clone().into_dyn())?;
        if values.len() != self.dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dim,
                actual: values.len(),
            });
        }
        Ok(Embedding::new(values))
    }
}
