use std::path::{Path, PathBuf};

use onnxruntime::ndarray::Array2;

use embedding::{runtime, ScaledEmbedding};

use crate::error::ScoringError;

/// The scoring-network seam: maps one face embedding to one raw value per
/// catalog position.
///
/// Implemented by [`OnnxScoringModel`] in production and by any plain
/// closure in tests, via the blanket impl below.
pub trait ScoringModel: Send + Sync {
    fn q_values(&self, face: &ScaledEmbedding) -> Result<Vec<f32>, ScoringError>;
}

impl<F> ScoringModel for F
where
    F: Fn(&ScaledEmbedding) -> Result<Vec<f32>, ScoringError> + Send + Sync,
{
    fn q_values(&self, face: &ScaledEmbedding) -> Result<Vec<f32>, ScoringError> {
        self(face)
    }
}

/// Scoring network loaded from an ONNX file. Input `(1, D)`, output one
/// value per catalog position. Sessions live in the shared per-thread cache.
pub struct OnnxScoringModel {
    model_path: PathBuf,
}

impl OnnxScoringModel {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScoringError::ModelNotFound(path.display().to_string()));
        }
        Ok(Self {
            model_path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.model_path
    }
}

impl ScoringModel for OnnxScoringModel {
    fn q_values(&self, face: &ScaledEmbedding) -> Result<Vec<f32>, ScoringError> {
        let input = Array2::from_shape_vec((1, face.dim()), face.values().to_vec())
            .map_err(|e| ScoringError::Inference(e.to_string()))?;
        runtime::run_model(&self.model_path, input.into_dyn())
            .map_err(|e| ScoringError::Inference(e.to_string()))
    }
}
