use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use embedding::EMBEDDING_DIM;
use scoring::DEFAULT_TOP_K;

/// Where the engine finds its persisted artifacts and how it evaluates.
///
/// All four files are produced offline by the training pipeline and loaded
/// read-only. Mixing artifacts from different training runs is undefined
/// behavior; deployments ship them as one versioned bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Frozen backbone + learned reduction layer, one ONNX graph.
    pub embedding_model_path: PathBuf,
    /// Fitted mean/scale pair over D-dimensional vectors (JSON).
    pub scaler_path: PathBuf,
    /// Raw catalog: item name → D-dimensional vector (JSON).
    pub catalog_path: PathBuf,
    /// Scoring network: face embedding → one value per catalog item (ONNX).
    pub scoring_model_path: PathBuf,
    /// Expected embedding dimension D.
    pub embedding_dim: usize,
    /// Recommendation list length.
    pub top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            embedding_model_path: PathBuf::from("./models/embedding_model.onnx"),
            scaler_path: PathBuf::from("./models/scaler.json"),
            catalog_path: PathBuf::from("./models/pairwise_features.json"),
            scoring_model_path: PathBuf::from("./models/rl_jewelry_model.onnx"),
            embedding_dim: EMBEDDING_DIM,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl EngineConfig {
    /// Read artifact locations from the environment, falling back to the
    /// defaults above. Deployment wiring, kept out of the evaluate path.
    ///
    /// Recognized variables: `ADORN_MODEL_PATH`, `ADORN_SCALER_PATH`,
    /// `ADORN_CATALOG_PATH`, `ADORN_SCORING_MODEL_PATH`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            embedding_model_path: env_path("ADORN_MODEL_PATH")
                .unwrap_or(defaults.embedding_model_path),
            scaler_path: env_path("ADORN_SCALER_PATH").unwrap_or(defaults.scaler_path),
            catalog_path: env_path("ADORN_CATALOG_PATH").unwrap_or(defaults.catalog_path),
            scoring_model_path: env_path("ADORN_SCORING_MODEL_PATH")
                .unwrap_or(defaults.scoring_model_path),
            embedding_dim: defaults.embedding_dim,
            top_k: defaults.top_k,
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}
