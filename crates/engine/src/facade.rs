use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use catalog::CatalogCache;
use embedding::{Device, FeatureExtractor, OnnxEmbeddingModel, Scaler};
use scoring::{
    compatibility, rank, CompatibilityResult, OnnxScoringModel, Recommendation, ScoringModel,
};

use crate::config::EngineConfig;
use crate::error::{EngineError, ImageSide};

/// Everything one `evaluate` call needs, built once at load time and
/// read-only afterwards. Reloading means running [`Engine::load`] again and
/// swapping the value; nothing in here mutates.
pub struct Engine {
    extractor: FeatureExtractor,
    scoring: Arc<dyn ScoringModel>,
    catalog: CatalogCache,
    device: Device,
    top_k: usize,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("device", &self.device)
            .field("top_k", &self.top_k)
            .finish_non_exhaustive()
    }
}

/// The result tuple handed back to the request layer: the pairwise verdict
/// plus the ranked list. The list may be empty while the verdict is still
/// valid — degraded ranking never discards the pairwise score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub compatibility: CompatibilityResult,
    pub recommendations: Vec<Recommendation>,
}

impl Engine {
    /// Load all four artifacts and assemble the engine, or fail without
    /// building any partial state. Missing paths are reported before any
    /// load attempt, in config order.
    pub fn load(cfg: &EngineConfig) -> Result<Self, EngineError> {
        for path in [
            &cfg.embedding_model_path,
            &cfg.scaler_path,
            &cfg.catalog_path,
            &cfg.scoring_model_path,
        ] {
            if !path.exists() {
                return Err(EngineError::MissingArtifact(path.clone()));
            }
        }

        let device = Device::detect();
        info!(%device, dim = cfg.embedding_dim, "initializing engine");

        let scaler = Scaler::from_path(&cfg.scaler_path)?;
        let backbone = OnnxEmbeddingModel::open(&cfg.embedding_model_path, cfg.embedding_dim)?;
        let extractor = FeatureExtractor::new(Arc::new(backbone), scaler.clone())?;
        let catalog = CatalogCache::load(&cfg.catalog_path, &scaler)?;
        info!(entries = catalog.len(), "catalog loaded");
        let scoring = Arc::new(OnnxScoringModel::open(&cfg.scoring_model_path)?);

        Ok(Self::from_parts(extractor, scoring, catalog, device, cfg.top_k))
    }

    /// Assemble an engine from already-built parts. This is how tests wire
    /// in stub backbones and closure scoring models; production goes through
    /// [`load`](Self::load).
    pub fn from_parts(
        extractor: FeatureExtractor,
        scoring: Arc<dyn ScoringModel>,
        catalog: CatalogCache,
        device: Device,
        top_k: usize,
    ) -> Self {
        Self {
            extractor,
            scoring,
            catalog,
            device,
            top_k,
        }
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Evaluate one face/jewelry image pair.
    ///
    /// Extracts both embeddings first; if either fails, the typed failure
    /// names the failing side and the ranker is never invoked. With both in
    /// hand, the pairwise score comes from the pair while the ranking uses
    /// the face embedding alone — the jewelry image never influences the
    /// recommendation list.
    pub fn evaluate(
        &self,
        face_bytes: &[u8],
        jewelry_bytes: &[u8],
    ) -> Result<Evaluation, EngineError> {
        let face = self
            .extractor
            .extract(face_bytes)
            .map_err(|source| EngineError::Extraction {
                side: ImageSide::Face,
                source,
            })?;
        let jewelry = self
            .extractor
            .extract(jewelry_bytes)
            .map_err(|source| EngineError::Extraction {
                side: ImageSide::Jewelry,
                source,
            })?;

        let compatibility = compatibility(&face, &jewelry)?;
        let recommendations = rank(self.scoring.as_ref(), &self.catalog, &face, self.top_k);

        Ok(Evaluation {
            compatibility,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedding::{ScaledEmbedding, StubEmbeddingModel};
    use scoring::ScoringError;

    fn png_bytes(shade: u8) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(16, 16, image::Rgb([shade, shade, shade]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    fn stub_engine(dim: usize, q_values: Vec<f32>, catalog: CatalogCache) -> Engine {
        let extractor = FeatureExtractor::new(
            Arc::new(StubEmbeddingModel::new(dim)),
            Scaler::identity(dim),
        )
        .unwrap();
        let scoring =
            move |_face: &ScaledEmbedding| -> Result<Vec<f32>, ScoringError> { Ok(q_values.clone()) };
        Engine::from_parts(extractor, Arc::new(scoring), catalog, Device::Cpu, 10)
    }

    #[test]
    fn evaluate_returns_both_outputs() {
        let catalog = CatalogCache::from_entries(vec![
            ("a".to_string(), ScaledEmbedding::new(vec![1.0; 8])),
            ("b".to_string(), ScaledEmbedding::new(vec![-1.0; 8])),
        ]);
        let engine = stub_engine(8, vec![2.0, 1.0], catalog);

        let evaluation = engine.evaluate(&png_bytes(40), &png_bytes(200)).unwrap();
        assert_eq!(evaluation.recommendations.len(), 2);
        assert_eq!(evaluation.recommendations[0].name, "a");
        assert!((0.0..=1.0).contains(&evaluation.compatibility.score));
    }

    #[test]
    fn face_decode_failure_short_circuits() {
        let catalog = CatalogCache::from_entries(Vec::new());
        let extractor = FeatureExtractor::new(
            Arc::new(StubEmbeddingModel::new(4)),
            Scaler::identity(4),
        )
        .unwrap();
        // A scoring model that must never run when extraction fails.
        let scoring = |_face: &ScaledEmbedding| -> Result<Vec<f32>, ScoringError> {
            panic!("ranker invoked after extraction failure")
        };
        let engine =
            Engine::from_parts(extractor, Arc::new(scoring), catalog, Device::Cpu, 10);

        let err = engine.evaluate(&[], &png_bytes(10)).unwrap_err();
        assert_eq!(err.failed_side(), Some(ImageSide::Face));
    }

    #[test]
    fn jewelry_decode_failure_names_the_jewelry_side() {
        let catalog = CatalogCache::from_entries(Vec::new());
        let engine = stub_engine(4, Vec::new(), catalog);
        let err = engine.evaluate(&png_bytes(10), b"junk").unwrap_err();
        assert_eq!(err.failed_side(), Some(ImageSide::Jewelry));
    }

    #[test]
    fn degraded_ranking_still_returns_the_pairwise_result() {
        // Catalog of two entries, scoring model that emits three values.
        let catalog = CatalogCache::from_entries(vec![
            ("a".to_string(), ScaledEmbedding::new(vec![1.0; 4])),
            ("b".to_string(), ScaledEmbedding::new(vec![0.5; 4])),
        ]);
        let engine = stub_engine(4, vec![1.0, 2.0, 3.0], catalog);

        let evaluation = engine.evaluate(&png_bytes(60), &png_bytes(60)).unwrap();
        assert!(evaluation.recommendations.is_empty());
        // Identical bytes → identical embeddings → perfect pairwise score.
        assert!((evaluation.compatibility.score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn load_builds_an_engine_from_files_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let backbone = dir.path().join("embedding_model.onnx");
        let scoring = dir.path().join("rl_jewelry_model.onnx");
        let scaler = dir.path().join("scaler.json");
        let catalog = dir.path().join("pairwise_features.json");
        std::fs::write(&backbone, b"opaque model bytes").unwrap();
        std::fs::write(&scoring, b"opaque model bytes").unwrap();
        std::fs::write(&scaler, br#"{"mean": [0.0, 0.0], "scale": [1.0, 1.0]}"#).unwrap();
        std::fs::write(&catalog, br#"{"hoop": [0.5, 0.5]}"#).unwrap();

        let cfg = EngineConfig {
            embedding_model_path: backbone,
            scaler_path: scaler,
            catalog_path: catalog,
            scoring_model_path: scoring,
            embedding_dim: 2,
            top_k: 5,
        };

        let engine = Engine::load(&cfg).unwrap();
        assert_eq!(engine.catalog().len(), 1);
        assert_eq!(engine.top_k(), 5);
    }

    #[test]
    fn load_fails_when_an_artifact_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let scaler = dir.path().join("scaler.json");
        std::fs::write(&scaler, br#"{"mean": [0.0], "scale": [1.0]}"#).unwrap();

        let cfg = EngineConfig {
            embedding_model_path: dir.path().join("absent.onnx"),
            scaler_path: scaler,
            catalog_path: dir.path().join("absent.json"),
            scoring_model_path: dir.path().join("absent_q.onnx"),
            embedding_dim: 1,
            top_k: 10,
        };

        let err = Engine::load(&cfg).unwrap_err();
        assert!(matches!(err, EngineError::MissingArtifact(_)));
    }

    #[test]
    fn evaluate_is_deterministic() {
        let catalog = CatalogCache::from_entries(vec![(
            "only".to_string(),
            ScaledEmbedding::new(vec![1.0; 8]),
        )]);
        let engine = stub_engine(8, vec![1.0], catalog);
        let face = png_bytes(33);
        let jewel = png_bytes(99);

        let a = engine.evaluate(&face, &jewel).unwrap();
        let b = engine.evaluate(&face, &jewel).unwrap();
        assert_eq!(a, b);
    }
}
