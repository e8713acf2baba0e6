//! Umbrella crate for Adorn, the jewelry compatibility scoring and
//! recommendation engine.
//!
//! This crate stitches the focused layers together so callers get the whole
//! engine through a single dependency:
//!
//! - `embedding` — image bytes → backbone forward pass → standardized
//!   embedding, with a deterministic stub backbone for model-free setups.
//! - `catalog` — the preloaded, read-only jewelry catalog and its ordered
//!   name sequence.
//! - `scoring` — the symmetric pairwise compatibility score and the
//!   Q-value ranking over the catalog.
//! - `engine` — artifact loading, the immutable engine state, and the
//!   per-request `evaluate` facade.
//!
//! ## Quick example
//!
//! ```no_run
//! use adorn::{Engine, EngineConfig};
//!
//! let engine = Engine::load(&EngineConfig::from_env())?;
//!
//! let face = std::fs::read("face.jpg")?;
//! let jewelry = std::fs::read("necklace.png")?;
//! let evaluation = engine.evaluate(&face, &jewelry)?;
//!
//! println!(
//!     "{} ({:.2})",
//!     evaluation.compatibility.category, evaluation.compatibility.score
//! );
//! for rec in &evaluation.recommendations {
//!     println!("  {} {:.2} {}", rec.name, rec.score, rec.category);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The engine performs synchronous, compute-bound inference and holds no
//! internal scheduler; dispatch `evaluate` calls onto whatever workers the
//! surrounding request layer uses. All engine state is read-only after
//! `load`, so one engine is safely shared across those workers.

pub use catalog::{CatalogCache, CatalogError};
pub use embedding::{
    Device, Embedding, EmbeddingError, EmbeddingModel, FeatureExtractor, OnnxEmbeddingModel,
    ScaledEmbedding, Scaler, StubEmbeddingModel, EMBEDDING_DIM,
};
pub use engine::{Engine, EngineConfig, EngineError, Evaluation, EvaluationRecord, ImageSide};
pub use scoring::{
    compatibility, rank, Category, CompatibilityResult, OnnxScoringModel, Recommendation,
    ScoringError, ScoringModel, DEFAULT_TOP_K,
};
