//! Adorn Feature Extraction
//!
//! This crate turns raw image bytes into the fixed-length vectors the rest of
//! the engine works with. Given any still image the decoder can handle, it
//! produces a backbone embedding and then standardizes it with the fitted
//! mean/scale transform that shipped alongside the model.
//!
//! Two backbone implementations exist:
//!
//! - **ONNX mode** - Runs the frozen backbone + learned reduction layer
//!   locally. Requires a model file.
//! - **Stub mode** - For testing. Generates fake but deterministic vectors
//!   from the decoded pixels, no model file needed.
//!
//! Everything here is deterministic: identical bytes and identical loaded
//! artifacts always produce identical embeddings. There is no randomness in
//! inference and no retry logic, so a decode failure surfaces immediately.
//!
//! ## Threading notes
//!
//! ONNX sessions get cached per-thread. First call on any thread does the
//! expensive setup; after that it's fast. The extractor itself is `Send +
//! Sync` and can be shared freely once built.
//!
//! ## Quick example
//!
//! ```no_run
//! use std::sync::Arc;
//! use embedding::{FeatureExtractor, OnnxEmbeddingModel, Scaler, EMBEDDING_DIM};
//!
//! let model = OnnxEmbeddingModel::open("models/embedding_model.onnx", EMBEDDING_DIM)?;
//! let scaler = Scaler::from_path("models/scaler.json")?;
//! let extractor = FeatureExtractor::new(Arc::new(model), scaler)?;
//!
//! let bytes = std::fs::read("face.jpg")?;
//! let scaled = extractor.extract(&bytes)?;
//! assert_eq!(scaled.dim(), EMBEDDING_DIM);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod device;
pub mod error;
pub mod model;
pub mod runtime;
pub mod scaler;
pub mod stub;
pub mod types;

mod extractor;
mod preprocess;

pub use crate::device::Device;
pub use crate::error::EmbeddingError;
pub use crate::extractor::FeatureExtractor;
pub use crate::model::{EmbeddingModel, ImageTensor, OnnxEmbeddingModel};
pub use crate::preprocess::{INPUT_HEIGHT, INPUT_WIDTH};
pub use crate::scaler::Scaler;
pub use crate::stub::StubEmbeddingModel;
pub use crate::types::{Embedding, ScaledEmbedding};

/// Embedding dimension of the reference artifact (backbone pool output fed
/// through the learned reduction layer).
pub const EMBEDDING_DIM: usize = 1280;
