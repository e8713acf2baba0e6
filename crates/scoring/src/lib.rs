//! Adorn Compatibility Scoring & Ranking
//!
//! Two independent judgments over scaled embeddings:
//!
//! - [`compatibility`] - the symmetric pairwise score: cosine similarity of
//!   the face and jewelry embeddings, rescaled to `[0, 1]` and bucketed into
//!   the five-level [`Category`].
//! - [`rank`] - the catalog ranking: one scoring-network forward pass over
//!   the face embedding yields one raw value per catalog position; values are
//!   min-max normalized across the whole catalog, positions are ordered by
//!   raw value, and the top-K come back as [`Recommendation`]s.
//!
//! The scoring network sits behind the [`ScoringModel`] trait. Production
//! uses [`OnnxScoringModel`]; tests pass plain closures, which implement the
//! trait directly.
//!
//! Ranking never raises on a degraded catalog/network pairing: a count
//! mismatch between network outputs and catalog entries logs the discrepancy
//! and returns an empty list, because the pairwise result computed upstream
//! is still worth returning.

mod category;
mod compat;
mod error;
mod model;
mod rank;

pub use crate::category::Category;
pub use crate::compat::{compatibility, CompatibilityResult};
pub use crate::error::ScoringError;
pub use crate::model::{OnnxScoringModel, ScoringModel};
pub use crate::rank::{rank, Recommendation, DEFAULT_TOP_K};
