//! Adorn Engine
//!
//! The facade the surrounding request layer calls into. One
//! [`Engine::load`] at process start turns the four persisted artifacts
//! (backbone weights, scaler parameters, raw catalog, scoring network) into
//! an immutable engine value; one [`Engine::evaluate`] per request turns a
//! face/jewelry image pair into a pairwise compatibility verdict plus a
//! top-K recommendation list.
//!
//! Loading is all-or-nothing: every artifact path is existence-checked
//! before anything is built, and a missing file aborts with
//! [`EngineError::MissingArtifact`] — there is no partially initialized
//! engine. After load the state is read-only, so any number of concurrent
//! evaluations can share one engine without locking; tests build as many
//! independent engines as they like via [`Engine::from_parts`].
//!
//! Evaluation is synchronous, compute-bound, and runs to completion: no
//! internal retries, timeouts, or cancellation. Dispatching calls onto
//! worker threads is the caller's business, as is persisting the
//! [`EvaluationRecord`] hand-off.

mod config;
mod error;
mod facade;
mod record;

pub use crate::config::EngineConfig;
pub use crate::error::{EngineError, ImageSide};
pub use crate::facade::{Engine, Evaluation};
pub use crate::record::EvaluationRecord;
