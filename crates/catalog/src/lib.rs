//! Adorn Catalog Cache
//!
//! The fixed set of jewelry items the ranker scores against, each represented
//! by one precomputed embedding. Built once at engine start from the raw
//! catalog artifact, standardized through the same scaler the query path
//! uses, and read-only for the rest of the process lifetime.
//!
//! The cache owns the ordered name sequence. That order is the contract the
//! scoring network's output positions are interpreted against, so it is
//! fixed deterministically at load time (lexicographic by name) rather than
//! left to incidental map iteration order.
//!
//! Malformed raw entries — null vectors, non-numeric arrays, wrong
//! dimensionality — are dropped during load and never surfaced to callers;
//! the drop count is logged for observability.

mod cache;
mod error;

pub use crate::cache::CatalogCache;
pub use crate::error::CatalogError;
