use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::error;

use catalog::CatalogCache;
use embedding::ScaledEmbedding;

use crate::category::Category;
use crate::model::ScoringModel;

/// Reference top-K for the recommendation list.
pub const DEFAULT_TOP_K: usize = 10;

/// One ranked catalog item. The score is min-max normalized across the
/// current catalog, so it is only comparable within a single `rank` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub score: f32,
    pub category: Category,
}

/// Rank the catalog against a face embedding.
///
/// One scoring-network pass produces one raw value per catalog position, in
/// the cache's load-time order. Selection sorts positions by raw value
/// descending (stable, so ties keep catalog order) and takes the first
/// `top_k`; each selected item carries its normalized value and the bucket
/// of that normalized value.
///
/// Degraded conditions never raise: a network failure or a count mismatch
/// between outputs and catalog entries is logged and yields an empty list,
/// leaving the caller's pairwise result intact.
pub fn rank(
    model: &dyn ScoringModel,
    catalog: &CatalogCache,
    face: &ScaledEmbedding,
    top_k: usize,
) -> Vec<Recommendation> {
    let raw = match model.q_values(face) {
        Ok(values) => values,
        Err(err) => {
            error!(%err, "scoring network failed; returning no recommendations");
            return Vec::new();
        }
    };
    if raw.len() != catalog.len() {
        error!(
            values = raw.len(),
            catalog = catalog.len(),
            "scoring output count does not match catalog; returning no recommendations"
        );
        return Vec::new();
    }
    if raw.is_empty() {
        return Vec::new();
    }

    let normalized = min_max_normalize(&raw);

    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by(|&a, &b| raw[b].partial_cmp(&raw[a]).unwrap_or(Ordering::Equal));
    order.truncate(top_k);

    order
        .into_iter()
        .map(|i| Recommendation {
            name: catalog.names()[i].clone(),
            score: normalized[i],
            category: Category::from_score(normalized[i]),
        })
        .collect()
}

/// Min-max normalize across the whole value set. When every value is equal
/// the spread is zero, and every output is pinned to exactly 0.5 instead of
/// dividing by zero.
fn min_max_normalize(values: &[f32]) -> Vec<f32> {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if max > min {
        let spread = max - min;
        values.iter().map(|v| (v - min) / spread).collect()
    } else {
        vec![0.5; values.len()]
    }
}
