use serde::{Deserialize, Serialize};

use embedding::ScaledEmbedding;

use crate::category::Category;
use crate::error::ScoringError;

/// Pairwise verdict for one face/jewelry embedding pair. Stateless; nothing
/// here is persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Cosine similarity rescaled to `[0, 1]`.
    pub score: f32,
    pub category: Category,
}

/// Symmetric similarity between two scaled embeddings.
///
/// L2-normalize both, take the dot product (cosine, `[-1, 1]`), rescale with
/// `(cos + 1) / 2`, and bucket. A zero-norm input contributes cosine 0, which
/// lands on the 0.5/Neutral midpoint instead of propagating NaN.
pub fn compatibility(
    a: &ScaledEmbedding,
    b: &ScaledEmbedding,
) -> Result<CompatibilityResult, ScoringError> {
    if a.dim() != b.dim() {
        return Err(ScoringError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    let cos = cosine(a.values(), b.values());
    let score = ((cos + 1.0) / 2.0).clamp(0.0, 1.0);
    Ok(CompatibilityResult {
        score,
        category: Category::from_score(score),
    })
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emb(values: &[f32]) -> ScaledEmbedding {
        ScaledEmbedding::new(values.to_vec())
    }

    #[test]
    fn self_similarity_is_very_good() {
        let a = emb(&[0.3, -1.2, 4.5]);
        let result = compatibility(&a, &a).unwrap();
        assert!((result.score - 1.0).abs() < 1e-6);
        assert_eq!(result.category, Category::VeryGood);
    }

    #[test]
    fn opposite_vectors_score_zero() {
        let a = emb(&[1.0, 0.0]);
        let b = emb(&[-1.0, 0.0]);
        let result = compatibility(&a, &b).unwrap();
        assert!(result.score.abs() < 1e-6);
        assert_eq!(result.category, Category::VeryBad);
    }

    #[test]
    fn orthogonal_vectors_are_neutral() {
        let a = emb(&[1.0, 0.0]);
        let b = emb(&[0.0, 1.0]);
        let result = compatibility(&a, &b).unwrap();
        assert!((result.score - 0.5).abs() < 1e-6);
        assert_eq!(result.category, Category::Neutral);
    }

    #[test]
    fn scoring_is_symmetric() {
        let a = emb(&[0.2, 0.9, -0.4]);
        let b = emb(&[1.1, -0.3, 0.8]);
        let ab = compatibility(&a, &b).unwrap();
        let ba = compatibility(&b, &a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn magnitude_does_not_change_the_score() {
        let a = emb(&[1.0, 2.0]);
        let b = emb(&[2.0, 4.0]);
        let scaled_up = emb(&[10.0, 20.0]);
        let base = compatibility(&a, &b).unwrap();
        let rescaled = compatibility(&a, &scaled_up).unwrap();
        assert!((base.score - rescaled.score).abs() < 1e-6);
    }

    #[test]
    fn zero_norm_input_is_neutral_not_nan() {
        let a = emb(&[0.0, 0.0]);
        let b = emb(&[1.0, 1.0]);
        let result = compatibility(&a, &b).unwrap();
        assert!((result.score - 0.5).abs() < 1e-6);
        assert_eq!(result.category, Category::Neutral);
    }

    #[test]
    fn dimension_mismatch_is_a_typed_error() {
        let a = emb(&[1.0, 0.0]);
        let b = emb(&[1.0, 0.0, 0.0]);
        let result = compatibility(&a, &b);
        assert!(matches!(
            result,
            Err(ScoringError::DimensionMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn result_serializes_with_spaced_category_label() {
        let a = emb(&[1.0]);
        let result = compatibility(&a, &a).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"Very Good\""));
    }
}
