use serde::{Deserialize, Serialize};

use scoring::{Category, Recommendation};

use crate::facade::Evaluation;

/// The durable hand-off to the external persistence collaborator.
///
/// The engine never persists anything itself; after an evaluation the
/// request layer attaches its opaque references (user/session token, image
/// storage paths) and ships this record off. Serialization format is the
/// collaborator's concern — this type just guarantees the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Caller-supplied user or session token. Opaque to the engine.
    pub user_ref: String,
    /// Where the caller stored the face image, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_image_ref: Option<String>,
    /// Where the caller stored the jewelry image, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jewelry_image_ref: Option<String>,
    pub score: f32,
    pub category: Category,
    pub recommendations: Vec<Recommendation>,
}

impl Evaluation {
    /// Attach caller references and produce the persistence record.
    pub fn into_record(
        self,
        user_ref: impl Into<String>,
        face_image_ref: Option<String>,
        jewelry_image_ref: Option<String>,
    ) -> EvaluationRecord {
        EvaluationRecord {
            user_ref: user_ref.into(),
            face_image_ref,
            jewelry_image_ref,
            score: self.compatibility.score,
            category: self.compatibility.category,
            recommendations: self.recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoring::CompatibilityResult;

    fn sample_evaluation() -> Evaluation {
        Evaluation {
            compatibility: CompatibilityResult {
                score: 0.85,
                category: Category::VeryGood,
            },
            recommendations: vec![Recommendation {
                name: "necklace-01".into(),
                score: 1.0,
                category: Category::VeryGood,
            }],
        }
    }

    #[test]
    fn record_carries_evaluation_and_caller_refs() {
        let record = sample_evaluation().into_record(
            "user-42",
            Some("s3://faces/1.png".into()),
            None,
        );
        assert_eq!(record.user_ref, "user-42");
        assert_eq!(record.face_image_ref.as_deref(), Some("s3://faces/1.png"));
        assert!(record.jewelry_image_ref.is_none());
        assert_eq!(record.score, 0.85);
        assert_eq!(record.recommendations.len(), 1);
    }

    #[test]
    fn record_serializes_with_display_labels() {
        let record = sample_evaluation().into_record("user-1", None, None);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Very Good\""));
        assert!(json.contains("necklace-01"));
        // Absent image refs are omitted entirely.
        assert!(!json.contains("face_image_ref"));
    }

    #[test]
    fn record_round_trips() {
        let record = sample_evaluation().into_record("u", Some("a".into()), Some("b".into()));
        let json = serde_json::to_string(&record).unwrap();
        let back: EvaluationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
