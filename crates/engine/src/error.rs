use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use catalog::CatalogError;
use embedding::EmbeddingError;
use scoring::ScoringError;

/// Which of the two request images an extraction failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    Face,
    Jewelry,
}

impl fmt::Display for ImageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSide::Face => write!(f, "face"),
            ImageSide::Jewelry => write!(f, "jewelry"),
        }
    }
}

/// Errors crossing the engine boundary. Load-time failures are fatal for
/// initialization; per-call extraction failures are recoverable at the
/// request level and identify which image failed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An artifact path did not exist. Raised before any state is built.
    #[error("missing required artifact: {}", .0.display())]
    MissingArtifact(PathBuf),
    /// Feature extraction failed for one of the two request images.
    #[error("{side} image extraction failed: {source}")]
    Extraction {
        side: ImageSide,
        source: EmbeddingError,
    },
    /// Load-time failure in the backbone, scaler, or extractor wiring.
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
    /// Load-time failure while reading the catalog artifact.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Failure in the pairwise scorer or the scoring-network loader.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl EngineError {
    /// The failing image side, when this is a per-request extraction error.
    pub fn failed_side(&self) -> Option<ImageSide> {
        match self {
            EngineError::Extraction { side, .. } => Some(*side),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_names_the_path() {
        let err = EngineError::MissingArtifact(PathBuf::from("/models/scaler.json"));
        assert!(err.to_string().contains("missing required artifact"));
        assert!(err.to_string().contains("/models/scaler.json"));
    }

    #[test]
    fn extraction_error_identifies_the_side() {
        let err = EngineError::Extraction {
            side: ImageSide::Jewelry,
            source: EmbeddingError::Decode("empty image buffer".into()),
        };
        assert!(err.to_string().starts_with("jewelry image extraction failed"));
        assert_eq!(err.failed_side(), Some(ImageSide::Jewelry));
    }

    #[test]
    fn load_errors_have_no_side() {
        let err = EngineError::MissingArtifact(PathBuf::from("x"));
        assert_eq!(err.failed_side(), None);
    }

    #[test]
    fn image_side_display() {
        assert_eq!(ImageSide::Face.to_string(), "face");
        assert_eq!(ImageSide::Jewelry.to_string(), "jewelry");
    }
}
