use std::fmt;

use serde::{Deserialize, Serialize};

/// Five-level verdict derived from a normalized score via fixed thresholds.
///
/// Bounds are inclusive on the lower end: a score of exactly 0.8 is
/// `VeryGood`, 0.79999 is `Good`, and so on down in 0.2 steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Very Bad")]
    VeryBad,
    #[serde(rename = "Bad")]
    Bad,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
}

impl Category {
    /// Bucket a score in `[0, 1]`. The thresholds are fixed, not
    /// configurable.
    pub fn from_score(score: f32) -> Self {
        if score >= 0.8 {
            Category::VeryGood
        } else if score >= 0.6 {
            Category::Good
        } else if score >= 0.4 {
            Category::Neutral
        } else if score >= 0.2 {
            Category::Bad
        } else {
            Category::VeryBad
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::VeryBad => "Very Bad",
            Category::Bad => "Bad",
            Category::Neutral => "Neutral",
            Category::Good => "Good",
            Category::VeryGood => "Very Good",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
