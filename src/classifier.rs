//! Maps a polarity score onto one of three fixed sentiment categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Scores strictly above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores strictly below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Discrete sentiment label. Serialized exactly as "Positive", "Neutral", "Negative".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl SentimentCategory {
    /// Display order used for counts and charts.
    pub const ALL: [SentimentCategory; 3] = [
        SentimentCategory::Positive,
        SentimentCategory::Neutral,
        SentimentCategory::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::Negative => "Negative",
        }
    }

    /// Chart colour (green / yellow / red).
    pub fn color(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "#4CAF50",
            SentimentCategory::Neutral => "#FFEB3B",
            SentimentCategory::Negative => "#F44336",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a polarity score. Boundaries are exclusive: 0.1 and -0.1 are Neutral.
/// NaN compares false against both thresholds and lands in Neutral.
pub fn classify(score: f64) -> SentimentCategory {
    if score > POSITIVE_THRESHOLD {
        SentimentCategory::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify(0.1), SentimentCategory::Neutral);
        assert_eq!(classify(0.1000001), SentimentCategory::Positive);
        assert_eq!(classify(-0.1), SentimentCategory::Neutral);
        assert_eq!(classify(-0.1000001), SentimentCategory::Negative);
        assert_eq!(classify(0.0), SentimentCategory::Neutral);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(1.0), SentimentCategory::Positive);
        assert_eq!(classify(-1.0), SentimentCategory::Negative);
        // Outside the scorer contract, still total
        assert_eq!(classify(42.0), SentimentCategory::Positive);
        assert_eq!(classify(f64::NEG_INFINITY), SentimentCategory::Negative);
        assert_eq!(classify(f64::NAN), SentimentCategory::Neutral);
    }

    #[test]
    fn test_deterministic_sweep() {
        let mut s = -1.0;
        while s <= 1.0 {
            let expected = if s > 0.1 {
                SentimentCategory::Positive
            } else if s < -0.1 {
                SentimentCategory::Negative
            } else {
                SentimentCategory::Neutral
            };
            assert_eq!(classify(s), expected);
            assert_eq!(classify(s), classify(s));
            s += 0.01;
        }
    }

    #[test]
    fn test_labels_are_exact() {
        assert_eq!(SentimentCategory::Positive.to_string(), "Positive");
        assert_eq!(
            serde_json::to_string(&SentimentCategory::Negative).unwrap(),
            "\"Negative\""
        );
    }
}
