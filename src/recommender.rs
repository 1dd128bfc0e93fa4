//! Investment suggestion derived from the category ratios of a batch.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::aggregator::CategoryCounts;

/// Positive ratio strictly above this is Promising.
pub const PROMISING_POSITIVE_RATIO: f64 = 0.7;
/// Negative ratio strictly above this is Cautious (checked after Promising).
pub const CAUTIOUS_NEGATIVE_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Recommendation {
    Promising,
    Cautious,
    Mixed,
}

/// Outcome of [`recommend`]. An empty batch is `InsufficientData`, never a default label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "recommendation")]
pub enum Verdict {
    Recommendation(Recommendation),
    InsufficientData,
}

impl Recommendation {
    pub fn advice(&self) -> &'static str {
        match self {
            Recommendation::Promising => {
                "Most reviews are positive. It looks promising, you may consider investing in this product!"
            }
            Recommendation::Cautious => {
                "There are significant negative reviews. You should be cautious about investing."
            }
            Recommendation::Mixed => {
                "The sentiment is mixed. Review details before making a final investment decision."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recommendation::Promising => "Promising",
            Recommendation::Cautious => "Cautious",
            Recommendation::Mixed => "Mixed",
        };
        f.write_str(label)
    }
}

impl Verdict {
    pub fn recommendation(&self) -> Option<Recommendation> {
        match self {
            Verdict::Recommendation(r) => Some(*r),
            Verdict::InsufficientData => None,
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Verdict::Recommendation(r) => r.advice(),
            Verdict::InsufficientData => "Not enough review data to make a suggestion.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Recommendation(r) => r.fmt(f),
            Verdict::InsufficientData => f.write_str("InsufficientData"),
        }
    }
}

pub fn recommend(counts: &CategoryCounts) -> Verdict {
    let total = counts.total();
    if total == 0 {
        return Verdict::InsufficientData;
    }

    let positive_ratio = counts.positive as f64 / total as f64;
    let negative_ratio = counts.negative as f64 / total as f64;

    let recommendation = if positive_ratio > PROMISING_POSITIVE_RATIO {
        Recommendation::Promising
    } else if negative_ratio > CAUTIOUS_NEGATIVE_RATIO {
        Recommendation::Cautious
    } else {
        Recommendation::Mixed
    };
    Verdict::Recommendation(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(p: usize, n: usize, neg: usize) -> Verdict {
        recommend(&CategoryCounts::new(p, n, neg))
    }

    #[test]
    fn test_promising() {
        assert_eq!(verdict(8, 1, 1), Verdict::Recommendation(Recommendation::Promising));
    }

    #[test]
    fn test_cautious() {
        assert_eq!(verdict(5, 1, 4), Verdict::Recommendation(Recommendation::Cautious));
    }

    #[test]
    fn test_mixed() {
        assert_eq!(verdict(5, 4, 1), Verdict::Recommendation(Recommendation::Mixed));
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(verdict(0, 0, 0), Verdict::InsufficientData);
        assert_eq!(verdict(0, 0, 0).recommendation(), None);
    }

    #[test]
    fn test_ratio_boundaries_are_exclusive() {
        // exactly 0.7 positive is not Promising
        assert_eq!(verdict(7, 3, 0), Verdict::Recommendation(Recommendation::Mixed));
        // exactly 0.3 negative is not Cautious
        assert_eq!(verdict(4, 3, 3), Verdict::Recommendation(Recommendation::Mixed));
        assert_eq!(verdict(0, 0, 1), Verdict::Recommendation(Recommendation::Cautious));
        assert_eq!(verdict(1, 0, 0), Verdict::Recommendation(Recommendation::Promising));
        assert_eq!(verdict(0, 1, 0), Verdict::Recommendation(Recommendation::Mixed));
    }

    #[test]
    fn test_advice_text() {
        assert!(Verdict::InsufficientData.advice().starts_with("Not enough review data"));
        assert!(verdict(8, 1, 1).advice().contains("promising"));
        assert_eq!(verdict(5, 1, 4).to_string(), "Cautious");
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_value(verdict(5, 4, 1)).unwrap();
        assert_eq!(json["kind"], "Recommendation");
        assert_eq!(json["recommendation"], "Mixed");
        let json = serde_json::to_value(Verdict::InsufficientData).unwrap();
        assert_eq!(json["kind"], "InsufficientData");
    }
}
