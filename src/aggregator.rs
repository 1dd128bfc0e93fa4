//! Batch aggregation: score and classify every review, keep input order,
//! count categories.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::classifier::{classify, SentimentCategory};
use crate::polarity::PolarityScorer;

/// One analyzed review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewRecord {
    pub text: String,
    pub polarity: f64,
    pub category: SentimentCategory,
}

impl ReviewRecord {
    pub fn from_text<S: PolarityScorer + ?Sized>(scorer: &S, text: &str) -> Self {
        let polarity = scorer.score(text);
        ReviewRecord {
            text: text.to_string(),
            polarity,
            category: classify(polarity),
        }
    }
}

/// Count per category. All three categories are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// One slice of the distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DistributionSlice {
    pub category: SentimentCategory,
    pub count: usize,
    /// Share of the total, in percent.
    pub percent: f64,
    pub color: String,
}

impl CategoryCounts {
    pub fn new(positive: usize, neutral: usize, negative: usize) -> Self {
        CategoryCounts {
            positive,
            neutral,
            negative,
        }
    }

    pub fn record(&mut self, category: SentimentCategory) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Neutral => self.neutral += 1,
            SentimentCategory::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, category: SentimentCategory) -> usize {
        match category {
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Neutral => self.neutral,
            SentimentCategory::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Percentage of the total for `category`; 0.0 for an empty batch.
    pub fn share(&self, category: SentimentCategory) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(category) as f64 * 100.0 / total as f64
    }

    /// Chart-ready slices in Positive, Neutral, Negative order. Empty categories are skipped.
    pub fn distribution(&self) -> Vec<DistributionSlice> {
        SentimentCategory::ALL
            .iter()
            .filter(|c| self.get(**c) > 0)
            .map(|c| DistributionSlice {
                category: *c,
                count: self.get(*c),
                percent: self.share(*c),
                color: c.color().to_string(),
            })
            .collect()
    }
}

impl FromIterator<SentimentCategory> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = SentimentCategory>>(iter: I) -> Self {
        let mut counts = CategoryCounts::default();
        for category in iter {
            counts.record(category);
        }
        counts
    }
}

/// Records in input order plus their category counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct BatchResult {
    pub records: Vec<ReviewRecord>,
    pub counts: CategoryCounts,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = SentimentCategory> + '_ {
        self.records.iter().map(|r| r.category)
    }
}

/// Scores and classifies each text in order.
pub fn aggregate<S, I, T>(scorer: &S, texts: I) -> BatchResult
where
    S: PolarityScorer + ?Sized,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut result = BatchResult::default();
    for text in texts {
        let record = ReviewRecord::from_text(scorer, text.as_ref());
        tracing::debug!(
            "[Aggregator] row {} -> {} ({:.2})",
            result.records.len(),
            record.category,
            record.polarity
        );
        result.counts.record(record.category);
        result.records.push(record);
    }
    result
}
