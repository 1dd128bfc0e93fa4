//! Orchestration of single-review and batch analysis.
//!
//! The pipeline holds nothing but the injected scorer. Every call takes its
//! inputs as arguments and returns owned results.

use serde::Serialize;

use crate::aggregator::{aggregate, BatchResult, ReviewRecord};
use crate::error::{AnalysisError, Result};
use crate::polarity::{LexiconScorer, PolarityScorer};
use crate::recommender::{recommend, Verdict};
use crate::table::ReviewTable;

/// Result of single-review mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SingleOutcome {
    Classified(ReviewRecord),
    /// Nothing was entered. Distinct from a Neutral classification.
    NoInput,
}

/// Result of batch mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub result: BatchResult,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline<S = LexiconScorer> {
    scorer: S,
    max_rows: Option<usize>,
}

impl Pipeline<LexiconScorer> {
    pub fn lexicon() -> Self {
        Pipeline::new(LexiconScorer::new())
    }
}

impl<S: PolarityScorer> Pipeline<S> {
    pub fn new(scorer: S) -> Self {
        Pipeline {
            scorer,
            max_rows: None,
        }
    }

    /// Rejects batches with more rows than `max_rows` with [`AnalysisError::TooManyRows`].
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn run_single(&self, text: Option<&str>) -> SingleOutcome {
        match text {
            Some(t) if !t.is_empty() => {
                let record = ReviewRecord::from_text(&self.scorer, t);
                tracing::info!(
                    "[Pipeline] Single review: {} ({:.2})",
                    record.category,
                    record.polarity
                );
                SingleOutcome::Classified(record)
            }
            _ => SingleOutcome::NoInput,
        }
    }

    pub fn run_batch(&self, table: &ReviewTable, column: &str) -> Result<BatchReport> {
        let texts = table
            .column_values(column)
            .ok_or_else(|| AnalysisError::MissingColumn {
                column: column.to_string(),
            })?;

        if let Some(max) = self.max_rows {
            if texts.len() > max {
                return Err(AnalysisError::TooManyRows {
                    rows: texts.len(),
                    limit: max,
                });
            }
        }

        let result = aggregate(&self.scorer, texts);
        let verdict = recommend(&result.counts);

        tracing::info!(
            "[Pipeline] Batch of {} reviews: {} positive, {} neutral, {} negative -> {}",
            result.len(),
            result.counts.positive,
            result.counts.neutral,
            result.counts.negative,
            verdict
        );

        Ok(BatchReport { result, verdict })
    }

    /// Ingests an uploaded file and runs the batch over it.
    /// Returns the parsed table too, so callers can export it.
    pub fn run_batch_source(
        &self,
        file_name: &str,
        bytes: &[u8],
        column: &str,
    ) -> Result<(ReviewTable, BatchReport)> {
        let table = ReviewTable::from_source(file_name, bytes).map_err(|e| {
            tracing::warn!("[Pipeline] Could not read {}: {}", file_name, e);
            e
        })?;
        let report = self.run_batch(&table, column)?;
        Ok((table, report))
    }
}
