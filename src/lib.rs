//! Product review sentiment analysis.
//!
//! Scores review text for polarity, classifies it as Positive, Neutral or
//! Negative, aggregates batches into category counts and derives an
//! investment suggestion from the category ratios.
//!
//! ```no_run
//! use review_sentiment::{Pipeline, ReviewTable, SingleOutcome};
//!
//! let pipeline = Pipeline::lexicon();
//! if let SingleOutcome::Classified(record) = pipeline.run_single(Some("Great value, works perfectly")) {
//!     println!("{} ({:.2})", record.category, record.polarity);
//! }
//!
//! let table = ReviewTable::from_csv_str("review\nLove it\nBroke after a week\n").unwrap();
//! let report = pipeline.run_batch(&table, "review").unwrap();
//! println!("{}", report.verdict.advice());
//! ```

pub mod aggregator;
pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod polarity;
pub mod recommender;
pub mod table;

pub use aggregator::{aggregate, BatchResult, CategoryCounts, ReviewRecord};
pub use classifier::{classify, SentimentCategory};
pub use error::{AnalysisError, Result};
pub use pipeline::{BatchReport, Pipeline, SingleOutcome};
pub use polarity::{LexiconScorer, PolarityScorer};
pub use recommender::{recommend, Recommendation, Verdict};
pub use table::ReviewTable;
