//! HTTP surface: single review, batch upload, CSV export.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::aggregator::{CategoryCounts, DistributionSlice, ReviewRecord};
use crate::classifier::SentimentCategory;
use crate::config::Settings;
use crate::error::AnalysisError;
use crate::export::{to_csv_string, DEFAULT_EXPORT_FILE_NAME};
use crate::pipeline::{Pipeline, SingleOutcome};
use crate::recommender::Recommendation;

pub struct AppState {
    pub pipeline: Pipeline,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let pipeline = Pipeline::lexicon().with_max_rows(settings.max_batch_rows);
        AppState { pipeline, settings }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze_review))
        .route("/analyze/batch", post(analyze_batch))
        .route("/analyze/batch/export", post(export_batch))
        .with_state(state)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// "classified" or "no_input"
    pub outcome: String,
    pub polarity: Option<f64>,
    /// Polarity rounded to two decimals
    pub polarity_display: Option<String>,
    pub category: Option<SentimentCategory>,
    pub message: String,
}

/// How `content` is carried in a [`BatchRequest`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentEncoding {
    /// UTF-8 text, for CSV
    #[default]
    Text,
    /// Standard base64, for binary workbooks
    Base64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchRequest {
    /// Used to detect the format (.csv, .xlsx, .xls)
    pub file_name: String,
    /// File content, encoded as `encoding` says
    pub content: String,
    #[serde(default)]
    pub encoding: ContentEncoding,
    /// Overrides the configured review column
    pub column: Option<String>,
}

impl BatchRequest {
    fn content_bytes(&self) -> Result<Cow<'_, [u8]>, AnalysisError> {
        match self.encoding {
            ContentEncoding::Text => Ok(Cow::Borrowed(self.content.as_bytes())),
            ContentEncoding::Base64 => STANDARD
                .decode(self.content.trim())
                .map(Cow::Owned)
                .map_err(|e| AnalysisError::unsupported(format!("content is not valid base64: {}", e))),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchResponse {
    pub batch_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub column: String,
    pub total: usize,
    pub records: Vec<ReviewRecord>,
    pub counts: CategoryCounts,
    pub distribution: Vec<DistributionSlice>,
    /// Absent when there is not enough data
    pub recommendation: Option<Recommendation>,
    pub insufficient_data: bool,
    pub advice: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// "missing_column", "unsupported_input", "too_many_rows" or "internal"
    pub error: String,
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(e: AnalysisError) -> ApiError {
    let (status, kind) = match &e {
        AnalysisError::MissingColumn { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "missing_column"),
        AnalysisError::UnsupportedInput { .. } => (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_input"),
        AnalysisError::TooManyRows { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "too_many_rows"),
        AnalysisError::Export(_) | AnalysisError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };
    tracing::warn!("[API] {}: {}", kind, e);
    (
        status,
        Json(ErrorResponse {
            error: kind.to_string(),
            message: e.to_string(),
        }),
    )
}

fn category_message(category: SentimentCategory) -> &'static str {
    match category {
        SentimentCategory::Positive => "Positive Sentiment 😊",
        SentimentCategory::Neutral => "Neutral Sentiment 😐",
        SentimentCategory::Negative => "Negative Sentiment 😟",
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "sentiment"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses((status = 200, description = "Classification or no-input notice", body = AnalyzeResponse)),
    tag = "sentiment"
)]
pub async fn analyze_review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let response = match state.pipeline.run_single(req.text.as_deref()) {
        SingleOutcome::Classified(record) => AnalyzeResponse {
            outcome: "classified".to_string(),
            polarity: Some(record.polarity),
            polarity_display: Some(format!("{:.2}", record.polarity)),
            category: Some(record.category),
            message: category_message(record.category).to_string(),
        },
        SingleOutcome::NoInput => AnalyzeResponse {
            outcome: "no_input".to_string(),
            polarity: None,
            polarity_display: None,
            category: None,
            message: "Please enter some text to analyze.".to_string(),
        },
    };
    Json(response)
}

#[utoipa::path(
    post,
    path = "/analyze/batch",
    request_body = BatchRequest,
    responses(
        (status = 200, description = "Per-review results, counts and investment suggestion", body = BatchResponse),
        (status = 413, description = "Too many rows", body = ErrorResponse),
        (status = 415, description = "File could not be read", body = ErrorResponse),
        (status = 422, description = "Review column missing", body = ErrorResponse)
    ),
    tag = "sentiment"
)]
pub async fn analyze_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let column = req
        .column
        .clone()
        .unwrap_or_else(|| state.settings.review_column.clone());
    let batch_id = Uuid::new_v4();
    tracing::info!("[API] Batch {} from '{}' (column '{}')", batch_id, req.file_name, column);

    let bytes = req.content_bytes().map_err(api_error)?;
    let (_, report) = state
        .pipeline
        .run_batch_source(&req.file_name, &bytes, &column)
        .map_err(api_error)?;

    let counts = report.result.counts;
    Ok(Json(BatchResponse {
        batch_id,
        analyzed_at: Utc::now(),
        column,
        total: counts.total(),
        distribution: counts.distribution(),
        records: report.result.records,
        counts,
        recommendation: report.verdict.recommendation(),
        insufficient_data: report.verdict.recommendation().is_none(),
        advice: report.verdict.advice().to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/analyze/batch/export",
    request_body = BatchRequest,
    responses(
        (status = 200, description = "Augmented CSV download", body = String, content_type = "text/csv"),
        (status = 413, description = "Too many rows", body = ErrorResponse),
        (status = 415, description = "File could not be read", body = ErrorResponse),
        (status = 422, description = "Review column missing", body = ErrorResponse)
    ),
    tag = "sentiment"
)]
pub async fn export_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> Result<Response, ApiError> {
    let column = req
        .column
        .clone()
        .unwrap_or_else(|| state.settings.review_column.clone());

    let bytes = req.content_bytes().map_err(api_error)?;
    let (table, report) = state
        .pipeline
        .run_batch_source(&req.file_name, &bytes, &column)
        .map_err(api_error)?;
    let csv = to_csv_string(&table, &report.result).map_err(api_error)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DEFAULT_EXPORT_FILE_NAME),
            ),
        ],
        csv,
    )
        .into_response())
}
