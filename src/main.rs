use axum::Router;
use dotenv::dotenv;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use review_sentiment::api::{self, AppState};
use review_sentiment::config::Settings;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health,
        api::analyze_review,
        api::analyze_batch,
        api::export_batch
    ),
    components(
        schemas(
            api::HealthResponse,
            api::AnalyzeRequest,
            api::AnalyzeResponse,
            api::BatchRequest,
            api::ContentEncoding,
            api::BatchResponse,
            api::ErrorResponse,
            review_sentiment::aggregator::ReviewRecord,
            review_sentiment::aggregator::CategoryCounts,
            review_sentiment::aggregator::DistributionSlice,
            review_sentiment::classifier::SentimentCategory,
            review_sentiment::recommender::Recommendation
        )
    ),
    tags(
        (name = "sentiment", description = "Review Sentiment API")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    tracing::info!(
        "Review column '{}', batch limit {} rows",
        settings.review_column,
        settings.max_batch_rows
    );

    let static_dir = settings.static_dir.clone();
    let bind_addr = settings.bind_addr.clone();
    let state = Arc::new(AppState::new(settings));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::router(state))
        .fallback_service(ServeDir::new(static_dir)) // Serve Dashboard
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
