//! SentinelView Dashboard Server
//!
//! Backend for the security-monitoring dashboard: serves mock traffic logs
//! and intrusion alerts per opened view, and forwards anomaly explanation and
//! intrusion summarization requests to an external text-generation service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SENTINELVIEW SERVER                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────────┐  ┌─────────────────────┐ │
//! │  │  API      │  │  View Store   │  │  AI Adapters        │ │
//! │  │  (Axum)   │──│  (per page)   │  │  summary / explain  │ │
//! │  └─────┬─────┘  └───────┬───────┘  └──────────┬──────────┘ │
//! │        │          ┌─────┴──────┐              │            │
//! │        └─────────▶│ Query Layer│              ▼            │
//! │                   │ filter/page│       ┌─────────────┐     │
//! │                   └─────┬──────┘       │ LLM Service │     │
//! │                   ┌─────┴──────┐       └─────────────┘     │
//! │                   │ DataSource │                           │
//! │                   │  (mock)    │                           │
//! │                   └────────────┘                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod ai;
mod config;
mod error;
mod handlers;
mod models;
mod query;
mod source;
mod views;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub use error::{AppError, AppResult};

use ai::{AnomalyExplainer, GeminiClient, GeminiConfig, IntrusionSummarizer, TextGenerator};
use source::{DataSource, MockDataSource};
use views::ViewStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    init_tracing(&config);

    tracing::info!("SentinelView server starting ({})...", config.environment);

    let generator = GeminiClient::new(GeminiConfig::from(&config))
        .context("Failed to create text-generation client")?;
    if generator.is_configured() {
        tracing::info!("Text generation: {} via {}", config.llm_model, config.llm_api_url);
    } else {
        tracing::warn!("No LLM API key configured, AI summary and anomaly analysis will fail");
    }

    // Build application state
    let state = AppState::new(
        config.clone(),
        Arc::new(MockDataSource::new()),
        Arc::new(generator),
    );

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await
        .context("Server error")?;

    Ok(())
}

fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sentinel_view=debug,tower_http=debug".into());

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub views: Arc<ViewStore>,
    pub source: Arc<dyn DataSource>,
    pub summarizer: IntrusionSummarizer,
    pub explainer: AnomalyExplainer,
}

impl AppState {
    pub fn new(
        config: config::Config,
        source: Arc<dyn DataSource>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let views = ViewStore::new(Duration::from_secs(config.view_ttl_secs), config.max_views);

        Self {
            views: Arc::new(views),
            source,
            summarizer: IntrusionSummarizer::new(generator.clone()),
            explainer: AnomalyExplainer::new(generator),
            config,
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let view_routes = Router::new()
        // Views
        .route("/api/v1/views", post(handlers::views::open))
        .route("/api/v1/views/:id", get(handlers::views::get).delete(handlers::views::close))
        .route("/api/v1/views/:id/stats", get(handlers::views::stats))

        // Records
        .route("/api/v1/views/:id/traffic", get(handlers::traffic::list))
        .route("/api/v1/views/:id/traffic/protocols", get(handlers::traffic::protocols))
        .route("/api/v1/views/:id/alerts", get(handlers::alerts::list))

        // AI
        .route(
            "/api/v1/views/:id/summary",
            post(handlers::ai::summarize).get(handlers::ai::latest_summary),
        )
        .route(
            "/api/v1/views/:id/explain",
            post(handlers::ai::explain).get(handlers::ai::latest_explanation),
        );

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(view_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
