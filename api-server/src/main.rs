//! Sentinel Scoring Server
//!
//! HTTP surface over the machine-health scoring core.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SENTINEL SERVER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────────┐  ┌─────────────────────┐ │
//! │  │  API      │  │  Scoring      │  │  Chat Forwarder     │ │
//! │  │  Gateway  │  │  Pipeline     │  │  (primary/fallback) │ │
//! │  │  (Axum)   │  │  (ONNX)       │  │                     │ │
//! │  └─────┬─────┘  └───────┬───────┘  └──────────┬──────────┘ │
//! │        └────────────────┼─────────────────────┘            │
//! │                         ▼                                  │
//! │             ┌───────────────────────┐                      │
//! │             │ Reference dataset CSV │                      │
//! │             └───────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod handlers;
mod error;


use std::net::SocketAddr;
use std::sync::Arc;

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

use sentinel_core::logic::assistant::ChatForwarder;
use sentinel_core::logic::baseline::{HistoryRecord, ReferenceData};
use sentinel_core::logic::features::LayoutInfo;
use sentinel_core::logic::model::{FeatureSchema, OnnxClassifier};
use sentinel_core::{CoreResult, ScoringError, ScoringPipeline};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "sentinel_server=debug,sentinel_core=info,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env();

    tracing::info!("Sentinel Server starting ({})...", config.environment);
    tracing::info!("Model: {}", config.model_path.display());

    // Classifier and schema are required; anything else degrades
    let state = match build_state(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize scoring core: {}", e);
            std::process::exit(1);
        }
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ScoringPipeline>,
    pub history: Arc<Vec<HistoryRecord>>,
    pub chat: Arc<ChatForwarder>,
    pub config: config::Config,
}

/// Load artifacts and reference data into the shared state.
fn build_state(config: config::Config) -> CoreResult<AppState> {
    let classifier = OnnxClassifier::load(&config.model_path)
        .map_err(|e| ScoringError::StartupFatal(e.to_string()))?;
    let schema = FeatureSchema::load(&config.features_path)?;
    let layout = LayoutInfo::current();
    tracing::info!(
        "Classifier loaded (sha256 {}, layout v{} hash {:08x}, schema hash {:08x})",
        classifier.metadata().checksum,
        layout.version,
        layout.hash,
        schema.hash()
    );

    let ReferenceData { stats, history } = ReferenceData::load_or_empty(&config.history_path);
    if stats.is_empty() {
        tracing::warn!("Feature importance disabled: no dataset statistics");
    }

    let chat = ChatForwarder::new(config.chat.clone())
        .map_err(|e| ScoringError::StartupFatal(e.to_string()))?;

    Ok(AppState {
        pipeline: Arc::new(ScoringPipeline::new(Arc::new(classifier), Arc::new(stats))),
        history: Arc::new(history),
        chat: Arc::new(chat),
        config,
    })
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/history", get(handlers::history::list))
        .route("/predict", post(handlers::predict::predict))
        .route("/chat", post(handlers::chat::chat))
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
