//! AQI Prediction Service - Backend Server
//!
//! Classifies pollutant readings into an Air Quality Index category using
//! pre-trained models hosted on model-serving endpoints, and returns the
//! badge color, health advisory and an optional numeric AQI estimate.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use services::ModelRegistry;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ModelRegistry>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqi_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AQI Prediction Server");
    tracing::info!("Environment: {}", config.environment);

    // Missing mandatory artifacts abort startup here
    tracing::info!(
        "Loading model artifacts from {}",
        config.models.artifact_dir.display()
    );
    let registry = ModelRegistry::load(&config.models)?;

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        registry: Arc::new(registry),
    };

    tracing::info!(
        "Numeric AQI estimate: {:?}",
        state.registry.estimator().state()
    );

    // Build application
    let app = create_app(state);

    // Start server
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AQI Prediction API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
