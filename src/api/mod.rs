//! REST API server for captext.
//!
//! Provides HTTP endpoints for:
//! - Transcript retrieval
//! - Service info, version and health

pub mod error;
pub mod routes;

use crate::config::ServerConfig;
use crate::transcript::TranscriptService;
use anyhow::{Context, Result};
use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use routes::transcript::{TranscriptRequest, TranscriptResponse};

pub struct ApiServer {
    host: String,
    port: u16,
    cors_enabled: bool,
    service: Arc<TranscriptService>,
}

impl ApiServer {
    pub fn new(config: &ServerConfig, service: Arc<TranscriptService>) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            cors_enabled: config.cors_enabled,
            service,
        }
    }

    pub async fn start(self) -> Result<()> {
        let app = router(self.service, self.cors_enabled);

        let address = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;

        info!("API server listening on http://{}", address);
        info!("Endpoints:");
        info!("  GET  /               - Service info");
        info!("  GET  /version        - Get version info");
        info!("  GET  /health         - Health check");
        info!("  POST /get_transcript - Fetch a video transcript");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the application router.
pub fn router(service: Arc<TranscriptService>, cors_enabled: bool) -> Router {
    let app = Router::new()
        .route("/", get(status))
        .route("/version", get(version))
        .route("/health", get(health))
        .merge(routes::transcript::router(service))
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        app.layer(cors_layer())
    } else {
        app
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .max_age(Duration::from_secs(3600))
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": "captext",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "captext"
    }))
}

async fn health() -> &'static str {
    "OK"
}
