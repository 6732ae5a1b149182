// src/web/mod.rs
// HTTP surface for the request handler
//
// - POST /generate-prompt - Generate a prompt from {topic, category}
// - GET  /health          - Liveness check

pub mod api;

use anyhow::Result;
use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::handler::RequestHandler;

/// Shared, immutable server state
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<RequestHandler>,
}

impl AppState {
    pub fn new(handler: RequestHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    // Any OPTIONS request is answered by the layer as an empty preflight
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/health", get(api::health))
        .route("/generate-prompt", post(api::generate_prompt))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server until it fails
pub async fn run(config: &ServerConfig, handler: RequestHandler) -> Result<()> {
    let app = create_router(AppState::new(handler));
    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("PromptForge listening on http://{}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
