//! HTTP API for IdolForge.
//!
//! # Routes
//!
//! - `POST /api/generate`: generate a persona, posts and optional extras
//! - `GET  /api/health`: liveness probe

pub mod body;
pub mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use idolforge_collab::Forge;
use idolforge_core::GenerateRequest;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::body::GenerateBody;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub forge: Arc<Forge>,
}

impl AppState {
    pub fn new(forge: Forge) -> Self {
        Self {
            forge: Arc::new(forge),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(forge: Forge, addr: SocketAddr) -> std::io::Result<()> {
    let availability = forge.availability();
    let app = app_router(AppState::new(forge));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, ?availability, "IdolForge API listening");
    if !availability.any() {
        warn!("no collaborator keys set; images will be placeholders");
    }
    axum::serve(listener, app).await
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "IdolForge API is running",
    }))
}

async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let request = GenerateRequest::from(body);
    let result = state.forge.create_influencer(&request).await?;

    Ok(Json(json!({
        "success": true,
        "data": result,
    })))
}
