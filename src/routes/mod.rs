// src/routes/mod.rs
pub mod chat;
pub mod extract;
pub mod predict;
pub mod system;

use crate::{error::AppError, state::SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use chrono::{Local, NaiveDateTime, Timelike};
use predict::predict_handler;
use system::{health_handler, list_models_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const ENDPOINTS: [(&str, &str, &str); 4] = [
    ("POST", "/api/chat", "Chat with AI"),
    ("POST", "/api/predict", "Make predictions"),
    ("GET", "/api/models", "Get available models"),
    ("GET", "/api/health", "Health check"),
];

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/predict", post(predict_handler))
        .route("/api/models", get(list_models_handler))
        .route("/api/health", get(health_handler))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Router with state attached and CORS opened to every origin.
pub fn build_app(state: SharedState) -> Router {
    create_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `2024-05-01T13:45:09.123456`, or `2024-05-01T13:45:09` on a whole second.
pub fn iso_timestamp(at: NaiveDateTime) -> String {
    if at.nanosecond() / 1_000 == 0 {
        at.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
