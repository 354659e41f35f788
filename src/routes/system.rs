use axum::Json;

use crate::{
    message::{HealthStatus, ModelsResponse, SERVICE_VERSION},
    routes::{iso_timestamp, local_now},
    services::catalog::available_models,
};

pub async fn list_models_handler() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: available_models(),
    })
}

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: iso_timestamp(local_now()),
        version: SERVICE_VERSION,
    })
}
