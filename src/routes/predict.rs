use axum::{Json, extract::State};
use tracing::{debug, info};

use crate::{
    error::AppError,
    message::{PredictRequest, PredictResponse},
    routes::{extract::ApiJson, iso_timestamp, local_now},
    services::predictor::{self, ModelType},
    state::SharedState,
};

pub async fn predict_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let model_type = ModelType::from_json(&payload.model_type);
    debug!(requested = %payload.model_type, resolved = ?model_type, "prediction requested");

    let (prediction_result, confidence_score) = state
        .rng
        .with_rng(|rng| {
            let result = predictor::predict(model_type, &payload.input_data, rng)?;
            Ok::<_, serde_json::Error>((result, predictor::confidence_score(rng)))
        })?
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!(model_type = %payload.model_type, confidence_score, "prediction generated");

    Ok(Json(PredictResponse {
        prediction_result,
        confidence_score,
        model_type: payload.model_type,
        timestamp: iso_timestamp(local_now()),
    }))
}
