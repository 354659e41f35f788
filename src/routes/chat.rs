use axum::{Json, extract::State};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::AppError,
    message::{CHAT_MODEL_NAME, ChatRequest, ChatResponse},
    routes::{extract::ApiJson, iso_timestamp, local_now},
    services::chatbot::{detect_intent, generate_reply},
    state::SharedState,
};

pub const MESSAGE_REQUIRED: &str = "Message is required";

pub async fn chat_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    // Whitespace counts as content; only a missing or falsy message is refused.
    let message = match &payload.message {
        Some(Value::String(m)) if !m.is_empty() => m.as_str(),
        Some(v) if !is_falsy(v) => {
            return Err(AppError::Internal("message must be a string".to_string()));
        }
        _ => return Err(AppError::BadRequest(MESSAGE_REQUIRED.to_string())),
    };

    if let Some(Value::Array(history)) = &payload.conversation_history {
        debug!(entries = history.len(), "conversation history supplied");
    }

    // Simulated processing latency. Only this request's task waits.
    if !state.chat_delay.is_zero() {
        tokio::time::sleep(state.chat_delay).await;
    }

    let intent = detect_intent(message);
    let now = local_now();
    let reply = state.rng.with_rng(|rng| generate_reply(message, now, rng))?;

    info!(intent = intent.as_str(), "chat reply generated");

    Ok(Json(ChatResponse {
        response: reply,
        timestamp: iso_timestamp(now),
        model: CHAT_MODEL_NAME.to_string(),
    }))
}

/// `null`, `false`, zero, `""`, `[]` and `{}`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
