// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CHAT_MODEL_NAME: &str = "demo-ai-model";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const DEFAULT_MODEL_TYPE: &str = "general";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Kept as raw JSON so falsy non-strings (`0`, `false`, `[]`) can be told
    /// apart from wrongly typed content.
    #[serde(default)]
    pub message: Option<Value>,
    /// Accepted for client compatibility; the reply logic never reads it.
    #[serde(default)]
    pub conversation_history: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
    pub model: String,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

fn default_model_type() -> Value {
    Value::String(DEFAULT_MODEL_TYPE.to_string())
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    // An explicit `null` stays `null`; only an absent field becomes `{}`.
    #[serde(default = "empty_object")]
    pub input_data: Value,
    // Any JSON is accepted and echoed back; only the two known strings select
    // a dedicated branch.
    #[serde(default = "default_model_type")]
    pub model_type: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionResult {
    Sentiment {
        sentiment: String,
        scores: SentimentScores,
    },
    Classification {
        category: String,
        confidence: f64,
    },
    General {
        prediction: String,
        value: f64,
    },
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction_result: PredictionResult,
    pub confidence_score: f64,
    pub model_type: Value,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelDescriptor>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
