use rand::Rng;
use serde_json::Value;

use crate::message::{PredictionResult, SentimentScores};
use crate::services::json_preview;

pub const SENTIMENTS: [&str; 3] = ["positive", "negative", "neutral"];
pub const CATEGORIES: [&str; 3] = ["category_a", "category_b", "category_c"];

pub const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    SentimentAnalysis,
    Classification,
    General,
}

impl ModelType {
    /// Unrecognised names fall back to `General`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "sentiment-analysis" => ModelType::SentimentAnalysis,
            "classification" => ModelType::Classification,
            _ => ModelType::General,
        }
    }

    /// Non-string values (`null`, numbers, ...) select `General`.
    pub fn from_json(raw: &Value) -> Self {
        raw.as_str().map(Self::parse).unwrap_or(ModelType::General)
    }
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

pub fn predict<R: Rng>(
    model_type: ModelType,
    input_data: &Value,
    rng: &mut R,
) -> Result<PredictionResult, serde_json::Error> {
    let result = match model_type {
        ModelType::SentimentAnalysis => PredictionResult::Sentiment {
            sentiment: pick(rng, &SENTIMENTS).to_string(),
            // Independent draws; they are not meant to sum to one.
            scores: SentimentScores {
                positive: rng.random_range(0.0..1.0),
                negative: rng.random_range(0.0..1.0),
                neutral: rng.random_range(0.0..1.0),
            },
        },
        ModelType::Classification => PredictionResult::Classification {
            category: pick(rng, &CATEGORIES).to_string(),
            confidence: rng.random_range(0.5..0.99),
        },
        ModelType::General => PredictionResult::General {
            prediction: format!(
                "Processed input: {}...",
                json_preview::preview(input_data, PREVIEW_CHARS)?
            ),
            value: rng.random_range(0.0..100.0),
        },
    };
    Ok(result)
}

/// Top-level score reported alongside every prediction, whatever the branch.
pub fn confidence_score<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0.6..0.95)
}
