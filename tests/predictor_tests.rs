use ai_demo_backend::message::PredictionResult;
use ai_demo_backend::services::predictor::{
    CATEGORIES, ModelType, SENTIMENTS, confidence_score, predict,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

#[test]
fn test_model_type_parse() {
    assert_eq!(ModelType::parse("sentiment-analysis"), ModelType::SentimentAnalysis);
    assert_eq!(ModelType::parse("classification"), ModelType::Classification);
    assert_eq!(ModelType::parse("general"), ModelType::General);
    assert_eq!(ModelType::parse("text-generation"), ModelType::General);
    assert_eq!(ModelType::parse("Classification"), ModelType::General);
    assert_eq!(ModelType::parse(""), ModelType::General);
}

#[test]
fn test_model_type_from_json() {
    assert_eq!(ModelType::from_json(&json!("classification")), ModelType::Classification);
    assert_eq!(ModelType::from_json(&json!(null)), ModelType::General);
    assert_eq!(ModelType::from_json(&json!(5)), ModelType::General);
    assert_eq!(ModelType::from_json(&json!(["classification"])), ModelType::General);
}

#[test]
fn test_sentiment_result_shape_and_ranges() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        match predict(ModelType::SentimentAnalysis, &json!({}), &mut rng).unwrap() {
            PredictionResult::Sentiment { sentiment, scores } => {
                assert!(SENTIMENTS.contains(&sentiment.as_str()));
                for score in [scores.positive, scores.negative, scores.neutral] {
                    assert!((0.0..1.0).contains(&score));
                }
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

#[test]
fn test_sentiment_serializes_flat() {
    let mut rng = StdRng::seed_from_u64(3);
    let result = predict(ModelType::SentimentAnalysis, &json!({}), &mut rng).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert!(obj["sentiment"].is_string());
    let scores = obj["scores"].as_object().unwrap();
    let keys: Vec<&str> = scores.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["positive", "negative", "neutral"]);
}

#[test]
fn test_classification_ranges() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..200 {
        match predict(ModelType::Classification, &json!({}), &mut rng).unwrap() {
            PredictionResult::Classification { category, confidence } => {
                assert!(CATEGORIES.contains(&category.as_str()));
                assert!((0.5..0.99).contains(&confidence));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

#[test]
fn test_general_preview_is_truncated_to_fifty_chars() {
    let mut rng = StdRng::seed_from_u64(13);
    let input = json!({"text": "a fairly long piece of text that keeps going well past the limit"});

    match predict(ModelType::General, &input, &mut rng).unwrap() {
        PredictionResult::General { prediction, value } => {
            assert_eq!(
                prediction,
                r#"Processed input: {"text": "a fairly long piece of text that keeps g..."#
            );
            let preview = prediction
                .strip_prefix("Processed input: ")
                .and_then(|p| p.strip_suffix("..."))
                .unwrap();
            assert_eq!(preview.chars().count(), 50);
            assert!((0.0..100.0).contains(&value));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_general_preview_of_scalars() {
    let mut rng = StdRng::seed_from_u64(14);
    let result = predict(ModelType::General, &json!([1, "two", null]), &mut rng).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["prediction"], r#"Processed input: [1, "two", null]..."#);
}

#[test]
fn test_confidence_score_range() {
    let mut rng = StdRng::seed_from_u64(15);
    for _ in 0..1000 {
        let score = confidence_score(&mut rng);
        assert!((0.6..0.95).contains(&score));
    }
}
