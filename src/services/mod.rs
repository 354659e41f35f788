pub mod catalog;
pub mod chatbot;
pub mod json_preview;
pub mod predictor;
pub mod random_source;
