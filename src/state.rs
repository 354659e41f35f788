// src/state.rs
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::services::random_source::RandomSource;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub chat_delay: Duration,
    pub rng: RandomSource,
}

impl AppState {
    pub fn new(chat_delay: Duration, rng: RandomSource) -> Self {
        Self { chat_delay, rng }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.chat_delay, RandomSource::new(config.rng_seed))
    }
}
