// src/services/random_source.rs
use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};

use rand::{SeedableRng, rngs::StdRng};

use crate::error::AppError;

/// Process-wide generator shared by the handlers.
///
/// Seeded from the OS by default; a fixed seed makes every draw reproducible.
#[derive(Clone)]
pub struct RandomSource {
    inner: Arc<Mutex<StdRng>>,
    seed: Option<u64>,
}

impl Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSource")
            .field("seed", &self.seed)
            .finish()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_os()
    }
}

impl RandomSource {
    pub fn from_os() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::from_os_rng())),
            seed: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
            seed: Some(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// The lock is synchronous: never call this across an `.await`.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AppError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| AppError::Internal("random source is unavailable".to_string()))?;
        Ok(f(&mut *guard))
    }
}
