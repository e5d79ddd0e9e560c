// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::fallback::FallbackReplies;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub metrics: MetricsManager,
    pub fallback: FallbackReplies,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            metrics: MetricsManager::new(),
            fallback: FallbackReplies::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackReplies) -> Self {
        self.fallback = fallback;
        self
    }
}
