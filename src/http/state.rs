use crate::config::FlashBriefingsConfig;
use minijinja::Environment;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Briefing definitions and password, immutable after load
    pub flash_briefings: Arc<FlashBriefingsConfig>,
    /// Template environment for rendering dynamic item fields
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(flash_briefings: FlashBriefingsConfig) -> Self {
        Self {
            flash_briefings: Arc::new(flash_briefings),
            templates: Arc::new(Environment::new()),
        }
    }
}
