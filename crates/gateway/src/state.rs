//! Application state for dependency injection.

use std::sync::Arc;

use crate::clients::ContentApi;
use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentApi>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(content: Arc<dyn ContentApi>, config: GatewayConfig) -> Self {
        Self { content, config }
    }
}
