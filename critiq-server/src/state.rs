use std::sync::Arc;

use critiq_core::ReviewService;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReviewService>,
}

impl AppState {
    pub fn new(service: Arc<ReviewService>) -> Self {
        Self { service }
    }
}
