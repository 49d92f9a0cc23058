//! Application state for Axum handlers.

use roster_service::UserService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
