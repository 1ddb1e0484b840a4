//! Application state for the web layer.

use std::sync::Arc;

use crate::service::RailService;

/// Shared application state.
pub struct AppState<S> {
    /// Rail operations over the configured upstream
    pub rail: Arc<RailService<S>>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(rail: RailService<S>) -> Self {
        Self {
            rail: Arc::new(rail),
        }
    }
}

// Not derived: the upstream itself need not be Clone.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            rail: Arc::clone(&self.rail),
        }
    }
}
