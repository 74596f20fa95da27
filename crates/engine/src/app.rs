//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::MovieStore;

/// Main application state.
///
/// Holds the persistence gateway. Passed to HTTP handlers via Axum state.
pub struct App {
    pub movies: Arc<dyn MovieStore>,
}

impl App {
    pub fn new(movies: Arc<dyn MovieStore>) -> Self {
        Self { movies }
    }
}
