//! API layer - HTTP entry points.

pub mod http;
pub mod response;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Full router with application state and request tracing attached.
pub fn router(app: Arc<App>) -> Router {
    http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}
