use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Path of the flash briefing endpoint, parameterized by briefing id.
/// Kept stable for diagnostics and client compatibility.
pub const FLASH_BRIEFINGS_API_ENDPOINT: &str = "/api/alexa/flash_briefings/:briefing_id";

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Flash briefing feed (password-checked in the handler, not by
        // framework auth middleware)
        .route(FLASH_BRIEFINGS_API_ENDPOINT, get(handlers::flash_briefing))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
