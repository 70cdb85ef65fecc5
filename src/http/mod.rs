//! HTTP surface of the flash briefing service
//!
//! One functional endpoint plus a health probe:
//! - GET /api/alexa/flash_briefings/:briefing_id - Serve a briefing feed
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::API_PASSWORD;
pub use routes::{create_router, FLASH_BRIEFINGS_API_ENDPOINT};
pub use state::AppState;
