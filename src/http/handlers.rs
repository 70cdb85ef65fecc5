use super::state::AppState;
use crate::briefing::process_item;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::Value;
use subtle::ConstantTimeEq;
use tracing::{debug, error};

/// Query-string key carrying the caller-supplied password
pub const API_PASSWORD: &str = "api_password";

#[derive(Debug, Deserialize)]
pub struct BriefingQuery {
    pub api_password: Option<String>,
}

/// GET /api/alexa/flash_briefings/:briefing_id
///
/// Serves the configured briefing as a JSON array. The only failure modes are
/// 401 (missing or wrong password) and 404 (unknown briefing id), both with
/// an empty body.
pub async fn flash_briefing(
    State(state): State<AppState>,
    Path(briefing_id): Path<String>,
    Query(query): Query<BriefingQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    debug!("Received flash briefing request for: {}", briefing_id);

    if !validate_password(query.api_password.as_deref(), &state) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let Some(items) = state.flash_briefings.briefings.get(&briefing_id) else {
        error!("No configured flash briefing was found for: {}", briefing_id);
        return Err(StatusCode::NOT_FOUND);
    };

    let mut briefing = Vec::with_capacity(items.len());
    for item in items {
        let output = process_item(item, &state.templates).map_err(|e| {
            error!("Failed to process briefing item: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        // An empty record carries nothing worth serving; skip it.
        if !output.is_empty() {
            briefing.push(Value::Object(output));
        }
    }

    Ok(Json(briefing))
}

/// Compare the supplied password against configuration in constant time, so
/// the mismatch position is not observable through response timing.
fn validate_password(provided: Option<&str>, state: &AppState) -> bool {
    let Some(provided) = provided else {
        error!("No password provided for flash briefing request");
        return false;
    };

    let expected = state.flash_briefings.password.as_bytes();
    if !bool::from(provided.as_bytes().ct_eq(expected)) {
        error!("Wrong password for flash briefing request");
        return false;
    }

    true
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
