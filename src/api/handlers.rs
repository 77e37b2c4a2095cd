use axum::{extract::State, Json};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::model::Report;

/// `GET /api/user-report`
///
/// Builds a fresh report for a random person. Responds 500 with
/// `{"error": "Failed to fetch data"}` when no person could be fetched; every other
/// provider failure is already folded into the report.
pub async fn user_report_handler(State(state): State<AppState>) -> Result<Json<Report>, ApiError> {
    let report = state.builder.build_report().await?;
    Ok(Json(report))
}
