use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::utils::error::ReportError;

/// Message the browser client receives whenever a report cannot be built.
pub const REPORT_FAILED_MESSAGE: &str = "Failed to fetch data";

/// API-layer error type
#[derive(Debug)]
pub enum ApiError {
    /// 500 - the report subject could not be fetched
    ReportFailed(ReportError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ReportFailed(err) => {
                tracing::error!(
                    upstream = err.is_upstream(),
                    "❌ Error fetching data: {}",
                    err
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: REPORT_FAILED_MESSAGE,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        ApiError::ReportFailed(err)
    }
}
