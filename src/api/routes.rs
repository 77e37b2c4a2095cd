//! Router for the report service.
//!
//! - `GET /api/user-report` - composite report as JSON
//! - everything else        - static front end (`index.html` for `/`)

use crate::api::handlers::user_report_handler;
use crate::api::state::AppState;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/user-report", get(user_report_handler))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
