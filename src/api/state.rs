use crate::core::report::ReportBuilder;

/// Shared state for all handlers. Read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    pub builder: ReportBuilder,
}

impl AppState {
    pub fn new(builder: ReportBuilder) -> Self {
        Self { builder }
    }
}
