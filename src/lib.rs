pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::report_builder_from_config;
pub use api::{app_router, AppState};
pub use config::{AppConfig, CliConfig, Credentials, Endpoints};
pub use core::report::ReportBuilder;
pub use utils::error::{ReportError, Result};
