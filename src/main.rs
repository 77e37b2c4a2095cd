use anyhow::Context;
use clap::Parser;
use user_report::utils::{logger, validation::Validate};
use user_report::{app_router, report_builder_from_config, AppState, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is normal outside local development
    let dotenv = dotenvy::dotenv();

    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_logger(config.verbose);
    }

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    tracing::info!("Starting user-report server");
    if config.verbose {
        tracing::debug!(
            "CLI config: host={} port={} static_dir={}",
            config.host,
            config.port,
            config.static_dir.display()
        );
    }

    config.validate().context("invalid server configuration")?;
    let app_config = config.resolve().context("invalid provider configuration")?;
    tracing::debug!("Resolved config: {:?}", app_config);

    let builder =
        report_builder_from_config(&app_config).context("failed to build HTTP client")?;
    let app = app_router(AppState::new(builder), &config.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
