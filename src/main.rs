//! # Bookshelf
//!
//! In-memory book catalog service.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - HTTP server

use anyhow::Result;
use tracing::info;

use bookshelf::config::Settings;
use bookshelf::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings come first so the log format can be configured
    let settings = Settings::load()?;

    bookshelf::telemetry::init_tracing(&settings.log);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
