//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::infrastructure::repositories::InMemoryBookRepository;
use crate::presentation::http::routes;
use crate::presentation::middleware::logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The book collection. Starts empty and lives as long as the process.
    pub books: Arc<InMemoryBookRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State with an empty book collection
    pub fn new(settings: Settings) -> Self {
        Self {
            books: Arc::new(InMemoryBookRepository::new()),
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with all middleware attached
pub fn build_router(state: AppState) -> Router {
    routes::create_router(state).layer(logging::create_trace_layer())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let addr = settings.server.socket_addr()?;

        let state = AppState::new(settings);
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolve on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
