//! ServerBuilder for fluent API to build the HTTP server

use super::exposure::GraphQLExposure;
use super::host::ServerHost;
use crate::config::ServerConfig;
use crate::core::error::SocialResult;
use crate::core::service::SocialService;
use crate::storage::InMemorySocialService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the GraphQL server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::load_or_default("social.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    service: Option<Arc<dyn SocialService>>,
    config: ServerConfig,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            service: None,
            config: ServerConfig::default(),
        }
    }

    /// Use a specific service instead of the in-memory default
    pub fn with_service(mut self, service: impl SocialService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the transport-agnostic host
    ///
    /// Without an explicit service, an in-memory store is created, seeded
    /// when the configuration asks for it.
    pub fn build_host(self) -> ServerHost {
        let service: Arc<dyn SocialService> = match self.service {
            Some(service) => service,
            None if self.config.seed => Arc::new(InMemorySocialService::seeded()),
            None => Arc::new(InMemorySocialService::new()),
        };

        ServerHost::new(service, self.config)
    }

    /// Build the final router, with request tracing
    pub fn build(self) -> SocialResult<Router> {
        let host = Arc::new(self.build_host());
        let router = GraphQLExposure::build_router(host)?;
        Ok(router.layer(TraceLayer::new_for_http()))
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let path = self.config.graphql_path.clone();
        let app = self.build()?;

        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("GraphQL server listening on http://{}{}", addr, path);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
