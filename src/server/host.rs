//! Server host for transport-agnostic API exposure
//!
//! The host bundles the state every exposure needs: the social service and
//! the server configuration. It knows nothing about HTTP or GraphQL.

use crate::config::ServerConfig;
use crate::core::service::SocialService;
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(
///     Arc::new(InMemorySocialService::seeded()),
///     ServerConfig::default(),
/// ));
/// let app = GraphQLExposure::build_router(host)?;
/// ```
pub struct ServerHost {
    /// Store behind every resolver
    pub service: Arc<dyn SocialService>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerHost {
    pub fn new(service: Arc<dyn SocialService>, config: ServerConfig) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }
}
