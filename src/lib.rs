//! # social
//!
//! A small social network API served over GraphQL: users with their posts,
//! followers (`abonnes`) and followings (`abonnement`); posts that can be
//! liked and commented on.
//!
//! ## Features
//!
//! - **Explicit store**: an injectable [`SocialService`](core::SocialService)
//!   with an in-memory implementation, so tests build isolated instances
//! - **Read-only reads**: relations are stored as id lists and resolved per
//!   request, never written back
//! - **Atomic writes**: each operation runs under one lock acquisition
//! - **YAML configuration** with defaults for every field
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use social::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_service(InMemorySocialService::seeded())
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Comment, ConfigError, Post, SocialError, SocialResult, SocialService, StorageError, User,
    };

    // === Storage ===
    pub use crate::storage::InMemorySocialService;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::exposure::graphql::{SocialSchema, build_schema};
    pub use crate::server::{GraphQLExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use async_trait::async_trait;
}
