//! Core module containing the records, service trait and error types

pub mod entity;
pub mod error;
pub mod service;

pub use entity::{Comment, Post, User};
pub use error::{ConfigError, SocialError, SocialResult, StorageError};
pub use service::SocialService;
