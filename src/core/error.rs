//! Typed error handling for the social API
//!
//! Absence is not an error here: a missing user or post resolves to `None`
//! (and `null` over GraphQL). The types below cover infrastructure failures
//! only.
//!
//! # Error Categories
//!
//! - [`StorageError`]: failures inside the in-memory store
//! - [`ConfigError`]: configuration loading and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get_user("0").await {
//!     Ok(Some(user)) => println!("Found: {}", user.name),
//!     Ok(None) => println!("No such user"),
//!     Err(SocialError::Storage(StorageError::LockPoisoned { store })) => {
//!         eprintln!("{} store is unusable", store);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// The main error type for the social API
#[derive(Debug, Error)]
pub enum SocialError {
    /// Store failures
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SocialError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SocialError::Storage(e) => e.error_code(),
            SocialError::Config(e) => e.error_code(),
            SocialError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Expose the error code to GraphQL clients as `extensions.code`
impl ErrorExtensions for SocialError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.error_code()))
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by the store
#[derive(Debug, Error)]
pub enum StorageError {
    /// A writer panicked while holding the lock
    #[error("The {store} store lock is poisoned")]
    LockPoisoned { store: &'static str },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::LockPoisoned { .. } => "STORAGE_LOCK_POISONED",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    Io { message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
        }
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for SocialError {
    fn from(err: serde_yaml::Error) -> Self {
        SocialError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for SocialError {
    fn from(err: std::io::Error) -> Self {
        SocialError::Config(ConfigError::Io {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for social API operations
pub type SocialResult<T> = Result<T, SocialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::LockPoisoned { store: "in-memory" };
        assert!(err.to_string().contains("in-memory"));
        assert_eq!(err.error_code(), "STORAGE_LOCK_POISONED");
    }

    #[test]
    fn test_social_error_conversion() {
        let err: SocialError = StorageError::LockPoisoned { store: "in-memory" }.into();
        assert_eq!(err.error_code(), "STORAGE_LOCK_POISONED");
        assert_eq!(err.to_string(), "The in-memory store lock is poisoned");
    }

    #[test]
    fn test_config_parse_error_display() {
        let err = ConfigError::ParseError {
            file: Some("social.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config file 'social.yaml': bad indent"
        );

        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u16>("[not, a, port]").unwrap_err();
        let err: SocialError = yaml_err.into();
        assert!(matches!(
            err,
            SocialError::Config(ConfigError::ParseError { file: None, .. })
        ));
    }

    #[test]
    fn test_graphql_extension_carries_code() {
        let err = SocialError::Internal("boom".to_string()).extend();
        let code = err
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(
            code,
            Some(async_graphql::Value::String("INTERNAL_ERROR".to_string()))
        );
    }
}
