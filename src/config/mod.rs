//! Configuration loading and management

use crate::core::error::{ConfigError, SocialResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

fn default_true() -> bool {
    true
}

/// Server configuration
///
/// Every field has a default, so an empty document is a valid configuration.
///
/// ```yaml
/// host: 0.0.0.0
/// port: 4000
/// graphql_path: /graphql
/// graphiql: true
/// seed: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the GraphQL endpoint
    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,

    /// Serve the GraphiQL explorer on `GET` of the GraphQL path
    #[serde(default = "default_true")]
    pub graphiql: bool,

    /// Load the seed fixtures into the store at startup
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphql_path: default_graphql_path(),
            graphiql: true,
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> SocialResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                file: Some(path.display().to_string()),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> SocialResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise use the defaults
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> SocialResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_yaml_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                value: self.port.to_string(),
                message: "must be non-zero".to_string(),
            });
        }

        if !self.graphql_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "graphql_path".to_string(),
                value: self.graphql_path.clone(),
                message: "must start with '/'".to_string(),
            });
        }

        Ok(())
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SocialError;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_address(), "127.0.0.1:4000");
        assert_eq!(config.graphql_path, "/graphql");
        assert!(config.graphiql);
        assert!(config.seed);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ServerConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = ServerConfig::from_yaml_str("port: 8080\ngraphiql: false\n").unwrap();

        assert_eq!(config.port, 8080);
        assert!(!config.graphiql);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_yaml_serialization() {
        let config = ServerConfig {
            seed: false,
            ..ServerConfig::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = ServerConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_path_rejected() {
        let err = ServerConfig::from_yaml_str("graphql_path: graphql").unwrap_err();
        assert!(matches!(
            err,
            SocialError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "graphql_path"
        ));
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = ServerConfig::from_yaml_str("port: 0").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host: 0.0.0.0\nport: 5000").unwrap();

        let config = ServerConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_from_yaml_file_parse_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: [nope").unwrap();

        let err = ServerConfig::from_yaml_file(file.path()).unwrap_err();
        match err {
            SocialError::Config(ConfigError::ParseError { file: Some(f), .. }) => {
                assert_eq!(f, file.path().display().to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("social.yaml");

        let err = ServerConfig::from_yaml_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_FILE_NOT_FOUND");

        let config = ServerConfig::load_or_default(&path).unwrap();
        assert_eq!(config, ServerConfig::default());
    }
}
