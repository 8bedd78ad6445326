//! Server configuration module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Externally visible URL path prefix, empty when the service is not
    /// mounted behind a prefix-stripping ingress
    pub route_prefix: String,

    /// Maximum request body size in bytes
    pub max_request_size: usize,

    /// Maximum number of records accepted in one batch
    pub max_batch_size: usize,

    /// Maximum number of documents processed concurrently per request
    pub max_concurrency: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            route_prefix: String::new(),
            max_request_size: 16 * 1024 * 1024, // 16MB
            max_batch_size: 1000,
            max_concurrency: 8,
        }
    }
}

impl ServerConfig {
    /// Load configuration from CLI arguments and environment variables.
    /// CLI arguments take precedence over environment variables.
    pub fn from_cli_and_env(cli_args: crate::cli::CliArgs) -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = cli_args.port {
            config.port = port;
        } else if let Ok(port) = env::var("MENTIO_PORT") {
            config.port = port.parse()?;
        }

        if let Some(prefix) = cli_args.route_prefix {
            config.route_prefix = prefix;
        } else if let Ok(prefix) = env::var("MENTIO_ROUTE_PREFIX") {
            config.route_prefix = prefix;
        } else if let Ok(prefix) = env::var("CLUSTER_ROUTE_PREFIX") {
            // Name the hosting platform sets when mounting the skill
            config.route_prefix = prefix;
        }
        config.route_prefix = normalize_prefix(&config.route_prefix);

        if let Some(max_size) = cli_args.max_request_size {
            config.max_request_size = max_size;
        } else if let Ok(max_size) = env::var("MENTIO_MAX_REQUEST_SIZE") {
            config.max_request_size = max_size.parse()?;
        }

        if let Some(max_batch) = cli_args.max_batch_size {
            config.max_batch_size = max_batch;
        } else if let Ok(max_batch) = env::var("MENTIO_MAX_BATCH_SIZE") {
            config.max_batch_size = max_batch.parse()?;
        }

        if let Some(concurrency) = cli_args.max_concurrency {
            config.max_concurrency = concurrency;
        } else if let Ok(concurrency) = env::var("MENTIO_MAX_CONCURRENCY") {
            config.max_concurrency = concurrency.parse()?;
        }

        Ok(config)
    }
}

/// Trim trailing slashes so prefix joining never produces `//docs`.
fn normalize_prefix(prefix: &str) -> String {
    prefix.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_normalization_trims_trailing_slashes() {
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("/api/ner"), "/api/ner");
        assert_eq!(normalize_prefix("/api/ner/"), "/api/ner");
        assert_eq!(normalize_prefix("/api/ner//"), "/api/ner");
    }

    #[test]
    fn defaults_are_sensible() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert!(config.route_prefix.is_empty());
        assert!(config.max_batch_size > 0);
        assert!(config.max_concurrency > 0);
    }
}
