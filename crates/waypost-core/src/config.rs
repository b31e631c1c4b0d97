use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::{DEFAULT_RPC_TIMEOUT_SECS, ENV_RPC_TIMEOUT_SECS, ENV_RPC_URL};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Base URL of the RPC bridge. `None` means no remote calls can be made.
    pub endpoint: Option<String>,
    pub request_timeout: Duration,
}

impl CoreConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// Build a config from `WAYPOST_RPC_URL` / `WAYPOST_RPC_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_RPC_URL) {
            let url = url.trim();
            if !url.is_empty() {
                config.endpoint = Some(url.trim_end_matches('/').to_string());
            }
        }

        if let Ok(secs) = std::env::var(ENV_RPC_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", ENV_RPC_TIMEOUT_SECS))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if endpoint.is_some() {
            self.endpoint = endpoint.map(|e| e.trim_end_matches('/').to_string());
        }
        self
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_endpoint_strips_trailing_slash() {
        let config = CoreConfig::default().with_endpoint(Some("http://localhost:8080/".into()));
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_with_endpoint_none_keeps_existing() {
        let config = CoreConfig::new("http://a").with_endpoint(None);
        assert_eq!(config.endpoint.as_deref(), Some("http://a"));
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS));
    }
}
