//! Client configuration.

use serde::Deserialize;

fn default_timeout_secs() -> u64 {
    10
}

/// Connection settings for the blocked-agenda endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the reclamos backend, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_absent() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url": "https://api.example.com"}"#).unwrap();
        assert_eq!(config.timeout_secs, 10);

        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url": "https://api.example.com", "timeout_secs": 3}"#)
                .unwrap();
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn builder_overrides_timeout() {
        let config = ApiConfig::new("https://api.example.com").with_timeout_secs(5);
        assert_eq!(config.timeout_secs, 5);
    }
}
