//! Configuration module
//!
//! Handles CLI configuration including backend URL, polling interval, and
//! confirmation behavior.

use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the download backend
    pub backend_url: String,

    /// How often the watch view re-fetches the job list
    pub poll_interval: Duration,

    /// Skip confirmation prompts for destructive actions
    pub assume_yes: bool,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.is_empty() {
            anyhow::bail!("backend_url cannot be empty");
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            anyhow::bail!("backend_url must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll interval must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            poll_interval: Duration::from_secs(5),
            assume_yes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.backend_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "http://localhost:8000".to_string();
        config.poll_interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
