//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the BOTR client.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration settings for the BOTR client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API endpoint and credentials
    pub api: ApiSettings,
    /// Default upload endpoint, used when a link omits it
    pub upload: UploadSettings,
    /// Transport configuration
    pub network: NetworkSettings,
}

/// API endpoint and credential configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// `http` or `https`
    pub protocol: String,
    /// API host, optionally with a port
    pub server: String,
    /// API version path segment
    pub version: String,
    /// Response format requested from the API
    pub format: String,
    /// API key
    pub key: Option<String>,
    /// Shared secret used for request signatures
    pub secret: Option<String>,
}

/// Upload endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// `http` or `https`
    pub protocol: String,
    /// Upload host, optionally with a port
    pub address: String,
}

/// Transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
    /// HTTPS proxy URL
    pub https_proxy: Option<String>,
    /// HTTP proxy URL
    pub http_proxy: Option<String>,
    /// Catch-all proxy URL
    pub all_proxy: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            protocol: "https".to_string(),
            server: "api.bitsontherun.com".to_string(),
            version: "v1".to_string(),
            format: "json".to_string(),
            key: None,
            secret: None,
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            address: "upload.bitsontherun.com".to_string(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("botr-rs/{}", crate::utils::VERSION),
            https_proxy: None,
            http_proxy: None,
            all_proxy: None,
        }
    }
}

impl ApiSettings {
    /// Key and secret, or a configuration error when either is missing or blank.
    pub fn credentials(&self) -> crate::Result<(&str, &str)> {
        let key = self
            .key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| crate::Error::config("API key is not set"))?;
        let secret = self
            .secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| crate::Error::config("API secret is not set"))?;
        Ok((key, secret))
    }
}

impl NetworkSettings {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create default settings with the given credentials
    pub fn with_credentials(key: impl Into<String>, secret: impl Into<String>) -> Self {
        let mut settings = Self::default();
        settings.api.key = Some(key.into());
        settings.api.secret = Some(secret.into());
        settings
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from a TOML file; missing sections keep their defaults
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment variable overrides on top of these settings
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(key) = std::env::var("BOTR_API_KEY") {
            self.api.key = Some(key);
        }

        if let Ok(secret) = std::env::var("BOTR_API_SECRET") {
            self.api.secret = Some(secret);
        }

        if let Ok(server) = std::env::var("BOTR_API_SERVER") {
            self.api.server = server;
        }

        if let Ok(protocol) = std::env::var("BOTR_API_PROTOCOL") {
            self.api.protocol = protocol;
        }

        if let Ok(timeout) = std::env::var("BOTR_TIMEOUT") {
            self.network.timeout_secs = timeout
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid timeout: {}", e)))?;
        }

        // Load proxy settings from environment
        for (var, slot) in [
            ("HTTPS_PROXY", &mut self.network.https_proxy),
            ("HTTP_PROXY", &mut self.network.http_proxy),
            ("ALL_PROXY", &mut self.network.all_proxy),
        ] {
            if let Ok(value) = std::env::var(var).or_else(|_| std::env::var(var.to_lowercase()))
                && !value.is_empty()
            {
                *slot = Some(value);
            }
        }

        Ok(self)
    }

    /// Check that the endpoint settings are usable
    pub fn validate(&self) -> crate::Result<()> {
        for (name, protocol) in [
            ("api.protocol", &self.api.protocol),
            ("upload.protocol", &self.upload.protocol),
        ] {
            if protocol != "http" && protocol != "https" {
                return Err(crate::Error::config(format!(
                    "Invalid {}: {} (expected http or https)",
                    name, protocol
                )));
            }
        }

        if self.api.server.trim().is_empty() {
            return Err(crate::Error::config("api.server must not be empty"));
        }

        if self.upload.address.trim().is_empty() {
            return Err(crate::Error::config("upload.address must not be empty"));
        }

        if self.network.timeout_secs == 0 {
            return Err(crate::Error::config("network.timeout_secs must be positive"));
        }

        Ok(())
    }

    /// Proxy URL to use, preferring HTTPS over HTTP over ALL_PROXY
    pub fn get_proxy_url(&self) -> Option<&str> {
        self.network
            .https_proxy
            .as_deref()
            .or(self.network.http_proxy.as_deref())
            .or(self.network.all_proxy.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.protocol, "https");
        assert_eq!(settings.api.server, "api.bitsontherun.com");
        assert_eq!(settings.api.version, "v1");
        assert_eq!(settings.api.format, "json");
        assert_eq!(settings.upload.address, "upload.bitsontherun.com");
        assert_eq!(settings.network.timeout(), Duration::from_secs(30));
        assert!(settings.api.key.is_none());
    }

    #[test]
    fn test_settings_creation() {
        let settings = Settings::new();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_credentials() {
        let settings = Settings::with_credentials("XOqEAfxj", "uA96CFtJa138E2T5GhKfngml");
        let (key, secret) = settings.api.credentials().unwrap();
        assert_eq!(key, "XOqEAfxj");
        assert_eq!(secret, "uA96CFtJa138E2T5GhKfngml");
    }

    #[test]
    fn test_missing_credentials() {
        let settings = Settings::default();
        let err = settings.api.credentials().unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
        assert!(err.to_string().contains("API key"));

        let settings = Settings::with_credentials("key", "  ");
        let err = settings.api.credentials().unwrap_err();
        assert!(err.to_string().contains("API secret"));
    }

    #[test]
    fn test_validate_rejects_bad_protocol() {
        let mut settings = Settings::default();
        settings.api.protocol = "ftp".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("api.protocol"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.network.timeout_secs = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[api]
key = "abc"
        "#,
        )
        .unwrap();
        assert_eq!(settings.api.key.as_deref(), Some("abc"));
        assert_eq!(settings.api.server, "api.bitsontherun.com");
        assert_eq!(settings.upload.protocol, "http");
    }
}
