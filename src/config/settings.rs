//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default remote API origin
pub const DEFAULT_API_URL: &str = "https://hsd-proje.onrender.com";

/// Default province lookup service
pub const DEFAULT_PROVINCES_URL: &str = "https://api.turkiyeapi.dev/v1";

/// Longest token lifetime accepted from configuration
pub const MAX_TOKEN_TTL_DAYS: u32 = 3650;

/// Storage key and cookie name of the bearer token
pub const TOKEN_KEY: &str = "access_token";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Remote API configuration
    pub api: ApiConfig,
    /// Token store configuration
    pub credentials: CredentialConfig,
    /// Gate server configuration
    pub server: ServerConfig,
    /// Route gate rules
    pub gate: GateConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base origin every endpoint is appended to
    pub base_url: String,
    /// Province lookup service base URL
    pub provinces_url: String,
    /// Request timeout in seconds, 0 disables it
    pub timeout: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

/// Token store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    /// Persistent store key and cookie name
    pub key: String,
    /// Lifetime of a stored token in days
    pub ttl_days: u32,
    /// Persistent store file; `None` uses the platform data directory
    pub store_path: Option<PathBuf>,
}

/// Gate server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Route gate rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Cookie whose presence means "authenticated"
    pub cookie_name: String,
    /// Prefix of the login/register pages
    pub auth_prefix: String,
    /// Where unauthenticated visitors are sent
    pub login_path: String,
    /// Where authenticated visitors of auth pages are sent
    pub home_path: String,
    /// Path prefixes (without the leading `/`) the gate never evaluates
    pub excluded_prefixes: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            provinces_url: DEFAULT_PROVINCES_URL.to_string(),
            timeout: 0,
            user_agent: format!("loopa-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            key: TOKEN_KEY.to_string(),
            ttl_days: 7,
            store_path: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            cookie_name: TOKEN_KEY.to_string(),
            auth_prefix: "/auth".to_string(),
            login_path: "/auth/login".to_string(),
            home_path: "/".to_string(),
            excluded_prefixes: ["api", "_next/static", "_next/image", "favicon.ico"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            credentials: CredentialConfig::default(),
            server: ServerConfig::default(),
            gate: GateConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let defaults = Settings::default();

        let settings = Self {
            api: ApiConfig {
                base_url: get_env_or_default("LOOPA_API_URL", &defaults.api.base_url)
                    .trim_end_matches('/')
                    .to_string(),
                provinces_url: get_env_or_default("PROVINCES_API_URL", &defaults.api.provinces_url)
                    .trim_end_matches('/')
                    .to_string(),
                timeout: get_env_or_default("REQUEST_TIMEOUT", "0")
                    .parse()
                    .context("Invalid request timeout")?,
                user_agent: defaults.api.user_agent,
            },
            credentials: CredentialConfig {
                key: defaults.credentials.key,
                ttl_days: get_env_or_default("TOKEN_TTL_DAYS", "7")
                    .parse()
                    .context("Invalid token TTL")?,
                store_path: std::env::var("TOKEN_STORE_PATH").ok().map(PathBuf::from),
            },
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", &defaults.server.host),
                port: get_env_or_default("SERVER_PORT", "3000")
                    .parse()
                    .context("Invalid port number")?,
            },
            gate: defaults.gate,
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Point the client at another API origin
    pub fn with_api_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Point the province lookup at another service
    pub fn with_provinces_url(mut self, url: impl Into<String>) -> Self {
        self.api.provinces_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if !self.api.base_url.starts_with("http") {
            anyhow::bail!("Invalid API base URL format, should start with 'http'");
        }

        if !self.api.provinces_url.starts_with("http") {
            anyhow::bail!("Invalid provinces URL format, should start with 'http'");
        }

        if self.credentials.ttl_days == 0 {
            anyhow::bail!("Token TTL cannot be 0 days");
        }

        if self.credentials.ttl_days > MAX_TOKEN_TTL_DAYS {
            anyhow::bail!(
                "Token TTL of {} days exceeds the maximum of {} days",
                self.credentials.ttl_days,
                MAX_TOKEN_TTL_DAYS
            );
        }

        if self.credentials.key.is_empty() || self.gate.cookie_name.is_empty() {
            anyhow::bail!("Token key and cookie name cannot be empty");
        }

        if !self.gate.auth_prefix.starts_with('/') || !self.gate.login_path.starts_with('/') {
            anyhow::bail!("Gate paths must start with '/'");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.api.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Location of the persistent token store file
    pub fn credential_store_path(&self) -> PathBuf {
        if let Some(path) = &self.credentials.store_path {
            return path.clone();
        }

        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("loopa")
            .join("credentials.json")
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.api.base_url, DEFAULT_API_URL);
        assert_eq!(settings.credentials.ttl_days, 7);
        assert!(settings.request_timeout().is_none());
    }

    #[test]
    fn test_with_api_url_trims_slash() {
        let settings = Settings::default().with_api_url("http://127.0.0.1:9000/");
        assert_eq!(settings.api.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_explicit_store_path() {
        let mut settings = Settings::default();
        settings.credentials.store_path = Some(PathBuf::from("/tmp/loopa.json"));
        assert_eq!(settings.credential_store_path(), PathBuf::from("/tmp/loopa.json"));
    }
}
