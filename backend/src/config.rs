//! Configuration management for the Table Water Management System
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with TWM_ prefix
//!
//! The managed-backend connection parameters have no defaults: when they
//! are missing the server refuses to start and prints [`SETUP_HELP`]
//! instead of attempting degraded operation.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Session token configuration
    pub session: SessionConfig,

    /// Managed backend connection parameters
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Secret key for signing session tokens
    pub token_secret: String,

    /// Session token expiration in seconds
    pub token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Managed backend endpoint URL (required, no default)
    pub url: String,

    /// Managed backend access key (required, no default)
    pub access_key: String,
}

/// Printed when configuration loading fails at startup.
pub const SETUP_HELP: &str = r#"
Backend configuration required
==============================

The server cannot reach its managed backend without connection
parameters. To set them up:

  1. Create a backend project and copy its endpoint URL and access key
     from the project settings.
  2. Create a .env file in the repository root containing:

       TWM__BACKEND__URL=your_backend_endpoint_url
       TWM__BACKEND__ACCESS_KEY=your_backend_access_key

  3. Restart the server.

A config/{environment}.toml file with a [backend] section works as well.
"#;

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("TWM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("session.token_secret", "development-secret-key")?
            .set_default("session.token_expiry", 3600)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (TWM_ prefix)
            .add_source(
                Environment::with_prefix("TWM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
