//! Configuration management for critiq
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (CRITIQ_*)
//! 3. Config file (~/.config/critiq/config.toml)
//! 4. Default values
//!
//! The generator API key is not part of the configuration; see
//! [`crate::secrets`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub bind: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5002,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (per-user data directory when unset)
    pub path: Option<PathBuf>,
}

/// Review generator configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base URL of the chat-completions API
    pub base_url: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens in the generated review
    pub max_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "openai/gpt-4o".to_string(),
            temperature: 0.3,
            max_tokens: 800,
            timeout_secs: 60,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Review generator configuration
    pub generator: GeneratorConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/critiq/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("critiq").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - CRITIQ_BIND: Listener bind address
    /// - CRITIQ_PORT: Listener port
    /// - CRITIQ_DB_PATH: SQLite database file path
    /// - CRITIQ_MODEL: Generator model identifier
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(bind) = std::env::var("CRITIQ_BIND") {
            self.server.bind = bind;
        }

        if let Ok(port) = std::env::var("CRITIQ_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }

        if let Ok(db_path) = std::env::var("CRITIQ_DB_PATH") {
            self.database.path = Some(PathBuf::from(db_path));
        }

        if let Ok(model) = std::env::var("CRITIQ_MODEL") {
            self.generator.model = model;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        bind: Option<String>,
        port: Option<u16>,
        db_path: Option<PathBuf>,
        model: Option<String>,
    ) -> Self {
        if let Some(bind) = bind {
            self.server.bind = bind;
        }

        if let Some(port) = port {
            self.server.port = port;
        }

        if let Some(path) = db_path {
            self.database.path = Some(path);
        }

        if let Some(model) = model {
            self.generator.model = model;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        bind: Option<String>,
        port: Option<u16>,
        db_path: Option<PathBuf>,
        model: Option<String>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(bind, port, db_path, model))
    }
}
