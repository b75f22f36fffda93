//! PaperLens Configuration Management
//!
//! Handles configuration from environment variables and TOML config files
//! with sensible defaults for development.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Graph visualization styling
    pub graph: GraphStyleConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server
        if let Ok(host) = std::env::var("API_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("API_PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "API_PORT".to_string(),
                value: port,
            })?;
        }
        if let Ok(max) = std::env::var("MAX_UPLOAD_BYTES") {
            config.server.max_upload_bytes =
                max.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "MAX_UPLOAD_BYTES".to_string(),
                    value: max,
                })?;
        }

        // CORS origins from environment variable (comma-separated)
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.server.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Graph styling
        if let Ok(height) = std::env::var("GRAPH_HEIGHT") {
            config.graph.height = height;
        }
        if let Ok(width) = std::env::var("GRAPH_WIDTH") {
            config.graph.width = width;
        }
        if let Ok(bg) = std::env::var("GRAPH_BACKGROUND") {
            config.graph.background = bg;
        }
        if let Ok(font) = std::env::var("GRAPH_FONT_COLOR") {
            config.graph.font_color = font;
        }
        if let Ok(physics) = std::env::var("GRAPH_PHYSICS") {
            config.graph.physics = physics.parse().map_err(|_| ConfigError::InvalidValue {
                key: "GRAPH_PHYSICS".to_string(),
                value: physics,
            })?;
        }

        // Logging
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Maximum upload size in bytes
    pub max_upload_bytes: usize,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Allowed origins for CORS
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_upload_bytes: 25 * 1024 * 1024, // 25MB, papers with figures get large
            cors_enabled: true,
            // Empty by default - set via CORS_ORIGINS env var
            cors_origins: vec![],
        }
    }
}

/// Graph visualization styling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStyleConfig {
    /// Panel height (CSS size)
    pub height: String,

    /// Panel width (CSS size)
    pub width: String,

    /// Background color
    pub background: String,

    /// Node label font color
    pub font_color: String,

    /// Author node color
    pub author_color: String,

    /// Organization node color
    pub organization_color: String,

    /// Citation node color
    pub citation_color: String,

    /// Enable physics-based layout
    pub physics: bool,
}

impl Default for GraphStyleConfig {
    fn default() -> Self {
        Self {
            height: "600px".to_string(),
            width: "100%".to_string(),
            background: "#222222".to_string(),
            font_color: "white".to_string(),
            author_color: "blue".to_string(),
            organization_color: "red".to_string(),
            citation_color: "green".to_string(),
            physics: true,
        }
    }
}

impl GraphStyleConfig {
    /// Node color for a category
    pub fn color_for(&self, category: crate::EntityCategory) -> &str {
        match category {
            crate::EntityCategory::Author => &self.author_color,
            crate::EntityCategory::Organization => &self.organization_color,
            crate::EntityCategory::Citation => &self.citation_color,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON format for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
