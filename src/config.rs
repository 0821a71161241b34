//! Configuration management for the Aetheris application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AetherisError;
use crate::models::{ComfortTier, Currency, TripInputs};
use crate::models::trip::{DEFAULT_BUDGET, DEFAULT_DAYS};
use crate::session::DEFAULT_ORIGIN;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "AETHERIS_CONFIG";

/// Root configuration structure for the Aetheris application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AetherisConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Page metadata handed to the rendering client
    #[serde(default)]
    pub page: PageConfig,
    /// Initial values for new sessions
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Sessions untouched for this long are evicted
    #[serde(default = "default_session_idle")]
    pub session_idle_minutes: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Static page metadata. No effect on any computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_title")]
    pub title: String,
    #[serde(default = "default_page_icon")]
    pub icon: String,
    #[serde(default = "default_page_layout")]
    pub layout: String,
}

/// Default values for a fresh session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Starting point shown before the user types one
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Total budget in INR
    #[serde(default = "default_budget")]
    pub budget: u32,
    /// Trip length in days
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub tier: ComfortTier,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_request_timeout() -> u64 {
    30
}

fn default_session_idle() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_page_title() -> String {
    "Aetheris Global AI".to_string()
}

fn default_page_icon() -> String {
    "🌍".to_string()
}

fn default_page_layout() -> String {
    "wide".to_string()
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_budget() -> u32 {
    DEFAULT_BUDGET
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            session_idle_minutes: default_session_idle(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_page_title(),
            icon: default_page_icon(),
            layout: default_page_layout(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            budget: default_budget(),
            days: default_days(),
            currency: Currency::default(),
            tier: ComfortTier::default(),
        }
    }
}

impl DefaultsConfig {
    /// Trip inputs a new session starts with
    #[must_use]
    pub fn trip_inputs(&self) -> TripInputs {
        TripInputs {
            budget: self.budget,
            days: self.days,
            currency: self.currency,
            tier: self.tier,
        }
    }
}

impl AetherisConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_from_path(path)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            tracing::debug!("Using config from: {}", config_file.display());
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides, e.g. AETHERIS_SERVER__PORT
        builder = builder.add_source(
            Environment::with_prefix("AETHERIS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AetherisConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aetheris").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.server.session_idle_minutes == 0 {
            self.server.session_idle_minutes = default_session_idle();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.page.title.is_empty() {
            self.page.title = default_page_title();
        }
        if self.defaults.origin.trim().is_empty() {
            self.defaults.origin = default_origin();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_server()?;
        self.validate_string_values()?;
        self.defaults
            .trip_inputs()
            .validate()
            .map_err(|e| AetherisError::config(format!("Invalid session defaults: {e}")))?;
        Ok(())
    }

    fn validate_server(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AetherisError::config("Server port must be non-zero").into());
        }

        if self.server.request_timeout_seconds > 300 {
            return Err(AetherisError::config(
                "Request timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.server.session_idle_minutes > 10_080 {
            return Err(AetherisError::config(
                "Session idle window cannot exceed one week"
            ).into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AetherisError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AetherisError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        let valid_layouts = ["wide", "centered"];
        if !valid_layouts.contains(&self.page.layout.as_str()) {
            return Err(AetherisError::config(
                format!("Invalid page layout '{}'. Must be one of: {}",
                    self.page.layout,
                    valid_layouts.join(", ")
                )
            ).into());
        }

        Ok(())
    }
}
