//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Application configuration loaded from environment variables.
///
/// The deployment identity (branch, version, environment) is resolved once at
/// startup and shared read-only by every handler.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Deployment Identity ===
    /// Branch this instance was built from.
    #[serde(default = "default_branch_name")]
    pub branch_name: String,

    /// Deployed version string.
    #[serde(default = "default_version")]
    pub version: String,

    /// Hosting environment name (Development, Staging, Production, ...).
    #[serde(default = "default_environment")]
    pub app_environment: String,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log output format: `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Serve the Swagger UI at `/swagger`.
    #[serde(default = "default_true")]
    pub swagger_enabled: bool,
}

fn default_branch_name() -> String {
    "unknown".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_environment() -> String {
    "Production".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_name: default_branch_name(),
            version: default_version(),
            app_environment: default_environment(),
            port: default_port(),
            log_format: default_log_format(),
            swagger_enabled: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::InvalidConfig("PORT must be non-zero".to_string()));
        }

        if !matches!(self.log_format.as_str(), "pretty" | "json") {
            return Err(AppError::InvalidConfig(format!(
                "LOG_FORMAT must be `pretty` or `json`, got `{}`",
                self.log_format
            )));
        }

        Ok(())
    }

    /// Whether logs should be emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}
