use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub intake: IntakeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where contact messages are posted.
#[derive(Debug, Deserialize, Clone)]
pub struct IntakeConfig {
    pub base_url: String,
    pub path: String,
    /// Client-side request timeout; the workflow itself never times out.
    pub timeout_secs: u64,
}

impl IntakeConfig {
    /// `path` is appended to `base_url`, so a base with its own path prefix
    /// keeps it.
    pub fn endpoint(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        ))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PORTFOLIO__INTAKE__BASE_URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("intake.base_url", "http://127.0.0.1:5000")?
            .set_default("intake.path", "/api/contact")?
            .set_default("intake.timeout_secs", 30)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Err(e) = self.intake.endpoint() {
            return Err(format!("Invalid intake endpoint: {e}"));
        }
        if self.intake.timeout_secs == 0 {
            return Err("Intake timeout_secs must be greater than 0".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown logging format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        Ok(())
    }
}
