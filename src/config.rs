//! Configuration management for the book editor

use config::{Config, ConfigError, Environment, File};
use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL used for `GET /books/{id}`
    pub read_base_url: String,
    /// Base URL used for `PUT /books/{id}`, configured separately from reads
    pub write_base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, config files and environment variables
    ///
    /// Sources, later ones win:
    /// - built-in defaults
    /// - `<user config dir>/book-editor/config.toml` if it exists
    /// - `explicit_file` if given (must exist)
    /// - `BOOK_EDITOR__*` environment variables, e.g. `BOOK_EDITOR__API__READ_BASE_URL`
    pub fn load(explicit_file: Option<&Path>) -> Result<Self, ConfigError> {
        let environment = Environment::with_prefix("BOOK_EDITOR")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);

        Self::from_sources(Self::user_config_path(), explicit_file, Some(environment))
    }

    /// Layer the given sources over the built-in defaults
    fn from_sources(
        user_file: Option<PathBuf>,
        explicit_file: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let mut builder = Config::builder()
            .set_default("api.read_base_url", defaults.api.read_base_url)?
            .set_default("api.write_base_url", defaults.api.write_base_url)?
            .set_default("api.timeout_secs", defaults.api.timeout_secs)?
            .set_default("logging.level", defaults.logging.level)?;

        if let Some(path) = user_file {
            builder = builder.add_source(File::from(path).required(false));
        }

        if let Some(path) = explicit_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        let config = builder.build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Path of the per-user configuration file
    /// - Linux: ~/.config/book-editor/config.toml
    /// - macOS: ~/Library/Application Support/book-editor/config.toml
    /// - Windows: %APPDATA%\book-editor\config.toml
    fn user_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("book-editor");
        path.push("config.toml");
        Some(path)
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("api.read_base_url", &self.read_base_url),
            ("api.write_base_url", &self.write_base_url),
        ] {
            let url = Url::parse(value)
                .map_err(|e| ConfigError::Message(format!("{} is not a valid URL: {}", key, e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::Message(format!(
                    "{} must use http or https, got {}",
                    key,
                    url.scheme()
                )));
            }
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            read_base_url: "http://localhost:3000".to_string(),
            write_base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
