//! TOML-based configuration for analytix.
//!
//! Supports a config file (analytix.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [defaults]
//! currency = "${ANALYTIX_CURRENCY}"
//! start_index = 1
//! max_results = 25
//! include_historical_data = false
//!
//! [logging]
//! filter = "analytix=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ReportRequest;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Values applied to every request built from these settings.
    pub defaults: RequestDefaults,

    /// Log output.
    pub logging: LoggingSettings,
}

/// Request option defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestDefaults {
    /// ISO 4217 currency code (supports ${ENV_VAR} expansion).
    pub currency: String,

    /// One-indexed first row.
    pub start_index: u32,

    /// Row limit; unset means none is sent.
    pub max_results: Option<u32>,

    pub include_historical_data: bool,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            start_index: 1,
            max_results: None,
            include_historical_data: false,
        }
    }
}

impl RequestDefaults {
    /// Get the currency with environment variables expanded.
    pub fn resolved_currency(&self) -> Result<String, SettingsError> {
        expand_env_vars(&self.currency)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `ANALYTIX_CONFIG`
    /// 2. `./analytix.toml`
    /// 3. `~/.config/analytix/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("ANALYTIX_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("analytix.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("analytix").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config file found
        Ok(Settings::default())
    }

    /// A request carrying the configured defaults and nothing else.
    pub fn request(&self) -> Result<ReportRequest, SettingsError> {
        let defaults = &self.defaults;
        let mut request = ReportRequest::new()
            .with_currency(defaults.resolved_currency()?)
            .with_start_index(defaults.start_index)
            .with_historical_data(defaults.include_historical_data);
        request.max_results = defaults.max_results;
        Ok(request)
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name = if chars.next_if_eq(&'{').is_some() {
            let mut name = String::new();
            for ch in chars.by_ref() {
                if ch == '}' {
                    break;
                }
                name.push(ch);
            }
            name
        } else {
            // $VAR ends at the first character that cannot be in a name
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                result.push('$');
                continue;
            }
            name
        };

        let value = env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name))?;
        result.push_str(&value);
    }

    Ok(result)
}
