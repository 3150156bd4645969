//! Configuration module for analytix.
//!
//! Handles the settings file and environment variable expansion.

mod settings;

pub use settings::{expand_env_vars, LoggingSettings, RequestDefaults, Settings, SettingsError};
