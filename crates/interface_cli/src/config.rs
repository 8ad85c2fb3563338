//! Preview configuration

use serde::Deserialize;
use std::path::PathBuf;

use core_kernel::{Amount, CoreError};

/// Prefix of the environment variables read by [`PreviewConfig::from_env`]
pub const ENV_PREFIX: &str = "PROFORMA";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Preview configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Template to expand
    pub template: String,
    /// Total amount as typed
    pub amount: String,
    /// Optional catalog file replacing the built-in templates
    pub catalog_path: Option<PathBuf>,
    /// Reject unknown templates and unreadable amounts instead of
    /// falling back to blank or zero lines
    pub strict: bool,
    /// Log level
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            template: "sales".to_string(),
            amount: "0".to_string(),
            catalog_path: None,
            strict: false,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl PreviewConfig {
    /// Loads configuration from `PROFORMA_*` environment variables
    ///
    /// Values stay strings until deserialized, so `PROFORMA_AMOUNT` keeps
    /// every digit it was given.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load_from(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Checks values the loader cannot
    ///
    /// In strict mode the amount must also read as a non-negative number.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.template.trim().is_empty() {
            return Err(CoreError::configuration("template id must not be empty"));
        }
        if let Some(path) = &self.catalog_path {
            if !path.is_file() {
                return Err(CoreError::configuration(format!(
                    "catalog file {} does not exist",
                    path.display()
                )));
            }
        }
        if self.strict {
            Amount::parse_non_negative(&self.amount)?;
        }
        Ok(())
    }

    /// Loads configuration from any `config` source, filling gaps with defaults
    pub fn load_from<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
