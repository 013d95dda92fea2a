// Engine settings, loaded from a JSON file or the embedded default
use crate::error::EngineError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub currency_symbol: String,
    // Prices at or below zero are rejected by product validation when set.
    pub require_positive_price: bool,
    pub csv_delimiter: String, // Should be char, but JSON string is easier
    pub log_filter: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            currency_symbol: "R$".to_string(),
            require_positive_price: true,
            csv_delimiter: ";".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn load_default() -> Result<Self, EngineError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, EngineError> {
        tracing::debug!(path = %path.display(), "Reading engine settings");
        let config_str = fs::read_to_string(path)?;
        Self::from_json(&config_str)
    }

    /// Uses the file when a path is given, the embedded default otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, EngineError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::load_default(),
        }
    }

    pub fn from_json(config_str: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(config_str)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), EngineError> {
        self.delimiter_byte()?;
        Ok(())
    }

    /// The CSV delimiter as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, EngineError> {
        match self.csv_delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(EngineError::ConfigError(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            ))),
        }
    }
}
