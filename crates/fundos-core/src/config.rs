use crate::collation::DEFAULT_LOCALE;
use crate::error::{FundosError, Result};
use crate::models::SortKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Fundos
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Collation locale for names and districts
    pub locale: ConfigValue<String>,
    /// City appended to text queries in navigation links
    pub city: ConfigValue<String>,
    /// Country appended to text queries in navigation links
    pub country: ConfigValue<String>,
    /// Sort key used when none is requested
    pub default_sort: ConfigValue<SortKey>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            locale: ConfigValue::new(DEFAULT_LOCALE.to_string(), ConfigSource::Default),
            city: ConfigValue::new("Lima".to_string(), ConfigSource::Default),
            country: ConfigValue::new("Perú".to_string(), ConfigSource::Default),
            default_sort: ConfigValue::new(SortKey::Type, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| FundosError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FundosError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(locale) = file_config.locale {
            self.locale.update(locale, ConfigSource::File);
        }

        if let Some(city) = file_config.city {
            self.city.update(city, ConfigSource::File);
        }

        if let Some(country) = file_config.country {
            self.country.update(country, ConfigSource::File);
        }

        if let Some(default_sort) = file_config.default_sort {
            self.default_sort.update(default_sort, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load the file layer only if the file exists
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // FUNDOS_LOCALE
        if let Ok(locale) = env::var("FUNDOS_LOCALE") {
            if locale.trim().is_empty() {
                tracing::warn!("Ignoring empty FUNDOS_LOCALE");
            } else {
                self.locale.update(locale, ConfigSource::Environment);
            }
        }

        // FUNDOS_CITY
        if let Ok(city) = env::var("FUNDOS_CITY") {
            self.city.update(city, ConfigSource::Environment);
        }

        // FUNDOS_COUNTRY
        if let Ok(country) = env::var("FUNDOS_COUNTRY") {
            self.country.update(country, ConfigSource::Environment);
        }

        // FUNDOS_DEFAULT_SORT
        if let Ok(sort_str) = env::var("FUNDOS_DEFAULT_SORT") {
            match parse_sort_key(&sort_str) {
                Ok(sort) => self.default_sort.update(sort, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FUNDOS_DEFAULT_SORT value '{}': expected a sort key",
                    sort_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(locale) = overrides.locale {
            self.locale.update(locale, ConfigSource::Cli);
        }

        if let Some(city) = overrides.city {
            self.city.update(city, ConfigSource::Cli);
        }

        if let Some(country) = overrides.country {
            self.country.update(country, ConfigSource::Cli);
        }

        if let Some(default_sort) = overrides.default_sort {
            self.default_sort.update(default_sort, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("locale".to_string(), (self.locale.value.clone(), self.locale.source));
        map.insert("city".to_string(), (self.city.value.clone(), self.city.source));
        map.insert("country".to_string(), (self.country.value.clone(), self.country.source));
        map.insert(
            "default_sort".to_string(),
            (self.default_sort.value.to_string(), self.default_sort.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    locale: Option<String>,
    city: Option<String>,
    country: Option<String>,
    default_sort: Option<SortKey>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub locale: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub default_sort: Option<SortKey>,
}

/// Parse a sort key strictly (unknown keys are an error here)
pub fn parse_sort_key(s: &str) -> Result<SortKey> {
    s.parse().map_err(|_| FundosError::ConfigInvalid {
        key: "default_sort".to_string(),
        reason: format!("Invalid sort key: {}. Use type, name, district, or distance", s),
    })
}
