//! Engine configuration
//!
//! Everything has a default matching the shipped plugin; environment
//! variables (optionally from a `.env` file) override individual values.

use std::env;
use std::str::FromStr;

use modegrid_domain::{DomainError, LabelStyle, LayoutConstants, LegacyLayout};

/// Configuration error for malformed environment values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be at least 1")]
    ZeroCount { key: &'static str },

    #[error("{key}: {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: DomainError,
    },
}

/// Grid generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Margins and padding for the wrapped mode grid
    pub layout: LayoutConstants,
    /// How wrappers are labeled
    pub label_style: LabelStyle,
    /// Brand × size generator settings
    pub legacy: LegacyLayout,
    /// Conventional name of the theme collection
    pub theme_collection: String,
    /// Conventional name of the text-size collection
    pub dynamic_type_collection: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConstants::default(),
            label_style: LabelStyle::default(),
            legacy: LegacyLayout::default(),
            theme_collection: "Theme".to_string(),
            dynamic_type_collection: "Dynamic Type".to_string(),
        }
    }
}

impl GridConfig {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment, in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            layout: LayoutConstants {
                outer_margin: length_or(
                    get("MODEGRID_OUTER_MARGIN"),
                    "MODEGRID_OUTER_MARGIN",
                    defaults.layout.outer_margin,
                )?,
                inner_padding: length_or(
                    get("MODEGRID_INNER_PADDING"),
                    "MODEGRID_INNER_PADDING",
                    defaults.layout.inner_padding,
                )?,
                row_margin: length_or(
                    get("MODEGRID_ROW_MARGIN"),
                    "MODEGRID_ROW_MARGIN",
                    defaults.layout.row_margin,
                )?,
            },
            label_style: match get("MODEGRID_LABEL_STYLE") {
                Some(raw) => LabelStyle::from_str(&raw).map_err(|source| {
                    ConfigError::InvalidValue {
                        key: "MODEGRID_LABEL_STYLE",
                        source,
                    }
                })?,
                None => defaults.label_style,
            },
            legacy: LegacyLayout {
                brand_count: count_or(
                    get("MODEGRID_LEGACY_BRANDS"),
                    "MODEGRID_LEGACY_BRANDS",
                    defaults.legacy.brand_count,
                )?,
                size_count: count_or(
                    get("MODEGRID_LEGACY_SIZES"),
                    "MODEGRID_LEGACY_SIZES",
                    defaults.legacy.size_count,
                )?,
                spacing: length_or(
                    get("MODEGRID_LEGACY_SPACING"),
                    "MODEGRID_LEGACY_SPACING",
                    defaults.legacy.spacing,
                )?,
            },
            theme_collection: get("MODEGRID_THEME_COLLECTION")
                .unwrap_or(defaults.theme_collection),
            dynamic_type_collection: get("MODEGRID_DYNAMIC_TYPE_COLLECTION")
                .unwrap_or(defaults.dynamic_type_collection),
        })
    }
}

fn length_or(raw: Option<String>, key: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber { key, value: raw }),
    }
}

fn count_or(raw: Option<String>, key: &'static str, default: usize) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<usize>() {
        Ok(0) => Err(ConfigError::ZeroCount { key }),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::InvalidNumber { key, value: raw }),
    }
}
