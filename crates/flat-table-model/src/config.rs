//! Static grid policy: label grouping rules and sizing.
//!
//! Every field has a default, so an empty or partial TOML file is a valid
//! configuration:
//!
//! ```toml
//! [labels]
//! promo_prefixes = ["Lifting", "Discount"]
//!
//! [layout]
//! column_width = 120
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// How labels are split into group and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// Category-specific prefix/suffix matching against known group names.
    #[default]
    Affix,
    /// Split every label at its first `_`: `"Static_Plant"` becomes group
    /// `Static`, name `Plant`. Used by older metadata exports.
    Delimited,
}

/// Known group names used to split measure labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelRules {
    pub mode: LabelMode,
    /// Ordered; the first prefix that matches a promo label wins.
    pub promo_prefixes: Vec<String>,
    /// Ordered; the first suffix that matches an aggregation label wins.
    pub aggregation_suffixes: Vec<String>,
    /// Group for promo labels without a known prefix.
    pub promo_fallback_group: String,
    /// Group for aggregation labels without a known suffix.
    pub aggregation_fallback_group: String,
}

impl Default for LabelRules {
    fn default() -> Self {
        Self {
            mode: LabelMode::Affix,
            promo_prefixes: to_strings(&[
                "Lift",
                "Lifting",
                "Uplift",
                "Discount",
                "Display",
                "Feature",
                "Baseline",
            ]),
            aggregation_suffixes: to_strings(&[
                "Final Consensus Forecast",
                "Consensus Forecast",
                "Customer Forecast",
                "Planner Forecast",
                "Statistical Forecast",
                "Sales Forecast",
                "Actuals",
                "Budget",
            ]),
            promo_fallback_group: "Promo".to_string(),
            aggregation_fallback_group: "Forecast".to_string(),
        }
    }
}

/// Sizing and precision shared by all columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub column_min_width: u32,
    pub column_width: u32,
    pub row_height: u32,
    pub header_row_height: u32,
    pub pre_header_panel_height: u32,
    /// Precision of the float editor on editable aggregation columns.
    pub decimal_places: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_min_width: 90,
            column_width: 110,
            row_height: 28,
            header_row_height: 28,
            pre_header_panel_height: 28,
            decimal_places: 2,
        }
    }
}

/// Complete grid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub labels: LabelRules,
    pub layout: LayoutConfig,
}

impl GridConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Toml`] when it is not valid configuration TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "Loaded grid configuration");
        Ok(config)
    }

    /// Loads a configuration file, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::info!("No grid configuration at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Serializes the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
