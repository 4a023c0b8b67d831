//! Configuration structures for the extraction pipeline.
//!
//! All tunables live here and are passed into the pipeline at construction
//! time, so parsers with different taxonomies can coexist in one process.

use serde::{Deserialize, Serialize};

use crate::error::{FinextError, Result};
use crate::statement::rules::labels::{canonical_row_labels, DEFAULT_LABEL_CUTOFF};
use crate::statement::rules::periods::{fallback_period_sequence, DEFAULT_MIN_PERIODS};

/// Main configuration for the finext pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinextConfig {
    /// Row extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl Default for FinextConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Row extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Similarity cutoff for fuzzy label matching (0.0 - 1.0).
    pub label_cutoff: f64,

    /// Minimum number of detected periods before the fallback sequence is
    /// substituted.
    pub min_periods: usize,

    /// Canonical row label taxonomy, in matching priority order.
    pub row_labels: Vec<String>,

    /// Fallback period descriptors, in column order.
    pub fallback_periods: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            label_cutoff: DEFAULT_LABEL_CUTOFF,
            min_periods: DEFAULT_MIN_PERIODS,
            row_labels: canonical_row_labels(),
            fallback_periods: fallback_period_sequence(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl FinextConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the configuration for values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.extraction.label_cutoff) {
            return Err(FinextError::Config(format!(
                "label_cutoff must be within 0.0..=1.0, got {}",
                self.extraction.label_cutoff
            )));
        }
        if self.extraction.row_labels.is_empty() {
            return Err(FinextError::Config(
                "row_labels must contain at least one label".to_string(),
            ));
        }
        if self.extraction.min_periods > 0 && self.extraction.fallback_periods.is_empty() {
            return Err(FinextError::Config(
                "fallback_periods must not be empty when min_periods > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FinextConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extraction.min_periods, 6);
        assert_eq!(config.extraction.fallback_periods.len(), 6);
        assert_eq!(config.extraction.row_labels.len(), 16);
    }

    #[test]
    fn test_validate_rejects_bad_cutoff() {
        let mut config = FinextConfig::default();
        config.extraction.label_cutoff = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_taxonomy() {
        let mut config = FinextConfig::default();
        config.extraction.row_labels.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = FinextConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FinextConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.extraction.row_labels, config.extraction.row_labels);
        assert_eq!(parsed.extraction.label_cutoff, config.extraction.label_cutoff);
    }
}
