//! Comparison configuration.
//!
//! A [`CompareConfig`] is an explicit value handed to the
//! [`Comparator`](crate::Comparator); nothing is read from process-wide state.
//! It can be built in code or loaded from TOML:
//!
//! ```toml
//! threshold = 0.7
//!
//! [bands]
//! high = 0.85
//! moderate = 0.5
//!
//! [mark_style]
//! kind = "custom"
//! open = "[["
//! close = "]]"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::annotate::MarkStyle;
use crate::errors::{CompareError, CompareResult};
use crate::matcher::DEFAULT_THRESHOLD;
use crate::verdict::VerdictBands;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Sentence similarity needed to count as a match, in `[0, 1]`.
    pub threshold: f64,
    /// Verdict band boundaries for the overall score.
    pub bands: VerdictBands,
    /// Marker used when annotating matched sentences.
    pub mark_style: MarkStyle,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            bands: VerdictBands::default(),
            mark_style: MarkStyle::default(),
        }
    }
}

impl CompareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_bands(mut self, bands: VerdictBands) -> Self {
        self.bands = bands;
        self
    }

    pub fn with_mark_style(mut self, style: MarkStyle) -> Self {
        self.mark_style = style;
        self
    }

    pub fn validate(&self) -> CompareResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(CompareError::InvalidConfig {
                message: format!("threshold must be within [0, 1], got {}", self.threshold),
            });
        }
        if !self.bands.is_valid() {
            return Err(CompareError::InvalidConfig {
                message: format!(
                    "bands must satisfy 0 <= moderate <= high <= 1, got moderate={} high={}",
                    self.bands.moderate, self.bands.high
                ),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> CompareResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CompareError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> CompareResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| CompareError::ConfigLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| CompareError::ConfigLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}
