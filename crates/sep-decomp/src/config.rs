use serde::{Deserialize, Serialize};
use sep_core::errors::{ErrorInfo, SepError};

use crate::oracle::{QualityLevel, SeparatorRequest};

/// YAML/JSON-configurable parameters of a decomposition run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionConfig {
    /// Fragments with at most this many vertices become leaves.
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// Parts requested from the oracle per split.
    #[serde(default = "default_num_parts")]
    pub num_parts: usize,
    /// Allowed imbalance between parts, in `(0, 1)`.
    #[serde(default = "default_imbalance")]
    pub imbalance: f64,
    /// Oracle effort tier.
    #[serde(default)]
    pub quality: QualityLevel,
    /// Master seed; every fragment derives its own stream from it.
    #[serde(default)]
    pub seed: u64,
    /// Split sibling fragments on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Fragments at this depth become leaves regardless of size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

fn default_threshold() -> usize {
    200
}

fn default_num_parts() -> usize {
    2
}

fn default_imbalance() -> f64 {
    1.0 / 3.0
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self::with_threshold(default_threshold())
    }
}

impl DecompositionConfig {
    /// Default parameters with an explicit leaf threshold.
    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            threshold,
            num_parts: default_num_parts(),
            imbalance: default_imbalance(),
            quality: QualityLevel::default(),
            seed: 0,
            parallel: false,
            max_depth: None,
        }
    }

    /// Checks the oracle parameters.
    pub fn validate(&self) -> Result<(), SepError> {
        if self.num_parts < 2 {
            return Err(SepError::Config(
                ErrorInfo::new("invalid-num-parts", "num_parts must be at least 2")
                    .with_context("num_parts", self.num_parts),
            ));
        }
        if !(self.imbalance > 0.0 && self.imbalance < 1.0) {
            return Err(SepError::Config(
                ErrorInfo::new("invalid-imbalance", "imbalance must lie strictly between 0 and 1")
                    .with_context("imbalance", self.imbalance)
                    .with_hint("the usual choice is 1/3"),
            ));
        }
        Ok(())
    }

    /// Oracle request derived from the configuration.
    pub fn request(&self) -> SeparatorRequest {
        SeparatorRequest {
            num_parts: self.num_parts,
            imbalance: self.imbalance,
            quality: self.quality,
        }
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, SepError> {
        let config: Self = serde_yaml::from_str(contents).map_err(|err| {
            SepError::Serde(ErrorInfo::new("deserialize-yaml", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(contents: &str) -> Result<Self, SepError> {
        let config: Self = serde_json::from_str(contents).map_err(|err| {
            SepError::Serde(ErrorInfo::new("deserialize-json", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, SepError> {
        serde_yaml::to_string(self)
            .map_err(|err| SepError::Serde(ErrorInfo::new("serialize-yaml", err.to_string())))
    }

    /// Renders the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, SepError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| SepError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
    }
}
