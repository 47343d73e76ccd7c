use std::fs;
use std::path::Path;

use noether_core::errors::{AlgebraError, ErrorInfo};
use noether_ideal::ReductionLimits;
use serde::{Deserialize, Serialize};

/// Knobs controlling how the theorem checks run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckPolicy {
    /// Rewrite steps allowed for a single polynomial reduction.
    #[serde(default = "CheckPolicy::default_max_reduction_steps")]
    pub max_reduction_steps: usize,
    /// Recursion depth allowed for monomial decomposition.
    #[serde(default = "CheckPolicy::default_max_split_depth")]
    pub max_split_depth: usize,
    /// Stop evaluating a condition at its first failing ideal.
    #[serde(default = "CheckPolicy::default_short_circuit")]
    pub short_circuit: bool,
    /// Include per-ideal rows in the local freeness report.
    #[serde(default = "CheckPolicy::default_record_diagnostics")]
    pub record_diagnostics: bool,
}

impl CheckPolicy {
    const fn default_max_reduction_steps() -> usize {
        10_000
    }

    const fn default_max_split_depth() -> usize {
        64
    }

    const fn default_short_circuit() -> bool {
        true
    }

    const fn default_record_diagnostics() -> bool {
        true
    }

    /// Reduction bounds handed to the ideal engine.
    pub fn limits(&self) -> ReductionLimits {
        ReductionLimits {
            max_steps: self.max_reduction_steps,
            max_split_depth: self.max_split_depth,
        }
    }

    /// Parses a policy from YAML text; missing fields take their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, AlgebraError> {
        serde_yaml::from_str(text).map_err(|err| {
            AlgebraError::Serde(ErrorInfo::new("policy-yaml", err.to_string()))
        })
    }

    /// Reads a YAML policy file.
    pub fn load(path: &Path) -> Result<Self, AlgebraError> {
        let text = fs::read_to_string(path).map_err(|err| {
            AlgebraError::Serde(
                ErrorInfo::new("policy-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self {
            max_reduction_steps: Self::default_max_reduction_steps(),
            max_split_depth: Self::default_max_split_depth(),
            short_circuit: Self::default_short_circuit(),
            record_diagnostics: Self::default_record_diagnostics(),
        }
    }
}
