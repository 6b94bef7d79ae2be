//! Calculator configuration
//!
//! ```yaml
//! division_by_zero: zero   # or: error
//! history_capacity: 100
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::history::History;
use crate::core::{CalcError, CalcResult};

/// What equals does when the divisor is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionPolicy {
    /// The quotient is defined as `0` and no error is reported
    #[default]
    Zero,
    /// Equals fails with [`CalcError::DivisionByZero`]
    Error,
}

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Division-by-zero policy
    pub division_by_zero: DivisionPolicy,
    /// Maximum number of history entries kept
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_by_zero: DivisionPolicy::Zero,
            history_capacity: History::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the division-by-zero policy
    #[must_use]
    pub const fn with_division_by_zero(mut self, policy: DivisionPolicy) -> Self {
        self.division_by_zero = policy;
        self
    }

    /// Set the history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Parses YAML configuration
    pub fn from_yaml_str(text: &str) -> CalcResult<Self> {
        serde_yaml_ng::from_str(text).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Parses JSON configuration
    pub fn from_json_str(text: &str) -> CalcResult<Self> {
        serde_json::from_str(text).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Loads configuration from a file; `.json` files are JSON, anything else YAML
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config(format!("{}: {e}", path.display())))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_yaml_str(&text)?
        };
        tracing::debug!(path = %path.display(), ?config, "loaded calculator config");
        Ok(config)
    }

    /// Serializes the configuration as YAML
    pub fn to_yaml(&self) -> CalcResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| CalcError::config(e.to_string()))
    }
}
