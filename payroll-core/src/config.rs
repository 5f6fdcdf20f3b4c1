//! Payroll policy configuration.
//!
//! ```yaml
//! promotion_tolerance: 0.1
//! positions:
//!   - id: "1"
//!     name: Junior Developer
//!     min_salary: 30000
//!     max_salary: 50000
//! ```
//!
//! Both keys are optional. Every load path runs [`PayrollConfig::validate`].

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Position, PositionId};

/// Fraction below a position minimum that still qualifies for a tolerance promotion.
pub const DEFAULT_PROMOTION_TOLERANCE: f64 = 0.1;

fn default_tolerance() -> f64 {
    DEFAULT_PROMOTION_TOLERANCE
}

/// Tolerance policy plus an optional catalog of known positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    #[serde(default = "default_tolerance")]
    pub promotion_tolerance: f64,
    #[serde(default)]
    pub positions: Vec<Position>,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            promotion_tolerance: DEFAULT_PROMOTION_TOLERANCE,
            positions: vec![],
        }
    }
}

impl PayrollConfig {
    /// Parse and validate a config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    ///
    /// Returns `ConfigError::Parse` (with path + line context) if malformed YAML.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        tracing::debug!(
            "loaded payroll config from {} ({} positions)",
            path.display(),
            config.positions.len()
        );
        Ok(config)
    }

    /// Check the tolerance range and position id uniqueness.
    ///
    /// Catalog bands need no check here: every `Position` is validated when built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.promotion_tolerance;
        if !t.is_finite() || !(0.0..1.0).contains(&t) {
            return Err(ConfigError::InvalidTolerance { value: t });
        }
        let mut seen = HashSet::new();
        for position in &self.positions {
            if !seen.insert(position.id()) {
                return Err(ConfigError::DuplicatePosition {
                    id: position.id().clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a catalog position by id.
    pub fn position(&self, id: &PositionId) -> Option<&Position> {
        self.positions.iter().find(|p| p.id() == id)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
