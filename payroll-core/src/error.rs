//! Error types for payroll-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{EmployeeId, PositionId};

/// All errors that can arise from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Another employee already holds this id or this name.
    #[error("duplicate employee: id `{id}` or name `{name}` already registered")]
    DuplicateEmployee { id: EmployeeId, name: String },

    /// No employee with this id is present in the registry.
    #[error("employee not found: `{id}`")]
    EmployeeNotFound { id: EmployeeId },

    /// The salary is not acceptable for the target position.
    #[error("invalid salary {salary}: {reason}")]
    InvalidSalary {
        salary: f64,
        reason: SalaryRejection,
    },

    /// Position bounds are negative, non-finite, or inverted.
    #[error("invalid position `{id}`: salary range [{min_salary}, {max_salary}] is not well-formed")]
    InvalidPosition {
        id: PositionId,
        min_salary: f64,
        max_salary: f64,
    },
}

/// Why a salary was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SalaryRejection {
    /// Outside the position's `[min, max]` band.
    #[error("outside position range [{min}, {max}]")]
    OutOfRange { min: f64, max: f64 },

    /// Below the tolerance floor derived from the position minimum.
    #[error("below tolerance floor {floor}")]
    BelowToleranceFloor { floor: f64 },
}

/// Errors from loading a [`PayrollConfig`](crate::config::PayrollConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse payroll config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML parse error for in-memory input.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// `promotion_tolerance` must be finite and in `[0, 1)`.
    #[error("promotion tolerance {value} must be in [0, 1)")]
    InvalidTolerance { value: f64 },

    /// Two catalog entries share an id.
    #[error("duplicate position id `{id}` in catalog")]
    DuplicatePosition { id: PositionId },
}
