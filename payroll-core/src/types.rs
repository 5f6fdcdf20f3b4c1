//! Domain types for the payroll registry.
//!
//! Salaries are plain `f64` amounts; no currency or rounding is applied.
//! `Position` and the id newtypes are serializable via serde so the position
//! catalog can live in the YAML config.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for a job position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionId(pub String);

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PositionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PositionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed identifier for an employee, unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A job role with a permitted salary band `[min_salary, max_salary]`.
///
/// Immutable once constructed. Deserialization goes through the same checks
/// as [`Position::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    id: PositionId,
    name: String,
    min_salary: f64,
    max_salary: f64,
}

impl Position {
    /// Build a position, rejecting negative or non-finite bounds and `min > max`.
    pub fn new(
        id: impl Into<PositionId>,
        name: impl Into<String>,
        min_salary: f64,
        max_salary: f64,
    ) -> Result<Self, RegistryError> {
        let position = Self {
            id: id.into(),
            name: name.into(),
            min_salary,
            max_salary,
        };
        position.validate()?;
        Ok(position)
    }

    pub fn id(&self) -> &PositionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_salary(&self) -> f64 {
        self.min_salary
    }

    pub fn max_salary(&self) -> f64 {
        self.max_salary
    }

    /// `true` iff `min_salary <= salary <= max_salary`.
    pub fn contains(&self, salary: f64) -> bool {
        self.min_salary <= salary && salary <= self.max_salary
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let well_formed = self.min_salary.is_finite()
            && self.max_salary.is_finite()
            && self.min_salary >= 0.0
            && self.min_salary <= self.max_salary;
        if well_formed {
            Ok(())
        } else {
            Err(RegistryError::InvalidPosition {
                id: self.id.clone(),
                min_salary: self.min_salary,
                max_salary: self.max_salary,
            })
        }
    }
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    id: PositionId,
    name: String,
    min_salary: f64,
    max_salary: f64,
}

impl TryFrom<RawPosition> for Position {
    type Error = RegistryError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name, raw.min_salary, raw.max_salary)
    }
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// A person bound to a position and a salary.
///
/// Construction does not validate anything; [`EmployeeRegistry::add_employee`]
/// does. Salary and position only change through the registry.
///
/// [`EmployeeRegistry::add_employee`]: crate::registry::EmployeeRegistry::add_employee
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    position: Position,
    salary: f64,
}

impl Employee {
    pub fn new(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
        position: Position,
        salary: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            salary,
        }
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub(crate) fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of a successful position change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionChange {
    /// Salary already fit the new band and was left unchanged.
    Retained,
    /// Salary was within tolerance below the new minimum and was raised to it.
    RaisedToMinimum { previous_salary: f64 },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
