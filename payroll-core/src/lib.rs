//! Payroll core library — positions, employees, salary rules, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`RegistryError`], [`ConfigError`]
//! - [`config`] — tolerance policy and position catalog
//! - [`registry`] — [`EmployeeRegistry`], the in-memory manager

pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::PayrollConfig;
pub use error::{ConfigError, RegistryError, SalaryRejection};
pub use registry::EmployeeRegistry;
pub use types::{Employee, EmployeeId, Position, PositionChange, PositionId};
