//! In-memory employee registry.
//!
//! # Invariants
//!
//! - No two employees share an [`EmployeeId`] or a name.
//! - Every salary lies within its position's band, or was raised to the band
//!   minimum by a tolerance promotion.
//! - Every check runs before any mutation; a failed call leaves the registry
//!   untouched.
//!
//! Membership is decided by id. Callers hold ids, not references into the
//! registry, so the registry's copy stays authoritative.

use crate::config::{PayrollConfig, DEFAULT_PROMOTION_TOLERANCE};
use crate::error::{ConfigError, RegistryError, SalaryRejection};
use crate::types::{Employee, EmployeeId, Position, PositionChange};

/// Owns the ordered employee collection and enforces salary rules on mutation.
#[derive(Debug, Clone)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    promotion_tolerance: f64,
}

impl Default for EmployeeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRegistry {
    /// Empty registry with the default 10% promotion tolerance.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            promotion_tolerance: DEFAULT_PROMOTION_TOLERANCE,
        }
    }

    /// Empty registry using `config.promotion_tolerance`.
    ///
    /// Runs [`PayrollConfig::validate`] first, so hand-built configs are checked too.
    pub fn with_config(config: &PayrollConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            employees: Vec::new(),
            promotion_tolerance: config.promotion_tolerance,
        })
    }

    pub fn promotion_tolerance(&self) -> f64 {
        self.promotion_tolerance
    }

    // -----------------------------------------------------------------------
    // 1. Read access
    // -----------------------------------------------------------------------

    /// Employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Sum of all current salaries; `0.0` for an empty registry.
    pub fn calculate_total_salary(&self) -> f64 {
        self.employees.iter().map(Employee::salary).sum()
    }

    // -----------------------------------------------------------------------
    // 2. Membership
    // -----------------------------------------------------------------------

    /// Append `employee`.
    ///
    /// Fails with `DuplicateEmployee` if the id or the name is taken, then
    /// with `InvalidSalary` if the salary is outside the position band or
    /// below the tolerance floor.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), RegistryError> {
        let taken = self
            .employees
            .iter()
            .any(|e| e.id() == employee.id() || e.name() == employee.name());
        if taken {
            return Err(RegistryError::DuplicateEmployee {
                id: employee.id().clone(),
                name: employee.name().to_owned(),
            });
        }

        let position = employee.position();
        let salary = employee.salary();
        if !Self::is_salary_valid_for_position(Some(position), salary) {
            return Err(out_of_range(position, salary));
        }

        // Unreachable: the range check above already enforces salary >= min.
        let floor = self.tolerance_floor(position);
        if salary < floor {
            return Err(RegistryError::InvalidSalary {
                salary,
                reason: SalaryRejection::BelowToleranceFloor { floor },
            });
        }

        tracing::debug!("added employee {} ({})", employee.id(), employee.name());
        self.employees.push(employee);
        Ok(())
    }

    /// Remove and return the employee with `id`, preserving the order of the rest.
    pub fn remove_employee(&mut self, id: &EmployeeId) -> Result<Employee, RegistryError> {
        let index = self.require(id)?;
        let removed = self.employees.remove(index);
        tracing::debug!("removed employee {}", removed.id());
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // 3. Updates
    // -----------------------------------------------------------------------

    /// Set a new salary, strictly within the current position's band.
    pub fn update_employee_salary(
        &mut self,
        id: &EmployeeId,
        new_salary: f64,
    ) -> Result<(), RegistryError> {
        let index = self.require(id)?;
        let employee = &mut self.employees[index];
        if !Self::is_salary_valid_for_position(Some(employee.position()), new_salary) {
            return Err(out_of_range(employee.position(), new_salary));
        }
        tracing::debug!(
            "salary of {} changed {} -> {}",
            employee.id(),
            employee.salary(),
            new_salary
        );
        employee.set_salary(new_salary);
        Ok(())
    }

    /// Move an employee to `new_position`.
    ///
    /// | current salary                          | outcome                       |
    /// |-----------------------------------------|-------------------------------|
    /// | within `[min, max]`                     | [`PositionChange::Retained`]  |
    /// | within `[min * (1 - tolerance), min)`   | raised to `min`               |
    /// | anything else                           | `InvalidSalary`, no change    |
    pub fn update_employee_position(
        &mut self,
        id: &EmployeeId,
        new_position: Position,
    ) -> Result<PositionChange, RegistryError> {
        let index = self.require(id)?;
        let floor = self.tolerance_floor(&new_position);
        let employee = &mut self.employees[index];
        let salary = employee.salary();
        let min = new_position.min_salary();

        let change = if new_position.contains(salary) {
            PositionChange::Retained
        } else if floor <= salary && salary < min {
            PositionChange::RaisedToMinimum {
                previous_salary: salary,
            }
        } else if salary < floor {
            return Err(RegistryError::InvalidSalary {
                salary,
                reason: SalaryRejection::BelowToleranceFloor { floor },
            });
        } else {
            return Err(out_of_range(&new_position, salary));
        };

        if let PositionChange::RaisedToMinimum { previous_salary } = change {
            tracing::info!(
                "tolerance promotion: {} raised {} -> {} for position {}",
                employee.id(),
                previous_salary,
                min,
                new_position.id()
            );
            employee.set_salary(min);
        }
        tracing::debug!("employee {} moved to position {}", employee.id(), new_position.id());
        employee.set_position(new_position);
        Ok(change)
    }

    // -----------------------------------------------------------------------
    // 4. Validation
    // -----------------------------------------------------------------------

    /// `false` for a missing position or a negative salary; otherwise whether
    /// the salary lies in `[min_salary, max_salary]`.
    pub fn is_salary_valid_for_position(position: Option<&Position>, salary: f64) -> bool {
        match position {
            Some(p) if salary >= 0.0 => p.contains(salary),
            _ => false,
        }
    }

    fn tolerance_floor(&self, position: &Position) -> f64 {
        position.min_salary() * (1.0 - self.promotion_tolerance)
    }

    fn index_of(&self, id: &EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id() == id)
    }

    fn require(&self, id: &EmployeeId) -> Result<usize, RegistryError> {
        self.index_of(id)
            .ok_or_else(|| RegistryError::EmployeeNotFound { id: id.clone() })
    }
}

fn out_of_range(position: &Position, salary: f64) -> RegistryError {
    RegistryError::InvalidSalary {
        salary,
        reason: SalaryRejection::OutOfRange {
            min: position.min_salary(),
            max: position.max_salary(),
        },
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
