use crate::domain::model::{Employee, Position};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{ensure_salary_within_band, salary_within_band};

/// Owns the authoritative employee collection and enforces the salary-band
/// rule on every mutation it mediates.
///
/// Employees are kept in insertion order with unique ids. The collection is
/// exposed read-only, so once a value has been registered the manager's
/// methods are the only way to change it.
#[derive(Debug, Default)]
pub struct EmployeeManager {
    employees: Vec<Employee>,
}

impl EmployeeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee.
    ///
    /// The salary is checked against the employee's own position band
    /// before the id is checked for duplicates. Nothing is stored on
    /// failure.
    pub fn add_employee(&mut self, employee: Employee) -> Result<()> {
        ensure_salary_within_band(&employee.position, employee.salary)?;
        if self.employees.iter().any(|e| e.id == employee.id) {
            return Err(RosterError::DuplicateEmployeeError { id: employee.id });
        }

        tracing::debug!(id = %employee.id, position = %employee.position.name, "employee added");
        self.employees.push(employee);
        Ok(())
    }

    /// Removes the employee with the given id and returns it.
    pub fn remove_employee(&mut self, id: &str) -> Result<Employee> {
        match self.employees.iter().position(|e| e.id == id) {
            Some(index) => {
                tracing::debug!(id, "employee removed");
                Ok(self.employees.remove(index))
            }
            None => Err(RosterError::EmployeeNotFoundError { id: id.to_string() }),
        }
    }

    /// Read-only view of the collection, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Sum of all registered salaries; `0.0` for an empty roster.
    pub fn total_salary(&self) -> f64 {
        self.employees.iter().map(|e| e.salary).sum()
    }

    /// Assigns a new salary, validated against the employee's current
    /// position band. The existence check runs before the band check.
    pub fn update_salary(&mut self, id: &str, new_salary: f64) -> Result<()> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RosterError::EmployeeNotFoundError { id: id.to_string() })?;
        ensure_salary_within_band(&employee.position, new_salary)?;

        tracing::debug!(id, old = employee.salary, new = new_salary, "salary updated");
        employee.salary = new_salary;
        Ok(())
    }

    /// Moves an employee to a new position. The current salary must fit
    /// the new band; it is validated, never adjusted. The existence check
    /// runs before the band check.
    pub fn update_position(&mut self, id: &str, new_position: Position) -> Result<()> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RosterError::EmployeeNotFoundError { id: id.to_string() })?;
        ensure_salary_within_band(&new_position, employee.salary)?;

        tracing::debug!(id, position = %new_position.name, "position updated");
        employee.position = new_position;
        Ok(())
    }

    /// Pure band predicate, exposed for callers that want to probe a
    /// salary without attempting a mutation.
    pub fn is_salary_valid_for_position(&self, position: &Position, salary: f64) -> bool {
        salary_within_band(position, salary)
    }
}
