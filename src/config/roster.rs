use crate::domain::model::{Employee, Position};
use crate::domain::ports::RosterSource;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, validate_salary_band, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Declarative roster definition loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub roster: RosterMeta,
    pub positions: Vec<PositionConfig>,
    pub employees: Vec<EmployeeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionConfig {
    pub id: String,
    pub name: String,
    pub min_salary: f64,
    pub max_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeConfig {
    pub id: String,
    pub name: String,
    /// References a `[[positions]]` id.
    pub position: String,
    pub salary: f64,
}

impl RosterConfig {
    /// Loads a roster definition from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a roster definition from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RosterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Checks the file for definitions the in-memory types would accept
    /// but a roster file should never contain: empty names and ids,
    /// duplicate or inverted or negative bands, and dangling position
    /// references. Salary-band violations are NOT checked here; they
    /// surface as domain errors when the employees are registered.
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("roster.name", &self.roster.name)?;

        let mut position_ids = HashSet::new();
        for position in &self.positions {
            validate_non_empty_string("positions.id", &position.id)?;
            validate_non_empty_string("positions.name", &position.name)?;
            validate_salary_band(
                &format!("positions.{}", position.id),
                position.min_salary,
                position.max_salary,
            )?;
            if !position_ids.insert(position.id.as_str()) {
                return Err(RosterError::InvalidConfigValueError {
                    field: "positions.id".to_string(),
                    value: position.id.clone(),
                    reason: "Duplicate position id".to_string(),
                });
            }
        }

        for employee in &self.employees {
            validate_non_empty_string("employees.id", &employee.id)?;
            validate_non_empty_string("employees.name", &employee.name)?;
            if !position_ids.contains(employee.position.as_str()) {
                return Err(RosterError::InvalidConfigValueError {
                    field: "employees.position".to_string(),
                    value: employee.position.clone(),
                    reason: "Unknown position id".to_string(),
                });
            }
        }

        Ok(())
    }

    fn resolve_position(&self, id: &str) -> Option<Position> {
        self.positions
            .iter()
            .find(|p| p.id == id)
            .map(|p| Position::new(p.id.clone(), p.name.clone(), p.min_salary, p.max_salary))
    }
}

impl RosterSource for RosterConfig {
    fn positions(&self) -> Vec<Position> {
        self.positions
            .iter()
            .map(|p| Position::new(p.id.clone(), p.name.clone(), p.min_salary, p.max_salary))
            .collect()
    }

    fn employees(&self) -> Result<Vec<Employee>> {
        self.employees
            .iter()
            .map(|e| {
                let position = self.resolve_position(&e.position).ok_or_else(|| {
                    RosterError::InvalidConfigValueError {
                        field: "employees.position".to_string(),
                        value: e.position.clone(),
                        reason: "Unknown position id".to_string(),
                    }
                })?;
                Ok(Employee::new(
                    e.id.clone(),
                    e.name.clone(),
                    position,
                    e.salary,
                ))
            })
            .collect()
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
