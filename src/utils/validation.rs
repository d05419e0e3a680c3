use crate::domain::model::Position;
use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// True iff `salary` falls inside the position's inclusive band.
///
/// Pure comparison: a band with `min_salary > max_salary` matches no
/// salary at all, and a band with a negative `min_salary` admits negative
/// salaries.
pub fn salary_within_band(position: &Position, salary: f64) -> bool {
    position.min_salary <= salary && salary <= position.max_salary
}

/// Band check that reports a violation as the domain error.
pub fn ensure_salary_within_band(position: &Position, salary: f64) -> Result<()> {
    if salary_within_band(position, salary) {
        Ok(())
    } else {
        Err(RosterError::InvalidSalaryError {
            position: position.name.clone(),
            salary,
            min: position.min_salary,
            max: position.max_salary,
        })
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_salary_band(field_name: &str, min: f64, max: f64) -> Result<()> {
    if min < 0.0 || max < 0.0 {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", min, max),
            reason: "Salary bounds cannot be negative".to_string(),
        });
    }
    if min > max {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", min, max),
            reason: "Minimum salary cannot exceed maximum salary".to_string(),
        });
    }
    Ok(())
}
