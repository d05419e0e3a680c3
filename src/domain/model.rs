use serde::{Deserialize, Serialize};

/// A job title and the inclusive salary band it permits.
///
/// Plain data holder: no field is validated here. A band with
/// `min_salary > max_salary` is representable and simply matches no salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub name: String,
    pub min_salary: f64,
    pub max_salary: f64,
}

impl Position {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        min_salary: f64,
        max_salary: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_salary,
            max_salary,
        }
    }
}

/// A named individual holding one position and one current salary.
///
/// Fields are public on purpose: the data holder carries no business rules,
/// so assigning `salary` or `position` directly skips the band check. The
/// sanctioned mutation path is
/// [`EmployeeManager`](crate::core::manager::EmployeeManager).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
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
}
