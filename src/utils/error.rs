use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("salary {salary} is outside the band [{min}, {max}] of position '{position}'")]
    InvalidSalaryError {
        position: String,
        salary: f64,
        min: f64,
        max: f64,
    },

    #[error("no employee with id '{id}' is registered")]
    EmployeeNotFoundError { id: String },

    #[error("an employee with id '{id}' is already registered")]
    DuplicateEmployeeError { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RosterError>;
