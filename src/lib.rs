pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::roster::RosterConfig;

pub use crate::core::{loader::RosterLoader, manager::EmployeeManager};
pub use crate::domain::model::{Employee, Position};
pub use crate::utils::error::{Result, RosterError};
