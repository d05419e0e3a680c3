use crate::domain::model::{Employee, Position};
use crate::utils::error::Result;

/// Anything that can produce the contents of a roster: a position catalog
/// and the employees to register.
pub trait RosterSource {
    fn positions(&self) -> Vec<Position>;

    /// Fully-resolved employees, in declaration order. Fails when an
    /// employee references a position the source does not define.
    fn employees(&self) -> Result<Vec<Employee>>;
}
