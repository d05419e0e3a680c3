use crate::core::manager::EmployeeManager;
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;

/// Populates an [`EmployeeManager`] from any roster source.
pub struct RosterLoader<S: RosterSource> {
    source: S,
}

impl<S: RosterSource> RosterLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Builds a registry, registering employees in declaration order.
    ///
    /// Every registration goes through [`EmployeeManager::add_employee`],
    /// so band violations and duplicate ids in the source surface as the
    /// usual domain errors.
    pub fn load(&self) -> Result<EmployeeManager> {
        let employees = self.source.employees()?;
        tracing::info!("Registering {} employees", employees.len());

        let mut manager = EmployeeManager::new();
        for employee in employees {
            manager.add_employee(employee)?;
        }

        tracing::info!(
            "Roster loaded: {} employees, total salary {:.2}",
            manager.employees().len(),
            manager.total_salary()
        );
        Ok(manager)
    }
}
