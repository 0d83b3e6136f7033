//! Employee store abstraction.
//!
//! The rules never touch persistence directly. They go through the
//! [`EmployeeRepository`] trait, which exposes the three queries and the
//! single save the rules need. Hosts plug in their database; tests and
//! benches use [`InMemoryEmployeeRepository`].
//!
//! Uniqueness of matricules under concurrent hiring is the store's job: the
//! service checks for collisions before saving, but only a uniqueness
//! constraint in the store can arbitrate two racing hires.

mod memory;

pub use memory::InMemoryEmployeeRepository;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::Employee;

/// Data access operations consumed by the employee service.
///
/// Every operation returns [`EngineResult`] so that store failures propagate
/// unchanged to the caller (typically as `EngineError::Repository`).
pub trait EmployeeRepository {
    /// Returns the numeric suffix of the highest matricule issued across all
    /// job categories, or `None` when no employee exists.
    fn find_last_matricule(&self) -> EngineResult<Option<String>>;

    /// Looks up an employee by exact matricule.
    fn find_by_matricule(&self, matricule: &str) -> EngineResult<Option<Employee>>;

    /// Returns the mean performance of employees whose matricule starts with
    /// `prefix`, or `None` when there are none.
    fn avg_performance_where_matricule_starts_with(
        &self,
        prefix: &str,
    ) -> EngineResult<Option<Decimal>>;

    /// Inserts or replaces an employee and returns the stored record.
    fn save(&mut self, employee: Employee) -> EngineResult<Employee>;
}
