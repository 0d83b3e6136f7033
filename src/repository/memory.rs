//! In-memory employee store.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::EmployeeRepository;
use crate::error::EngineResult;
use crate::models::{Employee, MATRICULE_DIGITS};

/// An [`EmployeeRepository`] backed by an ordered map keyed by matricule.
///
/// # Example
///
/// ```
/// use hr_engine::repository::{EmployeeRepository, InMemoryEmployeeRepository};
///
/// let repository = InMemoryEmployeeRepository::new();
/// assert_eq!(repository.find_last_matricule().unwrap(), None);
/// assert!(repository.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: BTreeMap<String, Employee>,
    save_count: usize,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with employees. Seeding does not count
    /// as saving.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: employees
                .into_iter()
                .map(|employee| (employee.matricule.to_string(), employee))
                .collect(),
            save_count: 0,
        }
    }

    /// Returns the employee holding a matricule.
    pub fn get(&self, matricule: &str) -> Option<&Employee> {
        self.employees.get(matricule)
    }

    /// Returns the number of stored employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true when no employee is stored.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns how many times [`EmployeeRepository::save`] was called.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_last_matricule(&self) -> EngineResult<Option<String>> {
        Ok(self
            .employees
            .values()
            .map(|employee| employee.matricule.sequence())
            .max()
            .map(|sequence| format!("{:0width$}", sequence, width = MATRICULE_DIGITS)))
    }

    fn find_by_matricule(&self, matricule: &str) -> EngineResult<Option<Employee>> {
        Ok(self.employees.get(matricule).cloned())
    }

    fn avg_performance_where_matricule_starts_with(
        &self,
        prefix: &str,
    ) -> EngineResult<Option<Decimal>> {
        let (sum, count) = self
            .employees
            .values()
            .filter(|employee| employee.matricule.to_string().starts_with(prefix))
            .fold((Decimal::ZERO, 0u32), |(sum, count), employee| {
                (sum + Decimal::from(employee.performance), count + 1)
            });

        if count == 0 {
            return Ok(None);
        }
        Ok(Some(sum / Decimal::from(count)))
    }

    fn save(&mut self, employee: Employee) -> EngineResult<Employee> {
        debug!(matricule = %employee.matricule, "Saving employee");
        self.save_count += 1;
        self.employees
            .insert(employee.matricule.to_string(), employee.clone());
        Ok(employee)
    }
}
