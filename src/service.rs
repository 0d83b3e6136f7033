//! Employee service: the entry points of the HR rules engine.
//!
//! The service sequences the pure rules in [`crate::calculation`] around the
//! queries and saves of an [`EmployeeRepository`], and emits `tracing`
//! events at the observable points of each flow:
//!
//! - `info`: hiring started and completed, team bonus granted
//! - `warn`: matricule high-water mark reached, rejected input
//! - `error`: matricule space exhausted, duplicate matricule
//!
//! Records are saved only after every check has passed, and at most once per
//! operation.

use std::time::Instant;

use chrono::{Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{
    AnnualBonusResult, allocate_matricule, apply_salary_raise, apply_team_average_bonus,
    calculate_annual_bonus, calculate_base_salary, calculate_tiered_performance,
    validate_part_time_ratio,
};
use crate::config::{CompanyConfig, ConfigLoader};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, EducationLevel, Employee, HiringOutcome, JobCategory,
    PerformanceEvaluation,
};
use crate::repository::EmployeeRepository;

/// The job category whose employees are evaluated on revenue.
pub const SALES_CATEGORY: JobCategory = JobCategory::Commercial;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Applies the hiring and performance rules against an employee store.
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
/// use hr_engine::models::{EducationLevel, JobCategory};
/// use hr_engine::repository::InMemoryEmployeeRepository;
/// use hr_engine::service::EmployeeService;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/company")?;
/// let mut service = EmployeeService::new(InMemoryEmployeeRepository::new(), config);
///
/// let outcome = service.hire_employee(
///     "Durand",
///     "Alice",
///     JobCategory::Commercial,
///     EducationLevel::Master,
///     Some(Decimal::ONE),
/// )?;
/// assert_eq!(outcome.employee.matricule, "C00001");
/// # Ok::<(), hr_engine::error::EngineError>(())
/// ```
pub struct EmployeeService<R> {
    repository: R,
    config: ConfigLoader,
    today: fn() -> NaiveDate,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service over a store and a loaded configuration.
    pub fn new(repository: R, config: ConfigLoader) -> Self {
        Self {
            repository,
            config,
            today: local_today,
        }
    }

    /// Replaces the clock used to stamp hire dates.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Returns the underlying store.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Consumes the service and returns the store.
    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Returns the company configuration.
    pub fn config(&self) -> &CompanyConfig {
        self.config.config()
    }

    /// Hires an employee.
    ///
    /// Allocates the next matricule, checks it is free, computes the base
    /// salary and saves the new employee at baseline performance.
    ///
    /// # Errors
    ///
    /// - `Validation` if a name is blank or the part-time ratio is absent or
    ///   outside (0, 1]
    /// - `MatriculeExhausted` if sequence 99999 has been issued
    /// - `DuplicateMatricule` if the allocated matricule is already taken
    /// - `InvalidMatricule` if the store holds a malformed suffix
    /// - any error returned by the store
    pub fn hire_employee(
        &mut self,
        last_name: &str,
        first_name: &str,
        category: JobCategory,
        education: EducationLevel,
        part_time_ratio: Option<Decimal>,
    ) -> EngineResult<HiringOutcome> {
        let start_time = Instant::now();
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            category = %category.code(),
            education = education.as_str(),
            "Hiring employee"
        );

        let ratio = validate_hiring_input(last_name, first_name, part_time_ratio).inspect_err(
            |err| warn!(correlation_id = %correlation_id, error = %err, "Hiring rejected"),
        )?;

        let mut steps: Vec<AuditStep> = Vec::new();
        let mut warnings: Vec<AuditWarning> = Vec::new();
        let config = self.config.config();

        let last_suffix = self.repository.find_last_matricule()?;
        let allocation = allocate_matricule(
            last_suffix.as_deref(),
            category,
            config.matricule_policy(),
            1,
        )
        .inspect_err(|err| {
            error!(correlation_id = %correlation_id, error = %err, "Matricule allocation failed")
        })?;

        let matricule = allocation.matricule;
        if let Some(warning) = allocation.warning {
            warn!(
                correlation_id = %correlation_id,
                matricule = %matricule,
                threshold = config.matricule_policy().warning_threshold,
                "Matricule sequence reached the high-water mark"
            );
            warnings.push(warning);
        }
        steps.push(allocation.audit_step);

        if self
            .repository
            .find_by_matricule(&matricule.to_string())?
            .is_some()
        {
            error!(
                correlation_id = %correlation_id,
                matricule = %matricule,
                "Allocated matricule already exists"
            );
            return Err(EngineError::DuplicateMatricule {
                matricule: matricule.to_string(),
            });
        }

        let salary = calculate_base_salary(education, Some(ratio), config, 2)?;
        steps.push(salary.audit_step);

        let employee = Employee {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            matricule,
            hire_date: (self.today)(),
            salary: Some(salary.salary),
            performance: config.performance_baseline(),
            part_time_ratio: ratio,
        };
        let employee = self.repository.save(employee)?;

        let duration = start_time.elapsed();
        info!(
            correlation_id = %correlation_id,
            matricule = %employee.matricule,
            salary = %salary.salary,
            duration_us = duration.as_micros() as u64,
            "Employee hired"
        );

        Ok(HiringOutcome {
            correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee,
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us: duration.as_micros() as u64,
            },
        })
    }

    /// Re-evaluates a sales employee's performance from revenue results and
    /// saves it.
    ///
    /// Inputs are checked in order and the first failure is returned.
    ///
    /// # Errors
    ///
    /// - `Validation` if the realized revenue is absent or negative
    /// - `Validation` if the target revenue is absent or negative
    /// - `Validation` if the matricule is absent or not a sales matricule
    /// - `EmployeeNotFound` if no employee holds the matricule
    /// - any error returned by the store
    pub fn update_performance(
        &mut self,
        matricule: Option<&str>,
        revenue_realized: Option<i64>,
        revenue_target: Option<i64>,
    ) -> EngineResult<PerformanceEvaluation> {
        let start_time = Instant::now();
        let correlation_id = Uuid::new_v4();

        let (matricule, realized, target) =
            validate_performance_input(matricule, revenue_realized, revenue_target).inspect_err(
                |err| {
                    warn!(correlation_id = %correlation_id, error = %err, "Performance update rejected")
                },
            )?;

        let mut employee = self
            .repository
            .find_by_matricule(matricule)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                matricule: matricule.to_string(),
            })?;

        let baseline = self.config.config().performance_baseline();
        let previous_performance = employee.performance;
        let tiered = calculate_tiered_performance(previous_performance, realized, target, baseline, 1);

        let team_average = self
            .repository
            .avg_performance_where_matricule_starts_with(&SALES_CATEGORY.code().to_string())?;
        let bonus = apply_team_average_bonus(tiered.performance, team_average, 2);
        if bonus.bonus_applied {
            info!(
                correlation_id = %correlation_id,
                matricule = %matricule,
                performance = bonus.performance,
                "Team average bonus applied"
            );
        }

        employee.performance = bonus.performance;
        let employee = self.repository.save(employee)?;

        let duration = start_time.elapsed();
        info!(
            correlation_id = %correlation_id,
            matricule = %employee.matricule,
            tier = tiered.tier.as_str(),
            previous = previous_performance,
            performance = employee.performance,
            duration_us = duration.as_micros() as u64,
            "Performance updated"
        );

        Ok(PerformanceEvaluation {
            correlation_id,
            matricule: employee.matricule,
            previous_performance,
            tier: tiered.tier,
            tiered_performance: tiered.performance,
            team_average,
            bonus_applied: bonus.bonus_applied,
            final_performance: employee.performance,
            audit_trace: AuditTrace {
                steps: vec![tiered.audit_step, bonus.audit_step],
                warnings: vec![],
                duration_us: duration.as_micros() as u64,
            },
        })
    }

    /// Applies the team-average bonus to a performance value.
    ///
    /// Returns `performance + 1` when it strictly exceeds the mean
    /// performance of sales employees, `performance` otherwise.
    ///
    /// # Errors
    ///
    /// - `Validation` if `performance` is absent
    /// - any error returned by the store
    pub fn apply_performance_bonus(&self, performance: Option<u32>) -> EngineResult<u32> {
        let start_time = Instant::now();
        let correlation_id = Uuid::new_v4();

        let performance = performance
            .ok_or_else(|| EngineError::validation("performance is mandatory"))
            .inspect_err(
                |err| warn!(correlation_id = %correlation_id, error = %err, "Bonus rejected"),
            )?;

        let team_average = self
            .repository
            .avg_performance_where_matricule_starts_with(&SALES_CATEGORY.code().to_string())?;
        let bonus = apply_team_average_bonus(performance, team_average, 1);
        if bonus.bonus_applied {
            info!(
                correlation_id = %correlation_id,
                performance,
                result = bonus.performance,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Team average bonus applied"
            );
        }
        Ok(bonus.performance)
    }

    /// Computes an employee's annual bonus as of a date.
    pub fn annual_bonus(&self, matricule: &str, as_of: NaiveDate) -> EngineResult<AnnualBonusResult> {
        let employee = self.require_employee(matricule)?;
        let config = self.config.config();
        Ok(calculate_annual_bonus(
            &employee,
            as_of,
            config.bonus(),
            config.performance_baseline(),
            1,
        ))
    }

    /// Returns an employee's paid leave entitlement as of a date.
    pub fn leave_days(&self, matricule: &str, as_of: NaiveDate) -> EngineResult<u32> {
        let employee = self.require_employee(matricule)?;
        Ok(employee.leave_days(as_of, self.config.config().bonus().base_leave_days))
    }

    /// Raises an employee's salary by a percentage and saves it.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if no employee holds the matricule
    /// - `Validation` if the percentage is negative or no salary is set
    pub fn raise_salary(&mut self, matricule: &str, percentage: Decimal) -> EngineResult<Employee> {
        let start_time = Instant::now();
        let correlation_id = Uuid::new_v4();

        let mut employee = self.require_employee(matricule)?;
        let raise = apply_salary_raise(employee.salary, percentage, 1).inspect_err(|err| {
            warn!(correlation_id = %correlation_id, matricule, error = %err, "Salary raise rejected")
        })?;

        employee.salary = Some(raise.salary);
        let employee = self.repository.save(employee)?;
        info!(
            correlation_id = %correlation_id,
            matricule = %employee.matricule,
            previous = %raise.previous_salary,
            salary = %raise.salary,
            duration_us = start_time.elapsed().as_micros() as u64,
            "Salary raised"
        );
        Ok(employee)
    }

    fn require_employee(&self, matricule: &str) -> EngineResult<Employee> {
        self.repository
            .find_by_matricule(matricule)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                matricule: matricule.to_string(),
            })
    }
}

fn validate_hiring_input(
    last_name: &str,
    first_name: &str,
    part_time_ratio: Option<Decimal>,
) -> EngineResult<Decimal> {
    if last_name.trim().is_empty() {
        return Err(EngineError::validation("last name must not be blank"));
    }
    if first_name.trim().is_empty() {
        return Err(EngineError::validation("first name must not be blank"));
    }
    validate_part_time_ratio(part_time_ratio)
}

fn validate_performance_input(
    matricule: Option<&str>,
    revenue_realized: Option<i64>,
    revenue_target: Option<i64>,
) -> EngineResult<(&str, u64, u64)> {
    let realized = revenue_realized
        .and_then(|value| u64::try_from(value).ok())
        .ok_or_else(|| {
            EngineError::validation("revenue realized must be present and not negative")
        })?;

    let target = revenue_target
        .and_then(|value| u64::try_from(value).ok())
        .ok_or_else(|| EngineError::validation("revenue target must be present and not negative"))?;

    let matricule = matricule
        .filter(|m| m.starts_with(SALES_CATEGORY.code()))
        .ok_or_else(|| {
            EngineError::validation(format!(
                "matricule must be present and start with '{}'",
                SALES_CATEGORY.code()
            ))
        })?;

    Ok((matricule, realized, target))
}
