//! Annual bonus calculation.
//!
//! Every employee earns a seniority bonus per year of service. Managers
//! receive the base bonus scaled by the manager index; other employees at
//! baseline performance receive the base bonus; employees above baseline have
//! the base bonus scaled by their performance plus the performance index. The
//! total is pro-rated by the part-time ratio.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::base_salary::round_to_cents;
use crate::config::BonusConfig;
use crate::models::{AuditStep, Employee, JobCategory};

/// The result of an annual bonus calculation.
#[derive(Debug, Clone)]
pub struct AnnualBonusResult {
    /// The bonus amount, rounded to the cent.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the annual bonus of an employee as of a given date.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::calculate_annual_bonus;
/// use hr_engine::config::BonusConfig;
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let bonus = BonusConfig {
///     base_bonus: Decimal::from(1000),
///     performance_index: Decimal::new(3, 1),
///     manager_index: Decimal::new(17, 1),
///     seniority_bonus_per_year: Decimal::from(100),
///     base_leave_days: 25,
/// };
/// let employee = Employee {
///     last_name: "Martin".to_string(),
///     first_name: "Louis".to_string(),
///     matricule: "T12345".parse().unwrap(),
///     hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     salary: None,
///     performance: 1,
///     part_time_ratio: Decimal::ONE,
/// };
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let result = calculate_annual_bonus(&employee, as_of, &bonus, 1, 1);
/// assert_eq!(result.amount, Decimal::from(1000));
/// ```
pub fn calculate_annual_bonus(
    employee: &Employee,
    as_of: NaiveDate,
    bonus: &BonusConfig,
    baseline: u32,
    step_number: u32,
) -> AnnualBonusResult {
    let seniority_years = employee.seniority_years(as_of);
    let seniority_bonus = bonus.seniority_bonus_per_year * Decimal::from(seniority_years);

    let (basis, gross) = if employee.is_in_category(JobCategory::Manager) {
        ("manager", bonus.base_bonus * bonus.manager_index + seniority_bonus)
    } else if employee.performance <= baseline {
        ("baseline_performance", bonus.base_bonus + seniority_bonus)
    } else {
        (
            "above_baseline_performance",
            bonus.base_bonus * (Decimal::from(employee.performance) + bonus.performance_index)
                + seniority_bonus,
        )
    };

    let amount = round_to_cents(gross * employee.part_time_ratio);

    let audit_step = AuditStep {
        step_number,
        rule_id: "annual_bonus".to_string(),
        rule_name: "Annual Bonus".to_string(),
        input: serde_json::json!({
            "matricule": employee.matricule.to_string(),
            "performance": employee.performance,
            "seniority_years": seniority_years,
            "part_time_ratio": employee.part_time_ratio.normalize().to_string(),
            "as_of": as_of.to_string()
        }),
        output: serde_json::json!({
            "basis": basis,
            "seniority_bonus": seniority_bonus.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} bonus ${} (including ${} seniority) x {} = ${}",
            basis,
            gross.normalize(),
            seniority_bonus.normalize(),
            employee.part_time_ratio.normalize(),
            amount.normalize()
        ),
    };

    AnnualBonusResult { amount, audit_step }
}
