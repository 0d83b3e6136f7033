//! Percentage salary raise.

use rust_decimal::Decimal;

use super::base_salary::round_to_cents;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of a salary raise.
#[derive(Debug, Clone)]
pub struct SalaryRaiseResult {
    /// The salary before the raise.
    pub previous_salary: Decimal,
    /// The raised salary, rounded to the cent.
    pub salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Raises a salary by a percentage.
///
/// # Returns
///
/// Returns the raised salary, or a `Validation` error if the percentage is
/// negative or no salary is set.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::apply_salary_raise;
/// use rust_decimal::Decimal;
///
/// let result = apply_salary_raise(Some(Decimal::from(1000)), Decimal::from(10), 1).unwrap();
/// assert_eq!(result.salary, Decimal::from(1100));
/// ```
pub fn apply_salary_raise(
    salary: Option<Decimal>,
    percentage: Decimal,
    step_number: u32,
) -> EngineResult<SalaryRaiseResult> {
    if percentage < Decimal::ZERO {
        return Err(EngineError::validation(format!(
            "raise percentage must not be negative, got {}",
            percentage
        )));
    }
    let previous_salary =
        salary.ok_or_else(|| EngineError::validation("employee has no salary to raise"))?;

    let factor = Decimal::ONE + percentage / Decimal::ONE_HUNDRED;
    let raised = round_to_cents(previous_salary * factor);

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_raise".to_string(),
        rule_name: "Salary Raise".to_string(),
        input: serde_json::json!({
            "salary": previous_salary.to_string(),
            "percentage": percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "salary": raised.to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}",
            previous_salary,
            factor.normalize(),
            raised
        ),
    };

    Ok(SalaryRaiseResult {
        previous_salary,
        salary: raised,
        audit_step,
    })
}
