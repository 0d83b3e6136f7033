//! Base salary calculation for new hires.
//!
//! The salary is the company base salary scaled by the education
//! coefficient and the part-time ratio, rounded half-up to the cent.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CompanyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EducationLevel};

/// Rounds an amount to 2 decimal places, halves rounding up.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("2368.432").unwrap()), Decimal::from_str("2368.43").unwrap());
/// assert_eq!(round_to_cents(Decimal::from_str("1.005").unwrap()), Decimal::from_str("1.01").unwrap());
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Checks that a part-time ratio is present and within (0, 1].
pub fn validate_part_time_ratio(part_time_ratio: Option<Decimal>) -> EngineResult<Decimal> {
    let ratio = part_time_ratio
        .ok_or_else(|| EngineError::validation("part-time ratio is mandatory"))?;

    if ratio <= Decimal::ZERO || ratio > Decimal::ONE {
        return Err(EngineError::validation(format!(
            "part-time ratio must be greater than 0 and at most 1, got {}",
            ratio
        )));
    }
    Ok(ratio)
}

/// The result of a base salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct BaseSalaryResult {
    /// The monthly salary, rounded to the cent.
    pub salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the base salary of a new hire.
///
/// `salary = base_salary * coefficient[education] * part_time_ratio`,
/// rounded half-up to 2 decimal places.
///
/// # Returns
///
/// Returns a `BaseSalaryResult`, or an error if:
/// - The part-time ratio is absent or outside (0, 1] (`Validation`)
/// - No coefficient is configured for the level (`EducationCoefficientNotFound`)
pub fn calculate_base_salary(
    education: EducationLevel,
    part_time_ratio: Option<Decimal>,
    config: &CompanyConfig,
    step_number: u32,
) -> EngineResult<BaseSalaryResult> {
    let ratio = validate_part_time_ratio(part_time_ratio)?;

    let coefficient = config.get_education_coefficient(education)?;

    let base_salary = config.base_salary();
    let raw = base_salary * coefficient * ratio;
    let salary = round_to_cents(raw);

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_salary".to_string(),
        rule_name: "Base Salary".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "education_level": education.as_str(),
            "coefficient": coefficient.normalize().to_string(),
            "part_time_ratio": ratio.normalize().to_string()
        }),
        output: serde_json::json!({
            "salary": salary.to_string()
        }),
        reasoning: format!(
            "${} x {} x {} = ${} rounded to ${}",
            base_salary,
            coefficient.normalize(),
            ratio.normalize(),
            raw.normalize(),
            salary
        ),
    };

    Ok(BaseSalaryResult { salary, audit_step })
}
