//! Rule logic for the HR rules engine.
//!
//! This module contains the pure rule functions: matricule allocation, base
//! salary computation, revenue-based performance tiering, the team-average
//! bonus, the annual bonus and salary raises. Each function returns its
//! value together with an audit step.

mod annual_bonus;
mod base_salary;
mod matricule_allocation;
mod performance_tier;
mod salary_raise;
mod team_bonus;

pub use annual_bonus::{AnnualBonusResult, calculate_annual_bonus};
pub use base_salary::{
    BaseSalaryResult, calculate_base_salary, round_to_cents, validate_part_time_ratio,
};
pub use matricule_allocation::{
    DEFAULT_MATRICULE_WARNING_THRESHOLD, MATRICULE_HIGH_WATER_WARNING, MatriculeAllocation,
    allocate_matricule,
};
pub use performance_tier::{
    ABOVE_TARGET_CEILING, ABOVE_TARGET_GAIN, BELOW_TARGET_FLOOR, BELOW_TARGET_PENALTY,
    FAR_ABOVE_TARGET_GAIN, ON_TARGET_CEILING, ON_TARGET_FLOOR, TieredPerformanceResult,
    apply_tier, calculate_tiered_performance, classify_revenue,
};
pub use salary_raise::{SalaryRaiseResult, apply_salary_raise};
pub use team_bonus::{TEAM_AVERAGE_BONUS, TeamBonusResult, apply_team_average_bonus};
