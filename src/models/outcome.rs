//! Outcome models returned by the employee service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, Employee, Matricule};

/// The revenue band a sales employee's result falls into.
///
/// Bands are ordered from worst to best. `ratio` below is revenue realized
/// divided by revenue target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// ratio < 0.8: performance falls back to the baseline.
    FarBelowTarget,
    /// 0.8 <= ratio < 0.95: performance drops by 2, never below the baseline.
    BelowTarget,
    /// 0.95 <= ratio <= 1.05: performance is kept, never below the baseline.
    OnTarget,
    /// 1.05 < ratio <= 1.2: performance rises by 1.
    AboveTarget,
    /// ratio > 1.2: performance rises by 4.
    FarAboveTarget,
}

impl PerformanceTier {
    /// Returns the snake_case name used in audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceTier::FarBelowTarget => "far_below_target",
            PerformanceTier::BelowTarget => "below_target",
            PerformanceTier::OnTarget => "on_target",
            PerformanceTier::AboveTarget => "above_target",
            PerformanceTier::FarAboveTarget => "far_above_target",
        }
    }
}

/// The result of hiring an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringOutcome {
    /// Correlation identifier of the hiring request.
    pub correlation_id: Uuid,
    /// When the hire was processed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that processed the hire.
    pub engine_version: String,
    /// The employee as persisted by the store.
    pub employee: Employee,
    /// Complete audit trace of the hiring rules.
    pub audit_trace: AuditTrace,
}

/// The result of a sales performance evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEvaluation {
    /// Correlation identifier of the evaluation request.
    pub correlation_id: Uuid,
    /// The evaluated employee.
    pub matricule: Matricule,
    /// Performance before the evaluation.
    pub previous_performance: u32,
    /// The revenue band that was selected.
    pub tier: PerformanceTier,
    /// Performance after tiering, before the team bonus.
    pub tiered_performance: u32,
    /// Mean performance of the sales team, if any sales employee exists.
    pub team_average: Option<Decimal>,
    /// Whether the team-average bonus was granted.
    pub bonus_applied: bool,
    /// The persisted performance.
    pub final_performance: u32,
    /// Complete audit trace of the evaluation.
    pub audit_trace: AuditTrace,
}
