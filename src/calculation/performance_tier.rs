//! Revenue-based performance tiering for sales employees.
//!
//! The ratio of realized revenue to target revenue selects one of five
//! tiers. Bounds are compared as `realized` against `target * bound` in exact
//! decimal arithmetic, so a zero target needs no special case: zero revenue
//! is on target and any revenue is far above it.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PerformanceTier};

/// Lower bound of the below-target tier (80% of target).
pub const BELOW_TARGET_FLOOR: Decimal = Decimal::from_parts(80, 0, 0, false, 2);

/// Lower bound of the on-target tier (95% of target).
pub const ON_TARGET_FLOOR: Decimal = Decimal::from_parts(95, 0, 0, false, 2);

/// Upper bound of the on-target tier (105% of target).
pub const ON_TARGET_CEILING: Decimal = Decimal::from_parts(105, 0, 0, false, 2);

/// Upper bound of the above-target tier (120% of target).
pub const ABOVE_TARGET_CEILING: Decimal = Decimal::from_parts(120, 0, 0, false, 2);

/// Performance lost in the below-target tier.
pub const BELOW_TARGET_PENALTY: u32 = 2;

/// Performance gained in the above-target tier.
pub const ABOVE_TARGET_GAIN: u32 = 1;

/// Performance gained in the far-above-target tier.
pub const FAR_ABOVE_TARGET_GAIN: u32 = 4;

/// Selects the tier for a realized/target revenue pair.
///
/// Tiers are tested in order and the first match wins:
///
/// | Ratio | Tier |
/// |---|---|
/// | ratio < 0.8 | `FarBelowTarget` |
/// | 0.8 <= ratio < 0.95 | `BelowTarget` |
/// | 0.95 <= ratio <= 1.05 | `OnTarget` |
/// | 1.05 < ratio <= 1.2 | `AboveTarget` |
/// | ratio > 1.2 | `FarAboveTarget` |
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::classify_revenue;
/// use hr_engine::models::PerformanceTier;
///
/// assert_eq!(classify_revenue(850, 1000), PerformanceTier::BelowTarget);
/// assert_eq!(classify_revenue(1050, 1000), PerformanceTier::OnTarget);
/// assert_eq!(classify_revenue(1300, 1000), PerformanceTier::FarAboveTarget);
/// ```
pub fn classify_revenue(revenue_realized: u64, revenue_target: u64) -> PerformanceTier {
    let realized = Decimal::from(revenue_realized);
    let target = Decimal::from(revenue_target);

    if realized < target * BELOW_TARGET_FLOOR {
        PerformanceTier::FarBelowTarget
    } else if realized < target * ON_TARGET_FLOOR {
        PerformanceTier::BelowTarget
    } else if realized <= target * ON_TARGET_CEILING {
        PerformanceTier::OnTarget
    } else if realized <= target * ABOVE_TARGET_CEILING {
        PerformanceTier::AboveTarget
    } else {
        PerformanceTier::FarAboveTarget
    }
}

/// Applies a tier to the current performance score.
pub fn apply_tier(tier: PerformanceTier, current: u32, baseline: u32) -> u32 {
    match tier {
        PerformanceTier::FarBelowTarget => baseline,
        PerformanceTier::BelowTarget => current.saturating_sub(BELOW_TARGET_PENALTY).max(baseline),
        PerformanceTier::OnTarget => current.max(baseline),
        PerformanceTier::AboveTarget => current.saturating_add(ABOVE_TARGET_GAIN),
        PerformanceTier::FarAboveTarget => current.saturating_add(FAR_ABOVE_TARGET_GAIN),
    }
}

/// The result of tiering a sales employee's performance.
#[derive(Debug, Clone)]
pub struct TieredPerformanceResult {
    /// The selected tier.
    pub tier: PerformanceTier,
    /// The performance after tiering.
    pub performance: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the new performance score from revenue results.
///
/// # Arguments
///
/// * `current` - The employee's performance before evaluation
/// * `revenue_realized` - Revenue actually generated
/// * `revenue_target` - Revenue objective
/// * `baseline` - The baseline performance score
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::calculate_tiered_performance;
/// use hr_engine::models::PerformanceTier;
///
/// let result = calculate_tiered_performance(5, 850, 1000, 1, 1);
/// assert_eq!(result.tier, PerformanceTier::BelowTarget);
/// assert_eq!(result.performance, 3);
/// ```
pub fn calculate_tiered_performance(
    current: u32,
    revenue_realized: u64,
    revenue_target: u64,
    baseline: u32,
    step_number: u32,
) -> TieredPerformanceResult {
    let tier = classify_revenue(revenue_realized, revenue_target);
    let performance = apply_tier(tier, current, baseline);

    let ratio = if revenue_target == 0 {
        None
    } else {
        Some((Decimal::from(revenue_realized) / Decimal::from(revenue_target)).round_dp(4))
    };
    let ratio_text = ratio
        .map(|r| r.normalize().to_string())
        .unwrap_or_else(|| "n/a (zero target)".to_string());

    let audit_step = AuditStep {
        step_number,
        rule_id: "performance_tier".to_string(),
        rule_name: "Revenue Performance Tier".to_string(),
        input: serde_json::json!({
            "current_performance": current,
            "revenue_realized": revenue_realized,
            "revenue_target": revenue_target,
            "baseline": baseline
        }),
        output: serde_json::json!({
            "ratio": ratio.map(|r| r.normalize().to_string()),
            "tier": tier.as_str(),
            "performance": performance
        }),
        reasoning: format!(
            "Revenue ratio {} falls in tier '{}': performance {} -> {}",
            ratio_text,
            tier.as_str(),
            current,
            performance
        ),
    };

    TieredPerformanceResult {
        tier,
        performance,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_below_80_percent_falls_to_baseline() {
        let result = calculate_tiered_performance(8, 799, 1000, 1, 1);
        assert_eq!(result.tier, PerformanceTier::FarBelowTarget);
        assert_eq!(result.performance, 1);
    }

    #[test]
    fn test_ratio_exactly_80_percent_is_below_target() {
        assert_eq!(classify_revenue(800, 1000), PerformanceTier::BelowTarget);
    }

    #[test]
    fn test_below_target_loses_two() {
        let result = calculate_tiered_performance(5, 850, 1000, 1, 1);
        assert_eq!(result.tier, PerformanceTier::BelowTarget);
        assert_eq!(result.performance, 3);
    }

    #[test]
    fn test_below_target_never_drops_under_baseline() {
        let result = calculate_tiered_performance(2, 850, 1000, 1, 1);
        assert_eq!(result.performance, 1);

        let result = calculate_tiered_performance(0, 850, 1000, 1, 1);
        assert_eq!(result.performance, 1);
    }

    #[test]
    fn test_ratio_exactly_95_percent_is_on_target() {
        assert_eq!(classify_revenue(949, 1000), PerformanceTier::BelowTarget);
        assert_eq!(classify_revenue(950, 1000), PerformanceTier::OnTarget);
    }

    #[test]
    fn test_on_target_keeps_performance() {
        let result = calculate_tiered_performance(4, 1000, 1000, 1, 1);
        assert_eq!(result.tier, PerformanceTier::OnTarget);
        assert_eq!(result.performance, 4);
    }

    #[test]
    fn test_on_target_lifts_to_baseline() {
        let result = calculate_tiered_performance(0, 1000, 1000, 1, 1);
        assert_eq!(result.performance, 1);
    }

    #[test]
    fn test_ratio_exactly_105_percent_is_on_target() {
        assert_eq!(classify_revenue(1050, 1000), PerformanceTier::OnTarget);
        assert_eq!(classify_revenue(1051, 1000), PerformanceTier::AboveTarget);
    }

    #[test]
    fn test_above_target_gains_one() {
        let result = calculate_tiered_performance(3, 1100, 1000, 1, 1);
        assert_eq!(result.tier, PerformanceTier::AboveTarget);
        assert_eq!(result.performance, 4);
    }

    #[test]
    fn test_ratio_exactly_120_percent_is_above_target() {
        assert_eq!(classify_revenue(1200, 1000), PerformanceTier::AboveTarget);
        assert_eq!(classify_revenue(1201, 1000), PerformanceTier::FarAboveTarget);
    }

    #[test]
    fn test_far_above_target_gains_four() {
        let result = calculate_tiered_performance(2, 1300, 1000, 1, 1);
        assert_eq!(result.tier, PerformanceTier::FarAboveTarget);
        assert_eq!(result.performance, 6);
    }

    #[test]
    fn test_zero_target_with_zero_revenue_is_on_target() {
        assert_eq!(classify_revenue(0, 0), PerformanceTier::OnTarget);
    }

    #[test]
    fn test_zero_target_with_revenue_is_far_above() {
        let result = calculate_tiered_performance(1, 10, 0, 1, 1);
        assert_eq!(result.tier, PerformanceTier::FarAboveTarget);
        assert_eq!(result.performance, 5);
        assert!(result.audit_step.reasoning.contains("zero target"));
    }

    #[test]
    fn test_audit_step_records_ratio_and_tier() {
        let result = calculate_tiered_performance(5, 850, 1000, 1, 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "performance_tier");
        assert_eq!(result.audit_step.output["ratio"], "0.85");
        assert_eq!(result.audit_step.output["tier"], "below_target");
        assert_eq!(result.audit_step.output["performance"], 3);
    }
}
