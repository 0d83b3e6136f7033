//! Team-average performance bonus.
//!
//! A sales employee whose performance strictly exceeds the mean performance
//! of the sales team earns one extra point. The bonus is granted at most once.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Performance added when the team-average bonus applies.
pub const TEAM_AVERAGE_BONUS: u32 = 1;

/// The result of applying the team-average bonus.
#[derive(Debug, Clone)]
pub struct TeamBonusResult {
    /// The performance after the bonus rule.
    pub performance: u32,
    /// Whether the bonus was granted.
    pub bonus_applied: bool,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Applies the team-average bonus to a performance score.
///
/// Returns `performance + 1` when `team_average` is present and strictly
/// below `performance`; otherwise `performance` unchanged.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::apply_team_average_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let above = apply_team_average_bonus(6, Some(Decimal::from_str("4.5").unwrap()), 1);
/// assert_eq!(above.performance, 7);
///
/// let equal = apply_team_average_bonus(6, Some(Decimal::from(6)), 1);
/// assert_eq!(equal.performance, 6);
///
/// let no_team = apply_team_average_bonus(6, None, 1);
/// assert_eq!(no_team.performance, 6);
/// ```
pub fn apply_team_average_bonus(
    performance: u32,
    team_average: Option<Decimal>,
    step_number: u32,
) -> TeamBonusResult {
    let bonus_applied = team_average.is_some_and(|average| Decimal::from(performance) > average);
    let result = if bonus_applied {
        performance.saturating_add(TEAM_AVERAGE_BONUS)
    } else {
        performance
    };

    let reasoning = match team_average {
        None => format!("No team average available; performance stays at {}", performance),
        Some(average) if bonus_applied => format!(
            "Performance {} exceeds team average {}: +{} = {}",
            performance,
            average.round_dp(2).normalize(),
            TEAM_AVERAGE_BONUS,
            result
        ),
        Some(average) => format!(
            "Performance {} does not exceed team average {}; no bonus",
            performance,
            average.round_dp(2).normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "team_average_bonus".to_string(),
        rule_name: "Team Average Bonus".to_string(),
        input: serde_json::json!({
            "performance": performance,
            "team_average": team_average.map(|a| a.normalize().to_string())
        }),
        output: serde_json::json!({
            "performance": result,
            "bonus_applied": bonus_applied
        }),
        reasoning,
    };

    TeamBonusResult {
        performance: result,
        bonus_applied,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bonus_when_above_average() {
        let result = apply_team_average_bonus(6, Some(dec("3.5")), 1);

        assert_eq!(result.performance, 7);
        assert!(result.bonus_applied);
        assert_eq!(result.audit_step.rule_id, "team_average_bonus");
        assert!(result.audit_step.reasoning.contains("exceeds"));
    }

    #[test]
    fn test_no_bonus_when_equal_to_average() {
        let result = apply_team_average_bonus(3, Some(dec("3.0")), 1);

        assert_eq!(result.performance, 3);
        assert!(!result.bonus_applied);
    }

    #[test]
    fn test_no_bonus_when_below_average() {
        let result = apply_team_average_bonus(2, Some(dec("2.0001")), 1);

        assert_eq!(result.performance, 2);
        assert!(!result.bonus_applied);
    }

    #[test]
    fn test_no_bonus_without_average() {
        let result = apply_team_average_bonus(9, None, 1);

        assert_eq!(result.performance, 9);
        assert!(!result.bonus_applied);
        assert!(result.audit_step.reasoning.contains("No team average"));
        assert!(result.audit_step.input["team_average"].is_null());
    }

    #[test]
    fn test_bonus_just_above_average() {
        let result = apply_team_average_bonus(4, Some(dec("3.9999")), 1);

        assert_eq!(result.performance, 5);
    }
}
