//! Audit trail models.
//!
//! Every rule records an [`AuditStep`] describing its inputs, its output and
//! the reasoning behind the decision. Service operations gather the steps
//! into an [`AuditTrace`].

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while applying the rules.
///
/// Warnings never block an operation; they flag conditions that need
/// attention, such as the matricule sequence nearing its ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a service operation.
///
/// # Example
///
/// ```
/// use hr_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.find_step("team_average_bonus").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated along the way.
    pub warnings: Vec<AuditWarning>,
    /// The total processing duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the first step recorded for the given rule.
    pub fn find_step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Test Rule".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: "test".to_string(),
        }
    }

    #[test]
    fn test_find_step_returns_first_match() {
        let trace = AuditTrace {
            steps: vec![
                create_step(1, "matricule_allocation"),
                create_step(2, "base_salary"),
            ],
            warnings: vec![],
            duration_us: 10,
        };

        let step = trace.find_step("base_salary").unwrap();
        assert_eq!(step.step_number, 2);
        assert!(trace.find_step("unknown").is_none());
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "MATRICULE_HIGH_WATER".to_string(),
            message: "Matricule sequence reached 90000".to_string(),
            severity: "medium".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"MATRICULE_HIGH_WATER\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }
}
