//! Matricule allocation functionality.
//!
//! This module derives the next matricule from the highest sequence issued so
//! far. The sequence is shared by every job category. The collision check
//! against the employee store happens in the service, after allocation.

use serde::{Deserialize, Serialize};

use crate::config::MatriculePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, JobCategory, MATRICULE_CEILING, Matricule};

/// Default sequence number from which allocations raise a high-water warning.
pub const DEFAULT_MATRICULE_WARNING_THRESHOLD: u32 = 90_000;

/// Warning code recorded when the sequence reaches the high-water mark.
pub const MATRICULE_HIGH_WATER_WARNING: &str = "MATRICULE_HIGH_WATER";

/// The result of allocating a matricule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatriculeAllocation {
    /// The allocated matricule.
    pub matricule: Matricule,
    /// True when the sequence reached the warning threshold.
    pub high_water_reached: bool,
    /// The warning to surface when the high-water mark is reached.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this allocation.
    pub audit_step: AuditStep,
}

/// Allocates the next matricule for a job category.
///
/// # Arguments
///
/// * `last_suffix` - Numeric suffix of the highest issued matricule, if any
/// * `category` - The job category providing the prefix letter
/// * `policy` - Seed and warning threshold
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a [`MatriculeAllocation`], or an error if:
/// - The stored suffix is not a number (`InvalidMatricule`)
/// - The next sequence would reach 100000 (`MatriculeExhausted`)
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::allocate_matricule;
/// use hr_engine::config::MatriculePolicy;
/// use hr_engine::models::JobCategory;
///
/// let policy = MatriculePolicy::default();
///
/// let first = allocate_matricule(None, JobCategory::Technician, &policy, 1).unwrap();
/// assert_eq!(first.matricule.to_string(), "T00001");
///
/// let next = allocate_matricule(Some("00041"), JobCategory::Commercial, &policy, 1).unwrap();
/// assert_eq!(next.matricule.to_string(), "C00042");
/// assert!(!next.high_water_reached);
/// ```
pub fn allocate_matricule(
    last_suffix: Option<&str>,
    category: JobCategory,
    policy: &MatriculePolicy,
    step_number: u32,
) -> EngineResult<MatriculeAllocation> {
    let (previous, source) = match last_suffix {
        Some(suffix) => (suffix, "last_issued"),
        None => (policy.initial.as_str(), "initial_seed"),
    };

    let previous_sequence: u32 = previous
        .parse()
        .map_err(|_| EngineError::InvalidMatricule {
            value: previous.to_string(),
            message: "matricule suffix is not a number".to_string(),
        })?;

    let sequence = previous_sequence.saturating_add(1);
    if sequence >= MATRICULE_CEILING {
        return Err(EngineError::MatriculeExhausted {
            sequence,
            ceiling: MATRICULE_CEILING,
        });
    }

    let matricule = Matricule::new(category, sequence)?;
    let high_water_reached = sequence >= policy.warning_threshold;

    let warning = high_water_reached.then(|| AuditWarning {
        code: MATRICULE_HIGH_WATER_WARNING.to_string(),
        message: format!(
            "Matricule sequence {} reached the {} threshold; {} numbers remain",
            sequence,
            policy.warning_threshold,
            MATRICULE_CEILING - 1 - sequence
        ),
        severity: "medium".to_string(),
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "matricule_allocation".to_string(),
        rule_name: "Matricule Allocation".to_string(),
        input: serde_json::json!({
            "previous_suffix": previous,
            "source": source,
            "category": category.code().to_string()
        }),
        output: serde_json::json!({
            "matricule": matricule.to_string(),
            "sequence": sequence,
            "high_water_reached": high_water_reached
        }),
        reasoning: format!(
            "{} + 1 = {}, prefixed with '{}' gives {}",
            previous_sequence,
            sequence,
            category.code(),
            matricule
        ),
    };

    Ok(MatriculeAllocation {
        matricule,
        high_water_reached,
        warning,
        audit_step,
    })
}
