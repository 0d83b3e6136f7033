//! Configuration types for the company rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::calculation::DEFAULT_MATRICULE_WARNING_THRESHOLD;
use crate::error::{EngineError, EngineResult};
use crate::models::EducationLevel;

/// Metadata about the company whose rules are configured.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// Short code of the company.
    pub code: String,
    /// The human-readable name of the company.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
}

fn default_matricule_initial() -> String {
    "00000".to_string()
}

fn default_warning_threshold() -> u32 {
    DEFAULT_MATRICULE_WARNING_THRESHOLD
}

/// How matricules are allocated.
#[derive(Debug, Clone, Deserialize)]
pub struct MatriculePolicy {
    /// Seed used when no employee exists yet.
    #[serde(default = "default_matricule_initial")]
    pub initial: String,
    /// Sequence number from which allocations emit a high-water warning.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: u32,
}

impl Default for MatriculePolicy {
    fn default() -> Self {
        Self {
            initial: default_matricule_initial(),
            warning_threshold: default_warning_threshold(),
        }
    }
}

/// Structure of company.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyFile {
    /// Company metadata.
    pub company: CompanyMetadata,
    /// Monthly base salary before the education coefficient.
    pub base_salary: Decimal,
    /// Baseline performance score.
    pub performance_baseline: u32,
    /// Matricule allocation policy.
    #[serde(default)]
    pub matricule: MatriculePolicy,
}

/// Structure of education.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationConfig {
    /// Salary coefficient for every education level.
    pub coefficients: HashMap<EducationLevel, Decimal>,
}

/// Annual bonus and leave parameters from bonus.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusConfig {
    /// Annual bonus paid to a baseline employee.
    pub base_bonus: Decimal,
    /// Added to the performance score when bonifying above-baseline employees.
    pub performance_index: Decimal,
    /// Multiplier applied to the base bonus for managers.
    pub manager_index: Decimal,
    /// Bonus paid per year of seniority.
    pub seniority_bonus_per_year: Decimal,
    /// Paid leave days before seniority is added.
    pub base_leave_days: u32,
}

/// The complete company configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CompanyConfig {
    metadata: CompanyMetadata,
    base_salary: Decimal,
    performance_baseline: u32,
    matricule: MatriculePolicy,
    coefficients: HashMap<EducationLevel, Decimal>,
    bonus: BonusConfig,
}

impl CompanyConfig {
    /// Creates a new CompanyConfig from its component parts.
    pub fn new(
        metadata: CompanyMetadata,
        base_salary: Decimal,
        performance_baseline: u32,
        matricule: MatriculePolicy,
        coefficients: HashMap<EducationLevel, Decimal>,
        bonus: BonusConfig,
    ) -> Self {
        Self {
            metadata,
            base_salary,
            performance_baseline,
            matricule,
            coefficients,
            bonus,
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.metadata
    }

    /// Returns the monthly base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Returns the baseline performance score.
    pub fn performance_baseline(&self) -> u32 {
        self.performance_baseline
    }

    /// Returns the matricule allocation policy.
    pub fn matricule_policy(&self) -> &MatriculePolicy {
        &self.matricule
    }

    /// Returns all education coefficients.
    pub fn coefficients(&self) -> &HashMap<EducationLevel, Decimal> {
        &self.coefficients
    }

    /// Gets the salary coefficient for an education level.
    ///
    /// # Returns
    ///
    /// Returns the coefficient if configured, or `EducationCoefficientNotFound`.
    pub fn get_education_coefficient(&self, level: EducationLevel) -> EngineResult<Decimal> {
        self.coefficients
            .get(&level)
            .copied()
            .ok_or_else(|| EngineError::EducationCoefficientNotFound {
                level: level.as_str().to_string(),
            })
    }

    /// Returns the annual bonus parameters.
    pub fn bonus(&self) -> &BonusConfig {
        &self.bonus
    }
}
