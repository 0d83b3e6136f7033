//! Employee model and related types.
//!
//! This module defines the Employee struct together with the JobCategory and
//! EducationLevel enums used by the hiring and performance rules.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Matricule;

/// The job category of an employee.
///
/// The first letter of the category forms the matricule prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    /// Sales employee, the only category subject to performance evaluation.
    Commercial,
    /// Manager.
    Manager,
    /// Technician.
    Technician,
}

impl JobCategory {
    /// All job categories.
    pub const ALL: [JobCategory; 3] = [
        JobCategory::Commercial,
        JobCategory::Manager,
        JobCategory::Technician,
    ];

    /// Returns the one-letter matricule prefix for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::JobCategory;
    ///
    /// assert_eq!(JobCategory::Commercial.code(), 'C');
    /// assert_eq!(JobCategory::Technician.code(), 'T');
    /// ```
    pub fn code(&self) -> char {
        match self {
            JobCategory::Commercial => 'C',
            JobCategory::Manager => 'M',
            JobCategory::Technician => 'T',
        }
    }

    /// Resolves a category from its matricule prefix.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

/// The highest education level reached by an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// Vocational certificate (CAP).
    Cap,
    /// Baccalaureate.
    Bac,
    /// Two-year technical degree (BTS or IUT).
    BtsIut,
    /// Bachelor's degree.
    Licence,
    /// Master's degree.
    Master,
    /// Engineering degree.
    Engineer,
    /// Doctorate.
    Doctorate,
}

impl EducationLevel {
    /// All education levels, lowest first.
    pub const ALL: [EducationLevel; 7] = [
        EducationLevel::Cap,
        EducationLevel::Bac,
        EducationLevel::BtsIut,
        EducationLevel::Licence,
        EducationLevel::Master,
        EducationLevel::Engineer,
        EducationLevel::Doctorate,
    ];

    /// Returns the configuration key for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Cap => "cap",
            EducationLevel::Bac => "bac",
            EducationLevel::BtsIut => "bts_iut",
            EducationLevel::Licence => "licence",
            EducationLevel::Master => "master",
            EducationLevel::Engineer => "engineer",
            EducationLevel::Doctorate => "doctorate",
        }
    }
}

/// Represents an employee of the company.
///
/// Only `performance` and `salary` change after hiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's surname.
    pub last_name: String,
    /// The employee's given name.
    pub first_name: String,
    /// The unique identifier, e.g. "C00042".
    pub matricule: Matricule,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The monthly salary, if one has been set.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// The performance score.
    pub performance: u32,
    /// Working-time ratio in (0, 1]; 1 is full-time.
    pub part_time_ratio: Decimal,
}

impl Employee {
    /// Returns true if the matricule belongs to the given job category.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::{Employee, JobCategory};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     last_name: "Durand".to_string(),
    ///     first_name: "Alice".to_string(),
    ///     matricule: "C00004".parse().unwrap(),
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
    ///     salary: None,
    ///     performance: 1,
    ///     part_time_ratio: Decimal::ONE,
    /// };
    /// assert!(employee.is_in_category(JobCategory::Commercial));
    /// assert!(!employee.is_in_category(JobCategory::Manager));
    /// ```
    pub fn is_in_category(&self, category: JobCategory) -> bool {
        self.matricule.category() == category
    }

    /// Returns the number of calendar years between the hire year and `as_of`.
    ///
    /// A hire date later than `as_of` counts as zero years.
    pub fn seniority_years(&self, as_of: NaiveDate) -> u32 {
        if self.hire_date > as_of {
            return 0;
        }
        (as_of.year() - self.hire_date.year()) as u32
    }

    /// Returns the paid leave entitlement in days: the base plus one day per
    /// year of seniority.
    pub fn leave_days(&self, as_of: NaiveDate, base_leave_days: u32) -> u32 {
        base_leave_days + self.seniority_years(as_of)
    }
}
