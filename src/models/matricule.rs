//! Matricule (employee identifier) model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::JobCategory;
use crate::error::EngineError;

/// Number of digits in the sequence part of a matricule.
pub const MATRICULE_DIGITS: usize = 5;

/// Exclusive upper bound of the matricule sequence.
pub const MATRICULE_CEILING: u32 = 100_000;

/// An employee identifier: a category letter followed by a zero-padded
/// five-digit sequence number.
///
/// # Examples
///
/// ```
/// use hr_engine::models::{JobCategory, Matricule};
///
/// let matricule = Matricule::new(JobCategory::Commercial, 42).unwrap();
/// assert_eq!(matricule.to_string(), "C00042");
///
/// let parsed: Matricule = "T12345".parse().unwrap();
/// assert_eq!(parsed.category(), JobCategory::Technician);
/// assert_eq!(parsed.sequence(), 12345);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Matricule {
    category: JobCategory,
    sequence: u32,
}

impl Matricule {
    /// Builds a matricule, rejecting sequences outside [1, 99999].
    pub fn new(category: JobCategory, sequence: u32) -> Result<Self, EngineError> {
        if sequence == 0 || sequence >= MATRICULE_CEILING {
            return Err(EngineError::InvalidMatricule {
                value: format!("{}{}", category.code(), sequence),
                message: format!("sequence must be between 1 and {}", MATRICULE_CEILING - 1),
            });
        }
        Ok(Self { category, sequence })
    }

    /// Returns the job category encoded in the prefix.
    pub fn category(&self) -> JobCategory {
        self.category
    }

    /// Returns the numeric sequence.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for Matricule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.category.code(),
            self.sequence,
            width = MATRICULE_DIGITS
        )
    }
}

impl FromStr for Matricule {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidMatricule {
            value: value.to_string(),
            message: message.to_string(),
        };

        let mut chars = value.chars();
        let prefix = chars.next().ok_or_else(|| invalid("empty matricule"))?;
        let category =
            JobCategory::from_code(prefix).ok_or_else(|| invalid("unknown category prefix"))?;

        let digits = chars.as_str();
        if digits.len() != MATRICULE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected five digits after the prefix"));
        }
        let sequence: u32 = digits
            .parse()
            .map_err(|_| invalid("sequence is not a number"))?;

        Matricule::new(category, sequence)
    }
}

impl TryFrom<String> for Matricule {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Matricule> for String {
    fn from(matricule: Matricule) -> Self {
        matricule.to_string()
    }
}

impl PartialEq<&str> for Matricule {
    fn eq(&self, other: &&str) -> bool {
        other.parse::<Matricule>().is_ok_and(|parsed| parsed == *self)
    }
}
