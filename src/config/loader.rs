//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company rule
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{EducationLevel, MATRICULE_CEILING, MATRICULE_DIGITS};

use super::types::{BonusConfig, CompanyConfig, CompanyFile, CompanyMetadata, EducationConfig};

/// Loads, validates and provides access to company configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/company/
/// ├── company.yaml     # Metadata, base salary, baseline, matricule policy
/// ├── education.yaml   # Salary coefficient per education level
/// └── bonus.yaml       # Annual bonus and leave parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
/// use hr_engine::models::EducationLevel;
///
/// let loader = ConfigLoader::load("./config/company")?;
/// let coefficient = loader.get_education_coefficient(EducationLevel::Master)?;
/// println!("Master coefficient: {}", coefficient);
/// # Ok::<(), hr_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CompanyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The configuration is incomplete or inconsistent (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company_path = path.join("company.yaml");
        let company = Self::load_yaml::<CompanyFile>(&company_path)?;

        let education_path = path.join("education.yaml");
        let education = Self::load_yaml::<EducationConfig>(&education_path)?;

        let bonus_path = path.join("bonus.yaml");
        let bonus = Self::load_yaml::<BonusConfig>(&bonus_path)?;

        let config = CompanyConfig::new(
            company.company,
            company.base_salary,
            company.performance_baseline,
            company.matricule,
            education.coefficients,
            bonus,
        );

        Self::validate(&config, &path.display().to_string())?;
        Ok(Self { config })
    }

    /// Wraps a configuration built in code, applying the same checks as
    /// [`ConfigLoader::load`].
    pub fn from_config(config: CompanyConfig) -> EngineResult<Self> {
        Self::validate(&config, "<in-memory>")?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &CompanyConfig, source: &str) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: source.to_string(),
            message,
        };

        if config.base_salary() < Decimal::ZERO {
            return Err(invalid(format!(
                "base salary must not be negative, got {}",
                config.base_salary()
            )));
        }

        for level in EducationLevel::ALL {
            match config.coefficients().get(&level) {
                None => {
                    return Err(invalid(format!(
                        "missing coefficient for education level '{}'",
                        level.as_str()
                    )));
                }
                Some(coefficient) if *coefficient < Decimal::ZERO => {
                    return Err(invalid(format!(
                        "coefficient for education level '{}' must not be negative",
                        level.as_str()
                    )));
                }
                Some(_) => {}
            }
        }

        let policy = config.matricule_policy();
        if policy.warning_threshold == 0 || policy.warning_threshold >= MATRICULE_CEILING {
            return Err(invalid(format!(
                "matricule warning threshold must be between 1 and {}, got {}",
                MATRICULE_CEILING - 1,
                policy.warning_threshold
            )));
        }

        let initial_is_numeric = !policy.initial.is_empty()
            && policy.initial.len() <= MATRICULE_DIGITS
            && policy.initial.bytes().all(|b| b.is_ascii_digit());
        if !initial_is_numeric {
            return Err(invalid(format!(
                "matricule seed '{}' must be at most {} digits",
                policy.initial, MATRICULE_DIGITS
            )));
        }

        Ok(())
    }

    /// Returns the underlying company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Gets the salary coefficient for an education level.
    pub fn get_education_coefficient(&self, level: EducationLevel) -> EngineResult<Decimal> {
        self.config.get_education_coefficient(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatriculePolicy;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/company"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_config(
        coefficients: HashMap<EducationLevel, Decimal>,
        matricule: MatriculePolicy,
    ) -> CompanyConfig {
        CompanyConfig::new(
            CompanyMetadata {
                code: "TEST".to_string(),
                name: "Test Company".to_string(),
                version: "2024-01-01".to_string(),
            },
            dec("1480.27"),
            1,
            matricule,
            coefficients,
            BonusConfig {
                base_bonus: dec("1000"),
                performance_index: dec("0.3"),
                manager_index: dec("1.7"),
                seniority_bonus_per_year: dec("100"),
                base_leave_days: 25,
            },
        )
    }

    fn full_coefficients() -> HashMap<EducationLevel, Decimal> {
        EducationLevel::ALL
            .into_iter()
            .map(|level| (level, Decimal::ONE))
            .collect()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.company().code, "ACME");
        assert_eq!(loader.config().base_salary(), dec("1480.27"));
        assert_eq!(loader.config().performance_baseline(), 1);
    }

    #[test]
    fn test_matricule_policy_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let policy = loader.config().matricule_policy();
        assert_eq!(policy.initial, "00000");
        assert_eq!(policy.warning_threshold, 90000);
    }

    #[test]
    fn test_education_coefficients_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(
            loader.get_education_coefficient(EducationLevel::Cap).unwrap(),
            dec("1.0")
        );
        assert_eq!(
            loader
                .get_education_coefficient(EducationLevel::BtsIut)
                .unwrap(),
            dec("1.2")
        );
        assert_eq!(
            loader
                .get_education_coefficient(EducationLevel::Doctorate)
                .unwrap(),
            dec("1.7")
        );
    }

    #[test]
    fn test_bonus_parameters_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let bonus = loader.config().bonus();
        assert_eq!(bonus.base_bonus, dec("1000"));
        assert_eq!(bonus.manager_index, dec("1.7"));
        assert_eq!(bonus.base_leave_days, 25);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_education_coefficient_is_rejected() {
        let mut coefficients = full_coefficients();
        coefficients.remove(&EducationLevel::Master);
        let config = create_test_config(coefficients, MatriculePolicy::default());

        match ConfigLoader::from_config(config) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("master"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_warning_threshold_at_ceiling_is_rejected() {
        let policy = MatriculePolicy {
            initial: "00000".to_string(),
            warning_threshold: 800000,
        };
        let config = create_test_config(full_coefficients(), policy);

        assert!(matches!(
            ConfigLoader::from_config(config),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_non_numeric_seed_is_rejected() {
        let policy = MatriculePolicy {
            initial: "A0000".to_string(),
            warning_threshold: 90000,
        };
        let config = create_test_config(full_coefficients(), policy);

        assert!(ConfigLoader::from_config(config).is_err());
    }

    #[test]
    fn test_from_config_accepts_complete_configuration() {
        let config = create_test_config(full_coefficients(), MatriculePolicy::default());
        let loader = ConfigLoader::from_config(config).unwrap();

        assert_eq!(
            loader
                .get_education_coefficient(EducationLevel::Licence)
                .unwrap(),
            Decimal::ONE
        );
    }
}
