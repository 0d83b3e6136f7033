//! Configuration loading and management for the HR rules engine.
//!
//! This module provides functionality to load company rule configurations
//! from YAML files, including base salary, education coefficients, the
//! matricule policy and annual bonus parameters.
//!
//! # Example
//!
//! ```no_run
//! use hr_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/company").unwrap();
//! println!("Loaded rules for: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BonusConfig, CompanyConfig, CompanyFile, CompanyMetadata, EducationConfig, MatriculePolicy,
};
