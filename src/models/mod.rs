//! Core data models for the HR rules engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employee;
mod matricule;
mod outcome;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use employee::{EducationLevel, Employee, JobCategory};
pub use matricule::{MATRICULE_CEILING, MATRICULE_DIGITS, Matricule};
pub use outcome::{HiringOutcome, PerformanceEvaluation, PerformanceTier};
