//! HR Rules Engine
//!
//! This crate implements the business rules of a company's human-resources
//! back end: matricule allocation and base salary at hiring, revenue-based
//! performance tiering for sales employees, and the team-average bonus.
//! Annual bonus, paid leave and salary raise rules are provided alongside.
//!
//! Persistence is abstracted behind [`repository::EmployeeRepository`]; rule
//! parameters are loaded from YAML by [`config::ConfigLoader`].

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
