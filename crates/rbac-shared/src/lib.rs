//! # RBAC Shared
//! 
//! Shared constants, configuration, and telemetry for the RBAC menu console.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
