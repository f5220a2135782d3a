/// Domain module containing the typed data model
///
/// This module defines the record shapes the analytics engine consumes
/// (measurements, screenings, categorical logs) and the profile snapshot
/// that aggregates them, along with boundary validation rules.

pub mod profile;
pub mod records;
pub mod types;

// Re-export public types for easy access
pub use profile::*;
pub use records::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur while validating snapshot data at the boundary
///
/// The analytics functions themselves never return errors; these only
/// surface when a snapshot is constructed or loaded.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
