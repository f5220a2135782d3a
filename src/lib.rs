/// Public library interface for the health-insights analytics engine
///
/// This crate derives dashboard indicators (trends, streaks, adherence,
/// status labels) from a user's health-data snapshot. The engine is a set
/// of pure functions behind the `AnalyticsEngine` facade; the only ambient
/// input is "today", which can be pinned for deterministic results.

use std::path::Path;
use thiserror::Error;

// Internal modules
mod analytics;
mod domain;
mod report;

// Re-export public modules and types
pub use analytics::*;
pub use domain::*;
pub use report::DashboardReport;

/// Errors that can occur while loading a snapshot and producing a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and validate a profile snapshot from a JSON file
///
/// This is the entry point the CLI and tests use: read the file, parse the
/// snapshot (unknown collections default to empty), and run the boundary
/// validation before any analytics see the data.
pub fn load_profile(path: &Path) -> Result<UserProfile, ReportError> {
    tracing::info!("Loading profile snapshot from {:?}", path);

    let raw = std::fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&raw)?;
    profile.validate()?;

    Ok(profile)
}
