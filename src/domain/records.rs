/// Record shapes the analytics engine consumes
///
/// Each struct here is one line of a user's health history: a measurement,
/// a screening, a medication summary, a categorical daily log entry. They
/// are plain serde types - the engine reads them, derives a summary, and
/// discards them. Series are assumed chronological, oldest first.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{DomainError, ExposureLevel, Mood, RiskTier, SocialFeeling, StressLevel};

/// One numeric measurement on a given day (weight, sleep hours, steps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Which day the measurement was taken
    pub date: NaiveDate,
    /// The measured value, in whatever unit the series carries
    pub value: f64,
}

impl TimePoint {
    /// Create a measurement, rejecting NaN/infinite values at the boundary
    pub fn new(date: NaiveDate, value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidValue {
                message: format!("Measurement on {} must be finite", date),
            });
        }
        Ok(Self { date, value })
    }
}

/// One day's fluid intake in millilitres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationEntry {
    pub date: NaiveDate,
    /// Millilitres consumed that day
    pub amount: f64,
}

impl HydrationEntry {
    /// Create a hydration entry, rejecting negative or non-finite amounts
    pub fn new(date: NaiveDate, amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::InvalidValue {
                message: format!("Hydration amount on {} must be a non-negative number", date),
            });
        }
        Ok(Self { date, amount })
    }
}

/// A scheduled health screening (mammogram, colonoscopy, blood panel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningEntry {
    pub name: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}

/// A preventive-care reminder (flu shot, dental cleaning)
///
/// Same shape as a screening; kept as its own type so the two lists can't
/// be mixed up at a call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderEntry {
    pub name: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}

/// Adherence summary input for one medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub name: String,
    /// Doses missed in the observation window (non-negative by type)
    pub missed_doses: u32,
}

/// One day's mood log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLogEntry {
    pub date: NaiveDate,
    pub mood: Mood,
}

/// One day's stress log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressLogEntry {
    pub date: NaiveDate,
    pub level: StressLevel,
}

/// One day's social-support log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLogEntry {
    pub date: NaiveDate,
    pub feeling: SocialFeeling,
}

/// One logged environmental exposure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalLogEntry {
    pub date: NaiveDate,
    /// What kind of exposure this was (e.g. "air quality", "pollen")
    pub kind: String,
    pub level: ExposureLevel,
}

/// One day's burnout self-assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutLogEntry {
    pub date: NaiveDate,
    pub risk: RiskTier,
}

/// A vaccine the user has received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmunizationRecord {
    pub vaccine_name: String,
    pub date_administered: NaiveDate,
}

/// An AI-generated action plan the user accepted on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlanEntry {
    pub date: NaiveDate,
    pub plan: String,
}

/// One recorded interaction with the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUsageEntry {
    pub date: NaiveDate,
    pub action: String,
}

/// Whether the user followed a coaching recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub date: NaiveDate,
    pub recommendation: String,
    pub followed: bool,
}
