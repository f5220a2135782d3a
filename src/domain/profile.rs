/// UserProfile snapshot entity
///
/// This module defines the profile snapshot a caller hands to the analytics
/// engine: one struct aggregating every time series and log the dashboard
/// draws from. Every collection defaults to empty on deserialization, so a
/// partial snapshot always loads and absent data degrades to the engine's
/// per-function sentinels instead of an error.

use serde::{Deserialize, Serialize};
use crate::domain::{
    ActionPlanEntry, AppUsageEntry, BurnoutLogEntry, DietPattern, DomainError,
    EnvironmentalLogEntry, HydrationEntry, ImmunizationRecord, MedicationEntry,
    MoodLogEntry, ProfileId, RecommendationResponse, ReminderEntry, ScreeningEntry,
    SocialLogEntry, StressLogEntry, TimePoint,
};

/// A read-only snapshot of one user's health data
///
/// The engine never mutates or persists a profile; it is an input for a
/// single report computation. Series are chronological, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    /// Unique identifier for this profile
    #[serde(default)]
    pub id: ProfileId,
    /// Body weight series (kg)
    #[serde(default)]
    pub weight_log: Vec<TimePoint>,
    /// Nightly sleep series (hours)
    #[serde(default)]
    pub sleep_log: Vec<TimePoint>,
    /// Daily step counts
    #[serde(default)]
    pub steps_log: Vec<TimePoint>,
    /// Daily fluid intake (ml)
    #[serde(default)]
    pub hydration_log: Vec<HydrationEntry>,
    /// Daily mood entries
    #[serde(default)]
    pub mood_log: Vec<MoodLogEntry>,
    /// Daily stress entries
    #[serde(default)]
    pub stress_log: Vec<StressLogEntry>,
    /// Daily social-support entries
    #[serde(default)]
    pub social_log: Vec<SocialLogEntry>,
    /// Logged environmental exposures
    #[serde(default)]
    pub environmental_log: Vec<EnvironmentalLogEntry>,
    /// Daily burnout self-assessments
    #[serde(default)]
    pub burnout_log: Vec<BurnoutLogEntry>,
    /// Scheduled health screenings
    #[serde(default)]
    pub screenings: Vec<ScreeningEntry>,
    /// Preventive-care reminders
    #[serde(default)]
    pub preventive_reminders: Vec<ReminderEntry>,
    /// Current medications with missed-dose counts
    #[serde(default)]
    pub medications: Vec<MedicationEntry>,
    /// Diagnosed chronic conditions, free-form names
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    /// Self-described dietary pattern
    #[serde(default)]
    pub dietary_pattern: DietPattern,
    /// Explicit diet quality score, if one has been assessed (wins over the pattern)
    #[serde(default)]
    pub diet_quality_score: Option<u32>,
    /// Vaccines received
    #[serde(default)]
    pub immunizations: Vec<ImmunizationRecord>,
    /// Vaccines recommended for this user
    #[serde(default)]
    pub recommended_vaccines: Vec<String>,
    /// Accepted AI action plans
    #[serde(default)]
    pub action_plans: Vec<ActionPlanEntry>,
    /// App interaction log
    #[serde(default)]
    pub app_usage: Vec<AppUsageEntry>,
    /// Responses to coaching recommendations
    #[serde(default)]
    pub recommendation_responses: Vec<RecommendationResponse>,
    /// Daily step goal, if the user has set one
    #[serde(default)]
    pub daily_step_goal: Option<f64>,
}

impl UserProfile {
    /// Create an empty snapshot for the given profile ID
    pub fn new(id: ProfileId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Validate the snapshot at the boundary
    ///
    /// Rejects non-finite numeric values so they can't ripple through the
    /// trend math as NaN. Enum fields are already validated by
    /// deserialization; element-level gaps beyond that are the caller's
    /// responsibility.
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::validate_series("weight_log", &self.weight_log)?;
        Self::validate_series("sleep_log", &self.sleep_log)?;
        Self::validate_series("steps_log", &self.steps_log)?;

        for entry in &self.hydration_log {
            if !entry.amount.is_finite() || entry.amount < 0.0 {
                return Err(DomainError::InvalidValue {
                    message: format!(
                        "hydration_log entry on {} must be a non-negative number",
                        entry.date
                    ),
                });
            }
        }

        if let Some(goal) = self.daily_step_goal {
            if !goal.is_finite() || goal < 0.0 {
                return Err(DomainError::InvalidValue {
                    message: "daily_step_goal must be a non-negative number".to_string(),
                });
            }
        }

        Ok(())
    }

    fn validate_series(name: &str, series: &[TimePoint]) -> Result<(), DomainError> {
        for point in series {
            if !point.value.is_finite() {
                return Err(DomainError::InvalidValue {
                    message: format!("{} entry on {} must be finite", name, point.date),
                });
            }
        }
        Ok(())
    }
}
