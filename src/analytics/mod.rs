/// Analytics engine for deriving health indicators from profile data
///
/// This module groups the pure analytics functions by category (trend math,
/// risk, lifestyle, social/environmental, preventive, engagement) and wraps
/// them in the `AnalyticsEngine` facade, which supplies "today" to the
/// due-date comparisons and holds the adherence model. The functions are
/// all total and side-effect free; the facade is the only place time
/// enters, and it can be pinned for deterministic tests.

pub mod engagement;
pub mod lifestyle;
pub mod preventive;
pub mod risk;
pub mod social;
pub mod trend;
pub mod window;

pub use engagement::{
    app_engagement, burnout_risk, mood_pattern, motivational_feedback,
    recent_action_plans, recommendation_follow_rate, MotivationInputs,
};
pub use lifestyle::{diet_quality_score, hydration_status, stress_level, HydrationSummary};
pub use preventive::{upcoming_preventive_reminders, vaccination_status, VaccinationStatus};
pub use risk::{
    chronic_condition_risk, medication_adherence, upcoming_screenings, AdherenceModel,
    MedicationAdherence, WeeklyAdherence,
};
pub use social::{environmental_risk, loneliness_status, EnvironmentalRisk};
pub use trend::{
    calculate_goal_progress, calculate_streak, calculate_trend, calculate_trend_points,
    GoalProgress, TrendSummary,
};

use chrono::{NaiveDate, Utc};
use crate::domain::{
    ActionPlanEntry, AppUsageEntry, BurnoutLogEntry, DietPattern, EngagementLevel,
    EnvironmentalLogEntry, HydrationEntry, ImmunizationRecord, MedicationEntry, Mood,
    MoodLogEntry, RecommendationResponse, ReminderEntry, RiskTier, ScreeningEntry,
    SocialLogEntry, SocialStanding, StressLogEntry, StressRating, TimePoint,
};

/// Facade over the analytics functions
///
/// Stateless apart from its clock: `new()` reads the system date per call,
/// `pinned(date)` fixes it so due-date comparisons are deterministic in
/// tests. The adherence model defaults to the weekly approximation and can
/// be swapped at construction.
pub struct AnalyticsEngine {
    pinned_today: Option<NaiveDate>,
    adherence: Box<dyn AdherenceModel + Send + Sync>,
}

impl AnalyticsEngine {
    /// Create an engine that reads the system clock
    pub fn new() -> Self {
        Self {
            pinned_today: None,
            adherence: Box::new(WeeklyAdherence::default()),
        }
    }

    /// Create an engine with a fixed "today" for deterministic results
    pub fn pinned(today: NaiveDate) -> Self {
        Self {
            pinned_today: Some(today),
            adherence: Box::new(WeeklyAdherence::default()),
        }
    }

    /// Replace the adherence model
    pub fn with_adherence_model(
        mut self,
        model: Box<dyn AdherenceModel + Send + Sync>,
    ) -> Self {
        self.adherence = model;
        self
    }

    /// The date due-date comparisons run against
    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| Utc::now().naive_utc().date())
    }

    // Trend & goal math

    pub fn trend(&self, values: &[f64]) -> TrendSummary {
        calculate_trend(values)
    }

    pub fn trend_points(&self, points: &[TimePoint]) -> TrendSummary {
        calculate_trend_points(points)
    }

    pub fn goal_progress(&self, current: f64, goal: f64) -> GoalProgress {
        calculate_goal_progress(current, goal)
    }

    pub fn streak(&self, values: &[f64], goal: f64) -> u32 {
        calculate_streak(values, goal)
    }

    // Risk & adherence

    pub fn upcoming_screenings(&self, screenings: &[ScreeningEntry]) -> Vec<ScreeningEntry> {
        upcoming_screenings(screenings, self.today())
    }

    pub fn medication_adherence(&self, medications: &[MedicationEntry]) -> MedicationAdherence {
        self.adherence.adherence(medications)
    }

    pub fn chronic_condition_risk(&self, conditions: &[String]) -> Vec<&'static str> {
        chronic_condition_risk(conditions)
    }

    // Lifestyle

    pub fn diet_quality_score(&self, explicit: Option<u32>, pattern: DietPattern) -> u32 {
        diet_quality_score(explicit, pattern)
    }

    pub fn hydration_status(&self, entries: &[HydrationEntry]) -> HydrationSummary {
        hydration_status(entries)
    }

    pub fn stress_level(&self, entries: &[StressLogEntry]) -> Option<StressRating> {
        stress_level(entries)
    }

    // Social & environmental

    pub fn loneliness_status(&self, entries: &[SocialLogEntry]) -> Option<SocialStanding> {
        loneliness_status(entries)
    }

    pub fn environmental_risk(&self, entries: &[EnvironmentalLogEntry]) -> EnvironmentalRisk {
        environmental_risk(entries)
    }

    // Preventive health

    pub fn vaccination_status(
        &self,
        records: &[ImmunizationRecord],
        recommended: &[String],
    ) -> VaccinationStatus {
        vaccination_status(records, recommended)
    }

    pub fn upcoming_preventive_reminders(&self, reminders: &[ReminderEntry]) -> Vec<ReminderEntry> {
        upcoming_preventive_reminders(reminders, self.today())
    }

    // Engagement & coaching

    pub fn recent_action_plans(&self, plans: &[ActionPlanEntry]) -> Vec<String> {
        recent_action_plans(plans)
    }

    pub fn motivational_feedback(&self, inputs: &MotivationInputs) -> String {
        motivational_feedback(inputs)
    }

    pub fn mood_pattern(&self, entries: &[MoodLogEntry]) -> Option<Mood> {
        mood_pattern(entries)
    }

    pub fn burnout_risk(&self, entries: &[BurnoutLogEntry]) -> Option<RiskTier> {
        burnout_risk(entries)
    }

    pub fn app_engagement(&self, usage: &[AppUsageEntry]) -> Option<EngagementLevel> {
        app_engagement(usage)
    }

    pub fn recommendation_follow_rate(&self, responses: &[RecommendationResponse]) -> u32 {
        recommendation_follow_rate(responses)
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
