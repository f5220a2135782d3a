/// Dashboard report assembly
///
/// This module turns one profile snapshot into the full set of derived
/// indicators the dashboard renders and the coaching-prompt builder reads.
/// Every indicator is computed independently by the analytics engine; the
/// report just fans the snapshot out and collects the results.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::analytics::{
    AnalyticsEngine, GoalProgress, HydrationSummary, MedicationAdherence,
    MotivationInputs, TrendSummary, VaccinationStatus,
};
use crate::domain::{
    EngagementLevel, Mood, ProfileId, ReminderEntry, RiskTier, ScreeningEntry,
    SocialStanding, StressRating, UserProfile,
};

/// Every derived indicator for one profile snapshot
///
/// `None` fields mean "insufficient data", not an error; they serialize as
/// `null` and downstream consumers render them as "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub profile_id: ProfileId,
    /// The date the due-date comparisons ran against
    pub generated_for: NaiveDate,

    // Trend & goal indicators
    pub weight_trend: TrendSummary,
    pub sleep_trend: TrendSummary,
    pub steps_trend: TrendSummary,
    pub step_goal_progress: GoalProgress,
    pub step_goal_streak: u32,

    // Risk & adherence
    pub screenings_due: Vec<ScreeningEntry>,
    pub medication_adherence: MedicationAdherence,
    pub chronic_condition_risks: Vec<String>,

    // Lifestyle
    pub diet_quality_score: u32,
    pub hydration: HydrationSummary,
    pub stress: Option<StressRating>,

    // Social & environmental
    pub loneliness: Option<SocialStanding>,
    /// "none" or "<kind> (high)"
    pub environmental_risk: String,

    // Preventive health
    pub vaccinations: VaccinationStatus,
    pub preventive_reminders_due: Vec<ReminderEntry>,

    // Engagement & coaching
    pub mood: Option<Mood>,
    pub burnout: Option<RiskTier>,
    pub app_engagement: Option<EngagementLevel>,
    pub recommendation_follow_rate: u32,
    pub recent_action_plans: Vec<String>,
    pub feedback: String,
}

impl DashboardReport {
    /// Compute every indicator from one snapshot
    pub fn build(engine: &AnalyticsEngine, profile: &UserProfile) -> Self {
        tracing::debug!(profile_id = %profile.id, "building dashboard report");

        let weight_trend = engine.trend_points(&profile.weight_log);
        let sleep_trend = engine.trend_points(&profile.sleep_log);
        let steps_trend = engine.trend_points(&profile.steps_log);

        let step_values: Vec<f64> = profile.steps_log.iter().map(|p| p.value).collect();
        let (step_goal_progress, step_goal_streak) = match profile.daily_step_goal {
            Some(goal) => {
                let current = step_values.last().copied().unwrap_or(0.0);
                (engine.goal_progress(current, goal), engine.streak(&step_values, goal))
            }
            // No goal set: nothing to measure against
            None => (GoalProgress::no_goal(), 0),
        };

        let feedback = engine.motivational_feedback(&MotivationInputs {
            steps_streak: step_goal_streak,
            weight_trend: weight_trend.direction,
            sleep_trend: sleep_trend.direction,
        });

        let report = Self {
            profile_id: profile.id.clone(),
            generated_for: engine.today(),
            weight_trend,
            sleep_trend,
            steps_trend,
            step_goal_progress,
            step_goal_streak,
            screenings_due: engine.upcoming_screenings(&profile.screenings),
            medication_adherence: engine.medication_adherence(&profile.medications),
            chronic_condition_risks: engine
                .chronic_condition_risk(&profile.chronic_conditions)
                .into_iter()
                .map(str::to_string)
                .collect(),
            diet_quality_score: engine
                .diet_quality_score(profile.diet_quality_score, profile.dietary_pattern),
            hydration: engine.hydration_status(&profile.hydration_log),
            stress: engine.stress_level(&profile.stress_log),
            loneliness: engine.loneliness_status(&profile.social_log),
            environmental_risk: engine
                .environmental_risk(&profile.environmental_log)
                .to_string(),
            vaccinations: engine
                .vaccination_status(&profile.immunizations, &profile.recommended_vaccines),
            preventive_reminders_due: engine
                .upcoming_preventive_reminders(&profile.preventive_reminders),
            mood: engine.mood_pattern(&profile.mood_log),
            burnout: engine.burnout_risk(&profile.burnout_log),
            app_engagement: engine.app_engagement(&profile.app_usage),
            recommendation_follow_rate: engine
                .recommendation_follow_rate(&profile.recommendation_responses),
            recent_action_plans: engine.recent_action_plans(&profile.action_plans),
            feedback,
        };

        tracing::info!(
            profile_id = %profile.id,
            screenings_due = report.screenings_due.len(),
            reminders_due = report.preventive_reminders_due.len(),
            "dashboard report ready"
        );

        report
    }
}
