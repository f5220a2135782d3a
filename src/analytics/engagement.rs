/// AI-recommendation and app-engagement analytics
///
/// Everything the coaching layer folds into its prompts: recent action
/// plans, a motivational feedback line, mood and burnout patterns, how
/// regularly the user opens the app, and how often they follow
/// recommendations.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::analytics::window::{trailing, trailing_majority};
use crate::domain::{ActionPlanEntry, AppUsageEntry, BurnoutLogEntry, EngagementLevel, Mood,
    MoodLogEntry, RecommendationResponse, RiskTier, TrendDirection};

/// Days of log considered for mood and burnout patterns
const RECENT_WINDOW: usize = 7;
/// Usage entries considered for the engagement rating
const ENGAGEMENT_WINDOW: usize = 14;
/// Step-goal streak length that earns the streak message
const STREAK_MILESTONE: u32 = 7;

/// The derived indicators the feedback chain reads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotivationInputs {
    pub steps_streak: u32,
    pub weight_trend: TrendDirection,
    pub sleep_trend: TrendDirection,
}

/// Last three accepted action plans, oldest of the three first
pub fn recent_action_plans(plans: &[ActionPlanEntry]) -> Vec<String> {
    trailing(plans, 3).iter().map(|p| p.plan.clone()).collect()
}

/// Pick one motivational line from a fixed-priority rule chain
///
/// The order is significant: a week-long step streak beats a falling
/// weight trend beats a rising sleep trend beats the generic line. First
/// matching rule wins.
pub fn motivational_feedback(inputs: &MotivationInputs) -> String {
    if inputs.steps_streak >= STREAK_MILESTONE {
        format!(
            "{} days hitting your step goal in a row. Keep the momentum going!",
            inputs.steps_streak
        )
    } else if inputs.weight_trend == TrendDirection::Decreasing {
        "Your weight is trending down. Nice work, stay consistent!".to_string()
    } else if inputs.sleep_trend == TrendDirection::Increasing {
        "Your sleep is trending up. Those extra hours are paying off!".to_string()
    } else {
        "Every small step counts. Log your data today and keep building!".to_string()
    }
}

/// Find the dominant mood over the trailing week
///
/// Tallies the trailing seven entries and returns the most frequent mood.
/// Ties break to the mood encountered first in the window, by keeping the
/// tally in insertion order and only replacing the leader on a strictly
/// higher count. Empty log -> `None`.
pub fn mood_pattern(entries: &[MoodLogEntry]) -> Option<Mood> {
    if entries.is_empty() {
        return None;
    }

    let mut tally: Vec<(Mood, u32)> = Vec::new();
    for entry in trailing(entries, RECENT_WINDOW) {
        match tally.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => tally.push((entry.mood, 1)),
        }
    }

    // Leader only changes on a strictly higher count, so the first mood
    // seen in the window wins ties
    let mut leader: Option<(Mood, u32)> = None;
    for (mood, count) in tally {
        if leader.map_or(true, |(_, best)| count > best) {
            leader = Some((mood, count));
        }
    }
    leader.map(|(mood, _)| mood)
}

/// Classify burnout risk from the trailing week of self-assessments
///
/// Strict majority of high entries reads high, then moderate, otherwise
/// low. Empty log -> `None`.
pub fn burnout_risk(entries: &[BurnoutLogEntry]) -> Option<RiskTier> {
    trailing_majority(
        entries,
        Some(RECENT_WINDOW),
        |e| e.risk,
        &[RiskTier::High, RiskTier::Moderate],
        RiskTier::Low,
    )
}

/// Rate app engagement from the trailing usage entries
///
/// Counts distinct calendar dates (not raw event count) across the last
/// fourteen entries: ten or more distinct days is high, five or more is
/// moderate, fewer is low. Empty log -> `None`.
pub fn app_engagement(usage: &[AppUsageEntry]) -> Option<EngagementLevel> {
    if usage.is_empty() {
        return None;
    }

    let distinct_days: HashSet<_> = trailing(usage, ENGAGEMENT_WINDOW)
        .iter()
        .map(|u| u.date)
        .collect();

    let level = if distinct_days.len() >= 10 {
        EngagementLevel::High
    } else if distinct_days.len() >= 5 {
        EngagementLevel::Moderate
    } else {
        EngagementLevel::Low
    };

    Some(level)
}

/// Percentage of coaching recommendations the user followed
pub fn recommendation_follow_rate(responses: &[RecommendationResponse]) -> u32 {
    if responses.is_empty() {
        return 0;
    }

    let followed = responses.iter().filter(|r| r.followed).count();
    (followed as f64 / responses.len() as f64 * 100.0).round() as u32
}
