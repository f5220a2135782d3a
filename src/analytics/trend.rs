/// Trend and goal math over numeric time series
///
/// This module computes the direction of a series, progress toward a fixed
/// goal, and the length of the trailing run of goal-hitting days. All
/// functions are total: short or empty input degrades to a "no data"
/// summary rather than an error.

use serde::{Deserialize, Serialize};
use crate::domain::{TimePoint, TrendDirection};

/// Raw change below this magnitude counts as stable.
const STABLE_BAND: f64 = 0.1;

/// Direction and magnitude of change across a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub direction: TrendDirection,
    /// Last value minus first value, rounded to one decimal
    pub change: f64,
    /// Change relative to the first value, in percent, rounded to one decimal
    pub percent: f64,
}

impl TrendSummary {
    /// The summary returned for empty or single-point series
    pub fn no_data() -> Self {
        Self {
            direction: TrendDirection::NoData,
            change: 0.0,
            percent: 0.0,
        }
    }
}

/// Progress toward a numeric goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Raw percentage of the goal reached, rounded to the nearest integer.
    /// Not clamped: over-achievement reads over 100, regression reads negative.
    pub percent: f64,
    pub met: bool,
}

impl GoalProgress {
    /// The progress returned when no goal is set
    pub fn no_goal() -> Self {
        Self {
            percent: 0.0,
            met: false,
        }
    }
}

/// Round to one decimal place, halves away from zero
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Classify the direction of a chronological series of values
///
/// With fewer than two points there is nothing to compare and the result is
/// the "no data" summary. Otherwise the change is last minus first, the
/// percent is relative to the first value (zero first value reads as 0%),
/// and the direction compares the raw change against the stable band:
/// anything within +/-0.1 of zero is stable.
pub fn calculate_trend(values: &[f64]) -> TrendSummary {
    if values.len() < 2 {
        return TrendSummary::no_data();
    }

    let first = values[0];
    let last = values[values.len() - 1];
    let change = last - first;
    let percent = if first == 0.0 {
        0.0
    } else {
        change / first * 100.0
    };

    // Direction is judged on the raw change, before display rounding
    let direction = if change > STABLE_BAND {
        TrendDirection::Increasing
    } else if change < -STABLE_BAND {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    TrendSummary {
        direction,
        change: round1(change),
        percent: round1(percent),
    }
}

/// Convenience wrapper for `{date, value}` series
pub fn calculate_trend_points(points: &[TimePoint]) -> TrendSummary {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    calculate_trend(&values)
}

/// Compute progress toward a goal value
///
/// A missing goal (zero, negative, or non-finite) yields `{0, false}`.
/// The percentage is not clamped on either side.
pub fn calculate_goal_progress(current: f64, goal: f64) -> GoalProgress {
    if !goal.is_finite() || goal <= 0.0 {
        return GoalProgress::no_goal();
    }

    let percent = (current / goal * 100.0).round();
    GoalProgress {
        percent,
        met: percent >= 100.0,
    }
}

/// Count the trailing run of values at or above the goal
///
/// Scans the chronological series from the end backward and stops at the
/// first value below the goal, so the streak always describes the most
/// recent entries.
pub fn calculate_streak(values: &[f64], goal: f64) -> u32 {
    let mut streak = 0;
    for value in values.iter().rev() {
        if *value >= goal {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_requires_two_points() {
        assert_eq!(calculate_trend(&[]), TrendSummary::no_data());
        assert_eq!(calculate_trend(&[5.0]), TrendSummary::no_data());
    }

    #[test]
    fn test_trend_increasing() {
        let summary = calculate_trend(&[10.0, 12.0]);
        assert_eq!(summary.direction, TrendDirection::Increasing);
        assert_eq!(summary.change, 2.0);
        assert_eq!(summary.percent, 20.0);
    }

    #[test]
    fn test_trend_stable_at_boundary() {
        // A drop of exactly 0.1 sits on the stable band edge
        let summary = calculate_trend(&[10.0, 9.9]);
        assert_eq!(summary.direction, TrendDirection::Stable);
        assert_eq!(summary.change, -0.1);
    }

    #[test]
    fn test_trend_decreasing() {
        let summary = calculate_trend(&[80.0, 78.5]);
        assert_eq!(summary.direction, TrendDirection::Decreasing);
        assert_eq!(summary.change, -1.5);
        assert_eq!(summary.percent, -1.9);
    }

    #[test]
    fn test_trend_zero_first_value() {
        let summary = calculate_trend(&[0.0, 5.0]);
        assert_eq!(summary.direction, TrendDirection::Increasing);
        assert_eq!(summary.percent, 0.0);
    }

    #[test]
    fn test_trend_points_wrapper() {
        let points = vec![
            TimePoint { date: "2026-08-01".parse().unwrap(), value: 10.0 },
            TimePoint { date: "2026-08-02".parse().unwrap(), value: 12.0 },
        ];
        assert_eq!(calculate_trend_points(&points), calculate_trend(&[10.0, 12.0]));
    }

    #[test]
    fn test_goal_progress_no_goal() {
        assert_eq!(calculate_goal_progress(100.0, 0.0), GoalProgress::no_goal());
    }

    #[test]
    fn test_goal_progress_met() {
        let progress = calculate_goal_progress(100.0, 100.0);
        assert_eq!(progress.percent, 100.0);
        assert!(progress.met);
    }

    #[test]
    fn test_goal_progress_not_clamped() {
        let progress = calculate_goal_progress(150.0, 100.0);
        assert_eq!(progress.percent, 150.0);
        assert!(progress.met);

        let progress = calculate_goal_progress(-50.0, 100.0);
        assert_eq!(progress.percent, -50.0);
        assert!(!progress.met);
    }

    #[test]
    fn test_streak_counts_trailing_run() {
        assert_eq!(calculate_streak(&[5.0, 6.0, 7.0, 3.0, 8.0, 9.0], 5.0), 2);
    }

    #[test]
    fn test_streak_empty_and_full() {
        assert_eq!(calculate_streak(&[], 5.0), 0);
        assert_eq!(calculate_streak(&[5.0, 5.0, 5.0], 5.0), 3);
    }

    #[test]
    fn test_streak_broken_at_last_entry() {
        assert_eq!(calculate_streak(&[8.0, 9.0, 2.0], 5.0), 0);
    }
}
