/// Unit tests for the analytics engine's documented properties
use health_insights::*;
use chrono::NaiveDate;

#[cfg(test)]
mod analytics_unit_tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_trend_no_data_cases() {
        let expected = TrendSummary::no_data();
        assert_eq!(calculate_trend(&[]), expected);
        assert_eq!(calculate_trend(&[5.0]), expected);
        assert_eq!(expected.direction, TrendDirection::NoData);
        assert_eq!(expected.change, 0.0);
        assert_eq!(expected.percent, 0.0);
    }

    #[test]
    fn test_trend_increasing_case() {
        let summary = calculate_trend(&[10.0, 12.0]);
        assert_eq!(summary.change, 2.0);
        assert_eq!(summary.percent, 20.0);
        assert_eq!(summary.direction, TrendDirection::Increasing);
    }

    #[test]
    fn test_trend_boundary_is_stable() {
        // A change of exactly -0.1 does not qualify as decreasing
        let summary = calculate_trend(&[10.0, 9.9]);
        assert_eq!(summary.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_goal_progress_cases() {
        assert_eq!(calculate_goal_progress(100.0, 0.0), GoalProgress::no_goal());

        let met = calculate_goal_progress(100.0, 100.0);
        assert_eq!(met.percent, 100.0);
        assert!(met.met);
    }

    #[test]
    fn test_streak_trailing_run() {
        assert_eq!(calculate_streak(&[5.0, 6.0, 7.0, 3.0, 8.0, 9.0], 5.0), 2);
    }

    #[test]
    fn test_medication_adherence_cases() {
        let empty = medication_adherence(&[]);
        assert_eq!(empty.adherence, 100);
        assert_eq!(empty.missed, 0);

        let meds = vec![MedicationEntry {
            name: "A".to_string(),
            missed_doses: 7,
        }];
        let result = medication_adherence(&meds);
        assert_eq!(result.missed, 7);
        assert_eq!(result.adherence, 0);
    }

    #[test]
    fn test_hydration_low_average() {
        let entries = vec![
            HydrationEntry { date: day("2026-08-01"), amount: 1000.0 },
            HydrationEntry { date: day("2026-08-02"), amount: 1100.0 },
        ];
        let summary = hydration_status(&entries);
        assert_eq!(summary.avg_ml, 1050);
        assert_eq!(summary.status, HydrationStatus::Low);
    }

    #[test]
    fn test_app_engagement_distinct_days() {
        let spread: Vec<AppUsageEntry> = (0..14)
            .map(|i| AppUsageEntry {
                date: day(&format!("2026-08-{:02}", (i % 10) + 1)),
                action: "open".to_string(),
            })
            .collect();
        assert_eq!(app_engagement(&spread), Some(EngagementLevel::High));

        let clustered: Vec<AppUsageEntry> = (0..14)
            .map(|i| AppUsageEntry {
                date: day(&format!("2026-08-{:02}", (i % 4) + 1)),
                action: "open".to_string(),
            })
            .collect();
        assert_eq!(app_engagement(&clustered), Some(EngagementLevel::Low));
    }

    #[test]
    fn test_functions_do_not_mutate_input() {
        let entries = vec![
            StressLogEntry { date: day("2026-08-01"), level: StressLevel::High },
            StressLogEntry { date: day("2026-08-02"), level: StressLevel::Low },
        ];
        let before = entries.clone();

        let first = stress_level(&entries);
        let second = stress_level(&entries);
        assert_eq!(first, second);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_screenings_against_pinned_clock() {
        let engine = AnalyticsEngine::pinned(day("2026-08-30"));
        let screenings = vec![
            ScreeningEntry {
                name: "Overdue".to_string(),
                due_date: day("2026-08-01"),
                completed: false,
            },
            ScreeningEntry {
                name: "Future".to_string(),
                due_date: day("2026-09-15"),
                completed: false,
            },
        ];

        let due = engine.upcoming_screenings(&screenings);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].name, "Overdue");
    }

    #[test]
    fn test_classification_outputs_stay_in_closed_sets() {
        // Serialized labels are the documented wire values, never free text
        let rating = stress_level(&[StressLogEntry {
            date: day("2026-08-01"),
            level: StressLevel::VeryHigh,
        }]);
        assert_eq!(serde_json::to_value(rating).unwrap(), "high");

        let hydration = hydration_status(&[]);
        assert_eq!(serde_json::to_value(hydration.status).unwrap(), "low");

        let trend = calculate_trend(&[]);
        assert_eq!(serde_json::to_value(trend.direction).unwrap(), "no data");
    }
}
