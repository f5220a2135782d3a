/// Integration tests: snapshot JSON on disk through to a full report
use health_insights::*;
use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

#[cfg(test)]
mod report_integration_tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    const SNAPSHOT: &str = r#"{
        "weight_log": [
            {"date": "2026-08-01", "value": 82.0},
            {"date": "2026-08-15", "value": 80.5},
            {"date": "2026-08-29", "value": 79.8}
        ],
        "sleep_log": [
            {"date": "2026-08-27", "value": 6.5},
            {"date": "2026-08-28", "value": 7.0},
            {"date": "2026-08-29", "value": 7.5}
        ],
        "steps_log": [
            {"date": "2026-08-27", "value": 9000},
            {"date": "2026-08-28", "value": 8500},
            {"date": "2026-08-29", "value": 10200}
        ],
        "daily_step_goal": 8000,
        "hydration_log": [
            {"date": "2026-08-28", "amount": 1000},
            {"date": "2026-08-29", "amount": 1100}
        ],
        "stress_log": [
            {"date": "2026-08-27", "level": "high"},
            {"date": "2026-08-28", "level": "very_high"},
            {"date": "2026-08-29", "level": "low"}
        ],
        "mood_log": [
            {"date": "2026-08-27", "mood": "calm"},
            {"date": "2026-08-28", "mood": "happy"},
            {"date": "2026-08-29", "mood": "happy"}
        ],
        "screenings": [
            {"name": "Blood panel", "due_date": "2026-08-10", "completed": false},
            {"name": "Eye exam", "due_date": "2026-12-01", "completed": false}
        ],
        "medications": [
            {"name": "Metformin", "missed_doses": 1}
        ],
        "chronic_conditions": ["diabetes"],
        "dietary_pattern": "balanced",
        "immunizations": [
            {"vaccine_name": "Influenza", "date_administered": "2025-10-01"}
        ],
        "recommended_vaccines": ["Influenza", "Tdap"],
        "action_plans": [
            {"date": "2026-08-25", "plan": "Walk after dinner"},
            {"date": "2026-08-26", "plan": "Swap soda for water"},
            {"date": "2026-08-27", "plan": "Lights out by 23:00"},
            {"date": "2026-08-28", "plan": "Ten-minute stretch"}
        ],
        "recommendation_responses": [
            {"date": "2026-08-27", "recommendation": "walk", "followed": true},
            {"date": "2026-08-28", "recommendation": "stretch", "followed": false}
        ]
    }"#;

    fn write_snapshot(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write snapshot");
        file
    }

    #[test]
    fn test_snapshot_to_full_report() {
        let file = write_snapshot(SNAPSHOT);
        let profile = load_profile(file.path()).expect("Failed to load snapshot");

        let engine = AnalyticsEngine::pinned(day("2026-08-30"));
        let report = DashboardReport::build(&engine, &profile);

        // Trend & goal math
        assert_eq!(report.weight_trend.direction, TrendDirection::Decreasing);
        assert_eq!(report.weight_trend.change, -2.2);
        assert_eq!(report.sleep_trend.direction, TrendDirection::Increasing);
        assert!(report.step_goal_progress.met);
        assert_eq!(report.step_goal_streak, 3);

        // Risk & adherence
        assert_eq!(report.screenings_due.len(), 1);
        assert_eq!(report.screenings_due[0].name, "Blood panel");
        assert_eq!(report.medication_adherence.missed, 1);
        assert_eq!(report.medication_adherence.adherence, 86);
        assert_eq!(report.chronic_condition_risks, vec!["Diabetes"]);

        // Lifestyle
        assert_eq!(report.diet_quality_score, 90);
        assert_eq!(report.hydration.avg_ml, 1050);
        assert_eq!(report.hydration.status, HydrationStatus::Low);
        assert_eq!(report.stress, Some(StressRating::High));

        // Preventive health
        assert_eq!(report.vaccinations.received, vec!["Influenza"]);
        assert_eq!(report.vaccinations.missing, vec!["Tdap"]);

        // Engagement & coaching
        assert_eq!(report.mood, Some(Mood::Happy));
        assert_eq!(report.recommendation_follow_rate, 50);
        assert_eq!(
            report.recent_action_plans,
            vec!["Swap soda for water", "Lights out by 23:00", "Ten-minute stretch"]
        );
        // Streak is 3 (< 7) and weight is decreasing, so the weight rule fires
        assert!(report.feedback.contains("weight"));

        // Sentinels for the logs the snapshot doesn't carry
        assert_eq!(report.loneliness, None);
        assert_eq!(report.burnout, None);
        assert_eq!(report.app_engagement, None);
        assert_eq!(report.environmental_risk, "none");
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let file = write_snapshot(SNAPSHOT);
        let profile = load_profile(file.path()).expect("Failed to load snapshot");
        let engine = AnalyticsEngine::pinned(day("2026-08-30"));
        let report = DashboardReport::build(&engine, &profile);

        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
        let back: DashboardReport = serde_json::from_str(&json).expect("Failed to parse report");
        assert_eq!(report, back);
    }

    #[test]
    fn test_empty_snapshot_loads_and_reports() {
        let file = write_snapshot("{}");
        let profile = load_profile(file.path()).expect("Empty snapshot should load");

        let engine = AnalyticsEngine::pinned(day("2026-08-30"));
        let report = DashboardReport::build(&engine, &profile);
        assert_eq!(report.weight_trend, TrendSummary::no_data());
        assert_eq!(report.medication_adherence.adherence, 100);
        assert_eq!(report.stress, None);
    }

    #[test]
    fn test_invalid_snapshot_rejected_at_boundary() {
        // Unknown stress level fails deserialization instead of flowing
        // silently into the classifier
        let file = write_snapshot(
            r#"{"stress_log": [{"date": "2026-08-01", "level": "apocalyptic"}]}"#,
        );
        assert!(matches!(
            load_profile(file.path()),
            Err(ReportError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::path::Path::new("/nonexistent/snapshot.json");
        assert!(matches!(load_profile(path), Err(ReportError::Io(_))));
    }
}
