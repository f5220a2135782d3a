/// Screening, medication-adherence, and chronic-condition analytics
///
/// These functions flag the care items that need attention: screenings past
/// their due date, medications with missed doses, and diagnosed conditions
/// the app tracks specific guidance for.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{MedicationEntry, ScreeningEntry};

/// Conditions the navigator carries dedicated guidance for. Matching is
/// case-insensitive against the profile's free-form condition names.
const TRACKED_CONDITIONS: &[&str] = &["Diabetes", "Hypertension"];

/// Adherence summary over the user's medication list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationAdherence {
    /// Estimated adherence percentage, 0-100
    pub adherence: u32,
    /// Total missed doses across all medications
    pub missed: u32,
}

impl MedicationAdherence {
    /// The summary for an empty medication list: nothing to miss
    pub fn perfect() -> Self {
        Self {
            adherence: 100,
            missed: 0,
        }
    }
}

/// Strategy for turning missed-dose counts into an adherence percentage
///
/// The shipped model is a deliberate approximation; this seam exists so a
/// real dosing-schedule model can replace it without touching callers.
pub trait AdherenceModel {
    fn adherence(&self, medications: &[MedicationEntry]) -> MedicationAdherence;
}

/// Fixed-window adherence model: one expected dose per medication per day
/// over a 7-day window
///
/// TODO: replace with per-medication dosing schedules once prescriptions
/// carry them; the trait seam above is where that lands.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyAdherence {
    pub window_days: u32,
}

impl Default for WeeklyAdherence {
    fn default() -> Self {
        Self { window_days: 7 }
    }
}

impl AdherenceModel for WeeklyAdherence {
    fn adherence(&self, medications: &[MedicationEntry]) -> MedicationAdherence {
        if medications.is_empty() {
            return MedicationAdherence::perfect();
        }

        let missed: u32 = medications.iter().map(|m| m.missed_doses).sum();
        let expected = (medications.len() as f64) * f64::from(self.window_days);
        let adherence = (100.0 - f64::from(missed) / expected * 100.0)
            .round()
            .max(0.0) as u32;

        MedicationAdherence { adherence, missed }
    }
}

/// List screenings that are due and not completed
///
/// Note the semantics: a screening shows up here once its due date has
/// passed (due_date <= today) without completion, so the list is really
/// "overdue" despite the product wording "upcoming". Preserved as observed
/// in production; flagged for product review. Input order is kept.
pub fn upcoming_screenings(
    screenings: &[ScreeningEntry],
    today: NaiveDate,
) -> Vec<ScreeningEntry> {
    screenings
        .iter()
        .filter(|s| !s.completed && s.due_date <= today)
        .cloned()
        .collect()
}

/// Compute medication adherence with the default weekly model
pub fn medication_adherence(medications: &[MedicationEntry]) -> MedicationAdherence {
    WeeklyAdherence::default().adherence(medications)
}

/// Return the tracked chronic conditions present in the profile
///
/// Extending coverage means adding a name to `TRACKED_CONDITIONS`.
pub fn chronic_condition_risk(conditions: &[String]) -> Vec<&'static str> {
    TRACKED_CONDITIONS
        .iter()
        .filter(|tracked| {
            conditions
                .iter()
                .any(|c| c.to_lowercase() == tracked.to_lowercase())
        })
        .copied()
        .collect()
}
