/// Preventive-health analytics: vaccinations and care reminders

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{ImmunizationRecord, ReminderEntry};

/// Which recommended vaccines the user has and hasn't received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationStatus {
    /// Vaccine names straight from the immunization records. Mirrors the
    /// raw records, so a vaccine administered twice appears twice.
    pub received: Vec<String>,
    /// Recommended vaccines with no matching record
    pub missing: Vec<String>,
}

/// Split the recommended vaccine list into received and missing
pub fn vaccination_status(
    records: &[ImmunizationRecord],
    recommended: &[String],
) -> VaccinationStatus {
    let received: Vec<String> = records.iter().map(|r| r.vaccine_name.clone()).collect();
    let missing: Vec<String> = recommended
        .iter()
        .filter(|name| !received.contains(name))
        .cloned()
        .collect();

    VaccinationStatus { received, missing }
}

/// List preventive reminders that are due and not completed
///
/// Same overdue semantics as `upcoming_screenings` (due_date <= today,
/// despite the "upcoming" wording - flagged for product review). Input
/// order is kept.
pub fn upcoming_preventive_reminders(
    reminders: &[ReminderEntry],
    today: NaiveDate,
) -> Vec<ReminderEntry> {
    reminders
        .iter()
        .filter(|r| !r.completed && r.due_date <= today)
        .cloned()
        .collect()
}
