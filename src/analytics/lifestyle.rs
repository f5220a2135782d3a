/// Diet, hydration, and stress analytics
///
/// Fixed-threshold banding for diet and hydration, and the whole-log
/// majority rule for stress.

use serde::{Deserialize, Serialize};
use crate::analytics::window::trailing_majority;
use crate::domain::{DietPattern, HydrationEntry, HydrationStatus, StressLevel,
    StressLogEntry, StressRating};

/// Average intake below this reads as low (ml/day)
const HYDRATION_LOW_ML: u32 = 1200;
/// Average intake above this reads as high (ml/day)
const HYDRATION_HIGH_ML: u32 = 3000;

/// Average daily intake and the band it falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationSummary {
    /// Mean daily intake, rounded to the nearest millilitre
    pub avg_ml: u32,
    pub status: HydrationStatus,
}

impl HydrationSummary {
    /// The summary for an empty hydration log
    pub fn no_data() -> Self {
        Self {
            avg_ml: 0,
            status: HydrationStatus::Low,
        }
    }
}

/// Score the user's diet quality
///
/// An explicitly assessed score always wins. Without one, the dietary
/// pattern maps to a fixed default: balanced 90, vegetarian/vegan 80,
/// low-carb 75, everything else 60.
pub fn diet_quality_score(explicit: Option<u32>, pattern: DietPattern) -> u32 {
    if let Some(score) = explicit {
        return score;
    }

    match pattern {
        DietPattern::Balanced => 90,
        DietPattern::Vegetarian | DietPattern::Vegan => 80,
        DietPattern::LowCarb => 75,
        DietPattern::Unspecified => 60,
    }
}

/// Band the user's average daily fluid intake
///
/// Thresholds are fixed constants in millilitres. An empty log reads as
/// low with a zero average rather than erroring.
pub fn hydration_status(entries: &[HydrationEntry]) -> HydrationSummary {
    if entries.is_empty() {
        return HydrationSummary::no_data();
    }

    let total: f64 = entries.iter().map(|e| e.amount).sum();
    let avg_ml = (total / entries.len() as f64).round() as u32;

    let status = if avg_ml < HYDRATION_LOW_ML {
        HydrationStatus::Low
    } else if avg_ml > HYDRATION_HIGH_ML {
        HydrationStatus::High
    } else {
        HydrationStatus::Adequate
    };

    HydrationSummary { avg_ml, status }
}

/// Classify overall stress from the stress log
///
/// Unlike the other majority classifiers this one considers the entire
/// provided log, not a trailing window. High and very-high entries count
/// together toward the high rung; a strict majority of moderate entries
/// reads moderate; everything else falls through to low. Empty -> `None`.
pub fn stress_level(entries: &[StressLogEntry]) -> Option<StressRating> {
    trailing_majority(
        entries,
        None,
        |e| match e.level {
            StressLevel::High | StressLevel::VeryHigh => StressRating::High,
            StressLevel::Moderate => StressRating::Moderate,
            StressLevel::Low => StressRating::Low,
        },
        &[StressRating::High, StressRating::Moderate],
        StressRating::Low,
    )
}
