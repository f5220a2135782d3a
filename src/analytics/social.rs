/// Social-support and environmental-exposure analytics

use crate::analytics::window::{trailing, trailing_majority};
use crate::domain::{EnvironmentalLogEntry, ExposureLevel, SocialFeeling, SocialLogEntry,
    SocialStanding};

/// Days of log considered for the social and environmental summaries
const RECENT_WINDOW: usize = 7;

/// Headline environmental risk for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentalRisk {
    None,
    /// A high-level exposure was logged recently; `kind` names it
    High { kind: String },
}

impl std::fmt::Display for EnvironmentalRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvironmentalRisk::None => write!(f, "none"),
            EnvironmentalRisk::High { kind } => write!(f, "{} (high)", kind),
        }
    }
}

/// Classify social standing from the trailing week of support entries
///
/// A strict majority of isolated entries reads isolated; failing that, a
/// strict majority of supported entries reads supported; otherwise neutral.
/// Empty log -> `None`.
pub fn loneliness_status(entries: &[SocialLogEntry]) -> Option<SocialStanding> {
    trailing_majority(
        entries,
        Some(RECENT_WINDOW),
        |e| match e.feeling {
            SocialFeeling::Isolated => SocialStanding::Isolated,
            SocialFeeling::Supported => SocialStanding::Supported,
            SocialFeeling::Neutral => SocialStanding::Neutral,
        },
        &[SocialStanding::Isolated, SocialStanding::Supported],
        SocialStanding::Neutral,
    )
}

/// Report the first high-level exposure in the trailing week
///
/// Only the first match (in log order within the window) is reported, even
/// when several high exposures are present. Empty log reads as no risk.
pub fn environmental_risk(entries: &[EnvironmentalLogEntry]) -> EnvironmentalRisk {
    let recent = trailing(entries, RECENT_WINDOW);

    match recent.iter().find(|e| e.level == ExposureLevel::High) {
        Some(entry) => EnvironmentalRisk::High {
            kind: entry.kind.clone(),
        },
        None => EnvironmentalRisk::None,
    }
}
