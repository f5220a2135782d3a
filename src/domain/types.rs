/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental identifier and categorical types
/// consumed by the analytics engine: the closed enum sets for mood, stress,
/// social support, environmental exposure, and diet, plus the label enums
/// the classification functions return.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user profile
///
/// This is a wrapper around UUID to provide type safety - a profile ID
/// can't be confused with any other string identifier floating around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    /// Generate a new random profile ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a profile ID from a string (useful when loading snapshots)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Mood categories recorded in the daily mood log
///
/// This is a closed set: snapshots carrying a mood outside it fail to
/// deserialize rather than silently passing an arbitrary string through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Calm,
    Neutral,
    Sad,
    Anxious,
    Irritable,
}

impl Mood {
    /// Get the display name for this mood
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Irritable => "irritable",
        }
    }
}

/// Self-reported stress level on a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// How supported the user felt on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialFeeling {
    Isolated,
    Neutral,
    Supported,
}

/// Severity of a logged environmental exposure (air quality, pollen, noise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureLevel {
    Low,
    Moderate,
    High,
}

/// Three-tier risk scale shared by the burnout log and the burnout classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}

/// Self-described dietary pattern
///
/// Unknown wire values collapse into `Unspecified` instead of failing the
/// whole snapshot, since diet only feeds a default scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietPattern {
    Balanced,
    Vegetarian,
    Vegan,
    LowCarb,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Direction of a numeric time series over its full span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    #[serde(rename = "no data")]
    NoData,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
            TrendDirection::NoData => "no data",
        }
    }
}

/// Hydration band derived from average daily intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationStatus {
    Low,
    Adequate,
    High,
}

/// Overall stress classification over the provided log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressRating {
    Low,
    Moderate,
    High,
}

/// Social standing over the recent social-support log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialStanding {
    Isolated,
    Supported,
    Neutral,
}

/// How regularly the user has been opening the app recently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    Low,
    Moderate,
    High,
}
