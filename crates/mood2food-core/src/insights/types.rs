//! Core types for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::MoodEntry;

/// Canonical mood groupings used to select a recommendation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodBucket {
    Stressed,
    Sad,
    Tired,
    Anxious,
}

impl MoodBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodBucket::Stressed => "stressed",
            MoodBucket::Sad => "sad",
            MoodBucket::Tired => "tired",
            MoodBucket::Anxious => "anxious",
        }
    }
}

impl fmt::Display for MoodBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MoodBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stressed" => Ok(MoodBucket::Stressed),
            "sad" => Ok(MoodBucket::Sad),
            "tired" => Ok(MoodBucket::Tired),
            "anxious" => Ok(MoodBucket::Anxious),
            _ => Err(format!("Unknown mood bucket: {}", s)),
        }
    }
}

/// Food suggestions derived for a mood label
///
/// Derived on every query, never persisted. `foods` always holds exactly
/// five names from the static bucket table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecommendation {
    /// The mood label the recommendation was requested for (not the bucket)
    pub mood: String,
    pub foods: Vec<String>,
    pub reasoning: String,
}

/// The derived summary over both diary logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Most frequent mood label across the log
    pub dominant_mood: String,
    /// Occurrences of the dominant mood
    pub dominant_count: usize,
    /// Total mood entries considered
    pub total_entries: usize,
    /// dominant_count / total_entries, for explanation text
    pub dominant_share: f64,
    /// Most recent entries, newest first
    pub recent_moods: Vec<MoodEntry>,
    pub recommendation: FoodRecommendation,
}

/// Result of a full insight derivation
///
/// `InsufficientData` is a valid terminal result, not an error: callers
/// branch on it and render an explanatory message instead of partial
/// insights. It deliberately carries no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightOutcome {
    Report(InsightReport),
    InsufficientData,
}

impl InsightOutcome {
    pub fn as_report(&self) -> Option<&InsightReport> {
        match self {
            InsightOutcome::Report(report) => Some(report),
            InsightOutcome::InsufficientData => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, InsightOutcome::InsufficientData)
    }
}
