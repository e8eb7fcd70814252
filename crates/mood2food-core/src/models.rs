//! Domain models for Mood2Food

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Moods selectable in the tracker UI.
///
/// Informational: the engine accepts any label, and frequency counting is
/// case-sensitive exact matching on whatever the host application logged.
pub const MOOD_OPTIONS: [&str; 12] = [
    "Happy",
    "Content",
    "Excited",
    "Energetic",
    "Calm",
    "Tired",
    "Bored",
    "Stressed",
    "Anxious",
    "Sad",
    "Angry",
    "Frustrated",
];

/// Valid intensity range for a mood entry
pub const INTENSITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// A timestamped mood record logged by the user
///
/// Entries are append-only: once created they are never mutated, only
/// discarded by whole-log deletion on the host side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    /// Self-reported intensity, 1..=10
    pub intensity: u8,
    #[serde(default)]
    pub notes: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl MoodEntry {
    /// Create a validated mood entry
    pub fn new(
        mood: impl Into<String>,
        intensity: u8,
        notes: impl Into<String>,
        timestamp: i64,
    ) -> Result<Self> {
        let entry = Self {
            mood: mood.into(),
            intensity,
            notes: notes.into(),
            timestamp,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the entry-creation boundary rules
    ///
    /// Deserialized entries bypass the constructor, so ingestion calls this
    /// on every record before handing logs to the engine.
    pub fn validate(&self) -> Result<()> {
        if self.mood.trim().is_empty() {
            return Err(Error::InvalidEntry("mood label must not be empty".into()));
        }
        if !INTENSITY_RANGE.contains(&self.intensity) {
            return Err(Error::InvalidEntry(format!(
                "intensity {} out of range 1..=10",
                self.intensity
            )));
        }
        Ok(())
    }

    /// Timestamp as a UTC datetime, if the millisecond value is representable
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// A timestamped food/meal record logged by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub category: FoodCategory,
    #[serde(default)]
    pub notes: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl FoodEntry {
    /// Create a validated food entry
    pub fn new(
        name: impl Into<String>,
        category: FoodCategory,
        notes: impl Into<String>,
        timestamp: i64,
    ) -> Result<Self> {
        let entry = Self {
            name: name.into(),
            category,
            notes: notes.into(),
            timestamp,
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidEntry("food name must not be empty".into()));
        }
        Ok(())
    }

    /// Timestamp as a UTC datetime, if the millisecond value is representable
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Food diary categories
///
/// The fixed set offered by the diary form. Serialized labels match the
/// user-facing strings so JSON exports round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    #[serde(rename = "Fruits & Vegetables")]
    FruitsVegetables,
    #[serde(rename = "Proteins")]
    Proteins,
    #[serde(rename = "Grains & Starches")]
    GrainsStarches,
    #[serde(rename = "Dairy")]
    Dairy,
    #[serde(rename = "Sweets & Desserts")]
    SweetsDesserts,
    #[serde(rename = "Fast Food")]
    FastFood,
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Snacks")]
    Snacks,
    #[serde(rename = "Other")]
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 9] = [
        Self::FruitsVegetables,
        Self::Proteins,
        Self::GrainsStarches,
        Self::Dairy,
        Self::SweetsDesserts,
        Self::FastFood,
        Self::Beverages,
        Self::Snacks,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FruitsVegetables => "Fruits & Vegetables",
            Self::Proteins => "Proteins",
            Self::GrainsStarches => "Grains & Starches",
            Self::Dairy => "Dairy",
            Self::SweetsDesserts => "Sweets & Desserts",
            Self::FastFood => "Fast Food",
            Self::Beverages => "Beverages",
            Self::Snacks => "Snacks",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Fruits & Vegetables" => Ok(Self::FruitsVegetables),
            "Proteins" => Ok(Self::Proteins),
            "Grains & Starches" => Ok(Self::GrainsStarches),
            "Dairy" => Ok(Self::Dairy),
            "Sweets & Desserts" => Ok(Self::SweetsDesserts),
            "Fast Food" => Ok(Self::FastFood),
            "Beverages" => Ok(Self::Beverages),
            "Snacks" => Ok(Self::Snacks),
            "Other" => Ok(Self::Other),
            _ => Err(format!("Unknown food category: {}", s)),
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mood_entry_validation() {
        assert!(MoodEntry::new("Happy", 5, "", 1_700_000_000_000).is_ok());
        assert!(MoodEntry::new("", 5, "", 0).is_err());
        assert!(MoodEntry::new("Happy", 0, "", 0).is_err());
        assert!(MoodEntry::new("Happy", 11, "", 0).is_err());
    }

    #[test]
    fn test_food_entry_validation() {
        assert!(FoodEntry::new("Salad", FoodCategory::FruitsVegetables, "", 0).is_ok());
        assert!(FoodEntry::new("  ", FoodCategory::Other, "", 0).is_err());
    }

    #[test]
    fn test_food_category_round_trip() {
        for cat in FoodCategory::ALL {
            assert_eq!(FoodCategory::from_str(cat.as_str()).unwrap(), cat);
        }
        assert!(FoodCategory::from_str("Pizza").is_err());
    }

    #[test]
    fn test_food_category_serde_labels() {
        let json = serde_json::to_string(&FoodCategory::FruitsVegetables).unwrap();
        assert_eq!(json, "\"Fruits & Vegetables\"");
        let back: FoodCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FoodCategory::FruitsVegetables);
    }

    #[test]
    fn test_mood_entry_notes_default() {
        let entry: MoodEntry =
            serde_json::from_str(r#"{"mood":"Calm","intensity":3,"timestamp":42}"#).unwrap();
        assert_eq!(entry.notes, "");
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_recorded_at() {
        let entry = MoodEntry::new("Calm", 4, "", 1_700_000_000_000).unwrap();
        let dt = entry.recorded_at().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }
}
