//! Mood2Food Core Library
//!
//! Shared functionality for the Mood2Food diary insight tool:
//! - Domain models for mood and food diary entries
//! - Entry-creation boundary validation
//! - JSON/CSV diary log ingestion
//! - The insight engine: frequency analysis, recency trends, and
//!   mood-to-food recommendation lookup
//!
//! The engine itself is pure: logs are owned by the caller and passed in by
//! reference on every query, and the output contains only plain data.

pub mod error;
pub mod import;
pub mod insights;
pub mod models;

pub use error::{Error, Result};
pub use import::{detect_log_format, read_food_log, read_mood_log, LogFormat};
pub use insights::{
    derive_insights, most_frequent_mood, recent_moods, recommend_foods, FoodRecommendation,
    InsightOutcome, InsightReport, MoodBucket, MIN_ENTRIES_PER_LOG, RECENT_MOOD_LIMIT,
};
pub use models::{FoodCategory, FoodEntry, MoodEntry, INTENSITY_RANGE, MOOD_OPTIONS};
