//! Insight Engine - mood and food diary analysis
//!
//! Derives a summary from the two diary logs: the most frequent mood, a
//! recency-ordered mood trend, and a food recommendation keyed off a
//! canonical mood bucket.
//!
//! The engine is a stateless pure transformation layer. It owns no state,
//! performs no I/O, and is invoked fresh on every query with the full logs
//! passed by reference; identical inputs always produce identical output.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mood2food_core::insights::{derive_insights, InsightOutcome};
//!
//! match derive_insights(&mood_log, &food_log) {
//!     InsightOutcome::Report(report) => render(report),
//!     InsightOutcome::InsufficientData => explain_threshold(),
//! }
//! ```

pub mod engine;
pub mod recommend;
pub mod types;

pub use engine::{
    derive_insights, most_frequent_mood, recent_moods, MIN_ENTRIES_PER_LOG, RECENT_MOOD_LIMIT,
};
pub use recommend::{classify_mood, recommend_foods};
pub use types::{FoodRecommendation, InsightOutcome, InsightReport, MoodBucket};
