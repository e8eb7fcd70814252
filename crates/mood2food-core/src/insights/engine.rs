//! Insight derivation over the diary logs
//!
//! All functions here are pure and synchronous: they take the full logs by
//! reference on every call, retain nothing, and return freshly owned output.
//! Calling them twice with identical input yields identical output.

use std::collections::HashMap;

use crate::models::{FoodEntry, MoodEntry};

use super::recommend::recommend_foods;
use super::types::{InsightOutcome, InsightReport};

/// Minimum entries per log before a report is produced
pub const MIN_ENTRIES_PER_LOG: usize = 3;

/// Default number of entries in the recent mood trend
pub const RECENT_MOOD_LIMIT: usize = 5;

/// Find the most frequent mood label in the log
///
/// Counting is case-sensitive exact matching. Ties break first-seen-wins: a
/// later label must strictly exceed the current winner's count to displace
/// it, so among tied labels the one reaching that count earliest in log
/// order is returned. `None` on an empty log.
pub fn most_frequent_mood(mood_log: &[MoodEntry]) -> Option<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut winner: Option<(&str, usize)> = None;

    for entry in mood_log {
        let count = counts.entry(entry.mood.as_str()).or_insert(0);
        *count += 1;
        match winner {
            Some((_, best)) if *count <= best => {}
            _ => winner = Some((entry.mood.as_str(), *count)),
        }
    }

    winner.map(|(mood, _)| mood)
}

/// The `limit` most recent entries, newest first
///
/// Sorted by timestamp descending; entries with equal timestamps keep their
/// original relative order. The input log is not mutated and may arrive in
/// any order. Returns fewer than `limit` items when the log is smaller.
pub fn recent_moods(mood_log: &[MoodEntry], limit: usize) -> Vec<MoodEntry> {
    let mut sorted = mood_log.to_vec();
    // Stable sort keeps insertion order among equal timestamps.
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

/// Derive the full insight report from both logs
///
/// Returns [`InsightOutcome::InsufficientData`] when either log holds fewer
/// than [`MIN_ENTRIES_PER_LOG`] entries; below that threshold no partial
/// data is produced.
pub fn derive_insights(mood_log: &[MoodEntry], food_log: &[FoodEntry]) -> InsightOutcome {
    if mood_log.len() < MIN_ENTRIES_PER_LOG || food_log.len() < MIN_ENTRIES_PER_LOG {
        tracing::debug!(
            mood_entries = mood_log.len(),
            food_entries = food_log.len(),
            required = MIN_ENTRIES_PER_LOG,
            "Not enough diary entries for insights"
        );
        return InsightOutcome::InsufficientData;
    }

    // The threshold guarantees a non-empty mood log, so both lookups succeed.
    let Some(dominant) = most_frequent_mood(mood_log) else {
        return InsightOutcome::InsufficientData;
    };
    let Some(recommendation) = recommend_foods(dominant) else {
        return InsightOutcome::InsufficientData;
    };

    let dominant_count = mood_log.iter().filter(|e| e.mood == dominant).count();
    let total_entries = mood_log.len();

    tracing::debug!(
        dominant_mood = dominant,
        count = dominant_count,
        total = total_entries,
        "Insight analysis complete"
    );

    InsightOutcome::Report(InsightReport {
        dominant_mood: dominant.to_string(),
        dominant_count,
        total_entries,
        dominant_share: dominant_count as f64 / total_entries as f64,
        recent_moods: recent_moods(mood_log, RECENT_MOOD_LIMIT),
        recommendation,
    })
}
