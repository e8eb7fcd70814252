//! Insight derivation command implementations

use std::path::Path;

use anyhow::Result;
use mood2food_core::{
    derive_insights, most_frequent_mood, recent_moods, recommend_foods, InsightOutcome,
    InsightReport, MoodEntry, MIN_ENTRIES_PER_LOG,
};

use super::logs::{load_food_log, load_mood_log};
use super::truncate;

pub fn cmd_insights(
    moods_path: &Path,
    foods_path: &Path,
    format_override: Option<&str>,
    json: bool,
) -> Result<()> {
    let mood_log = load_mood_log(moods_path, format_override)?;
    let food_log = load_food_log(foods_path, format_override)?;

    let outcome = derive_insights(&mood_log, &food_log);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        InsightOutcome::InsufficientData => {
            println!();
            println!("📉 Not enough data yet");
            println!(
                "   Log at least {} mood entries and {} food entries to see \
                 insights about your mood and eating patterns.",
                MIN_ENTRIES_PER_LOG, MIN_ENTRIES_PER_LOG
            );
            println!(
                "   Currently: {} mood entries, {} food entries.",
                mood_log.len(),
                food_log.len()
            );
        }
        InsightOutcome::Report(report) => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &InsightReport) {
    println!();
    println!("🧠 Your Mood Patterns");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Your most frequent mood is \"{}\". It appears in {} out of {} \
         entries ({:.0}%).",
        report.dominant_mood,
        report.dominant_count,
        report.total_entries,
        report.dominant_share * 100.0
    );
    println!();
    println!("   Recent mood trend:");
    for entry in &report.recent_moods {
        print_mood_entry(entry);
    }

    println!();
    println!("🥗 Food Recommendations for Your Mood");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Based on your frequent \"{}\" mood, these foods might help:",
        report.recommendation.mood
    );
    for food in &report.recommendation.foods {
        println!("   • {}", food);
    }
    println!();
    println!("   {}", report.recommendation.reasoning);
}

fn print_mood_entry(entry: &MoodEntry) {
    let when = entry
        .recorded_at()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown time".to_string());
    if entry.notes.is_empty() {
        println!("   {} ({}/10)  {}", entry.mood, entry.intensity, when);
    } else {
        println!(
            "   {} ({}/10)  {}  {}",
            entry.mood,
            entry.intensity,
            when,
            truncate(&entry.notes, 40)
        );
    }
}

pub fn cmd_frequent(moods_path: &Path, format_override: Option<&str>, json: bool) -> Result<()> {
    let mood_log = load_mood_log(moods_path, format_override)?;
    let frequent = most_frequent_mood(&mood_log);

    if json {
        println!("{}", serde_json::json!({ "mood": frequent }));
        return Ok(());
    }

    println!();
    match frequent {
        Some(mood) => {
            let count = mood_log.iter().filter(|e| e.mood == mood).count();
            println!(
                "🙂 Most frequent mood: {} ({} of {} entries)",
                mood,
                count,
                mood_log.len()
            );
        }
        None => println!("No mood entries yet."),
    }
    Ok(())
}

pub fn cmd_recent(
    moods_path: &Path,
    limit: usize,
    format_override: Option<&str>,
    json: bool,
) -> Result<()> {
    let mood_log = load_mood_log(moods_path, format_override)?;
    let recent = recent_moods(&mood_log, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&recent)?);
        return Ok(());
    }

    println!();
    if recent.is_empty() {
        println!("No mood entries yet.");
        return Ok(());
    }

    println!("🕑 Recent moods (newest first)");
    for entry in &recent {
        print_mood_entry(entry);
    }
    Ok(())
}

pub fn cmd_recommend(mood: &str, json: bool) -> Result<()> {
    let recommendation = recommend_foods(mood);

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    println!();
    match recommendation {
        Some(rec) => {
            println!("🥗 Foods for a \"{}\" mood:", rec.mood);
            for food in &rec.foods {
                println!("   • {}", food);
            }
            println!();
            println!("   {}", rec.reasoning);
        }
        None => println!("No recommendation: mood label is empty."),
    }
    Ok(())
}
