//! Log loading, validation, and reference listing commands

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use mood2food_core::{
    detect_log_format, read_food_log, read_mood_log, FoodCategory, FoodEntry, LogFormat,
    MoodEntry, MOOD_OPTIONS,
};

/// Resolve the log format for a file: explicit --format wins, otherwise the
/// file extension decides.
pub fn resolve_format(path: &Path, format_override: Option<&str>) -> Result<LogFormat> {
    if let Some(fmt) = format_override {
        return LogFormat::from_str(fmt).map_err(|e| anyhow!(e));
    }
    detect_log_format(path).ok_or_else(|| {
        anyhow!(
            "Cannot detect log format for {} (use --format json|csv)",
            path.display()
        )
    })
}

/// Load and validate a mood log file
pub fn load_mood_log(path: &Path, format_override: Option<&str>) -> Result<Vec<MoodEntry>> {
    let format = resolve_format(path, format_override)?;
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_mood_log(file, format)
        .with_context(|| format!("Failed to parse mood log {}", path.display()))
}

/// Load and validate a food log file
pub fn load_food_log(path: &Path, format_override: Option<&str>) -> Result<Vec<FoodEntry>> {
    let format = resolve_format(path, format_override)?;
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_food_log(file, format)
        .with_context(|| format!("Failed to parse food log {}", path.display()))
}

pub fn cmd_validate(
    moods: Option<&Path>,
    foods: Option<&Path>,
    format_override: Option<&str>,
    json: bool,
) -> Result<()> {
    if moods.is_none() && foods.is_none() {
        anyhow::bail!("Nothing to validate: pass --moods and/or --foods");
    }

    let mood_count = moods
        .map(|p| load_mood_log(p, format_override).map(|log| log.len()))
        .transpose()?;
    let food_count = foods
        .map(|p| load_food_log(p, format_override).map(|log| log.len()))
        .transpose()?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "mood_entries": mood_count,
                "food_entries": food_count,
            })
        );
        return Ok(());
    }

    println!();
    println!("✅ Logs valid");
    if let Some(count) = mood_count {
        println!("   Mood entries: {}", count);
    }
    if let Some(count) = food_count {
        println!("   Food entries: {}", count);
    }

    Ok(())
}

pub fn cmd_moods(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::json!(MOOD_OPTIONS));
        return Ok(());
    }

    println!();
    println!("🙂 Tracker moods");
    for mood in MOOD_OPTIONS {
        println!("   {}", mood);
    }
    Ok(())
}

pub fn cmd_categories(json: bool) -> Result<()> {
    if json {
        let labels: Vec<&str> = FoodCategory::ALL.iter().map(|c| c.as_str()).collect();
        println!("{}", serde_json::json!(labels));
        return Ok(());
    }

    println!();
    println!("🍽️  Food diary categories");
    for category in FoodCategory::ALL {
        println!("   {}", category);
    }
    Ok(())
}
