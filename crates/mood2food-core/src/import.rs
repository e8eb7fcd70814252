//! Diary log ingestion
//!
//! Parses the two interchange shapes a host application hands over: JSON
//! arrays of entry objects (the shape the diary UI stores) and CSV
//! exports with named header columns. Every record passes the
//! entry-creation boundary checks before it reaches the engine; the first
//! bad row fails the whole load with its row number.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::DateTime;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{FoodCategory, FoodEntry, MoodEntry};

/// Supported diary log encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Csv,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect the log format from a file extension
///
/// Returns None if the extension is missing or not recognized.
pub fn detect_log_format(path: &Path) -> Option<LogFormat> {
    match path.extension()?.to_str()? {
        ext if ext.eq_ignore_ascii_case("json") => Some(LogFormat::Json),
        ext if ext.eq_ignore_ascii_case("csv") => Some(LogFormat::Csv),
        _ => None,
    }
}

/// Parse a mood log in the given format
pub fn read_mood_log<R: Read>(reader: R, format: LogFormat) -> Result<Vec<MoodEntry>> {
    let entries = match format {
        LogFormat::Json => parse_json_log::<_, MoodEntry>(reader)?,
        LogFormat::Csv => parse_mood_csv(reader)?,
    };
    for (i, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|e| Error::Import(format!("mood entry {}: {}", i + 1, e)))?;
    }
    debug!(count = entries.len(), format = %format, "Loaded mood log");
    Ok(entries)
}

/// Parse a food log in the given format
pub fn read_food_log<R: Read>(reader: R, format: LogFormat) -> Result<Vec<FoodEntry>> {
    let entries = match format {
        LogFormat::Json => parse_json_log::<_, FoodEntry>(reader)?,
        LogFormat::Csv => parse_food_csv(reader)?,
    };
    for (i, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|e| Error::Import(format!("food entry {}: {}", i + 1, e)))?;
    }
    debug!(count = entries.len(), format = %format, "Loaded food log");
    Ok(entries)
}

fn parse_json_log<R: Read, T: serde::de::DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Find a required column index by header name
fn col(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::Import(format!("Missing column: {}", name)))
}

/// Parse a timestamp cell as epoch milliseconds or RFC 3339
fn parse_timestamp(value: &str) -> std::result::Result<i64, String> {
    let value = value.trim();
    if let Ok(millis) = value.parse::<i64>() {
        return Ok(millis);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp_millis());
    }
    Err(format!(
        "invalid timestamp (expected epoch millis or RFC 3339): {}",
        value
    ))
}

/// Parse mood CSV
/// Format: mood,intensity,notes,timestamp
fn parse_mood_csv<R: Read>(reader: R) -> Result<Vec<MoodEntry>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mood_col = col(&headers, "mood")?;
    let intensity_col = col(&headers, "intensity")?;
    let notes_col = col(&headers, "notes")?;
    let timestamp_col = col(&headers, "timestamp")?;

    let mut entries = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1, data starts at line 2.
        let line = i + 2;
        let row_err = |msg: String| Error::Import(format!("row {}: {}", line, msg));

        let mood = record
            .get(mood_col)
            .ok_or_else(|| row_err("missing mood".into()))?
            .to_string();
        let intensity = record
            .get(intensity_col)
            .ok_or_else(|| row_err("missing intensity".into()))?
            .trim()
            .parse::<u8>()
            .map_err(|e| row_err(format!("invalid intensity: {}", e)))?;
        let notes = record.get(notes_col).unwrap_or_default().to_string();
        let timestamp = record
            .get(timestamp_col)
            .ok_or_else(|| row_err("missing timestamp".into()))
            .and_then(|s| parse_timestamp(s).map_err(&row_err))?;

        entries.push(MoodEntry {
            mood,
            intensity,
            notes,
            timestamp,
        });
    }

    Ok(entries)
}

/// Parse food CSV
/// Format: name,category,notes,timestamp
fn parse_food_csv<R: Read>(reader: R) -> Result<Vec<FoodEntry>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_col = col(&headers, "name")?;
    let category_col = col(&headers, "category")?;
    let notes_col = col(&headers, "notes")?;
    let timestamp_col = col(&headers, "timestamp")?;

    let mut entries = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let line = i + 2;
        let row_err = |msg: String| Error::Import(format!("row {}: {}", line, msg));

        let name = record
            .get(name_col)
            .ok_or_else(|| row_err("missing name".into()))?
            .to_string();
        let category = record
            .get(category_col)
            .ok_or_else(|| row_err("missing category".into()))?
            .parse::<FoodCategory>()
            .map_err(|e| row_err(e))?;
        let notes = record.get(notes_col).unwrap_or_default().to_string();
        let timestamp = record
            .get(timestamp_col)
            .ok_or_else(|| row_err("missing timestamp".into()))
            .and_then(|s| parse_timestamp(s).map_err(&row_err))?;

        entries.push(FoodEntry {
            name,
            category,
            notes,
            timestamp,
        });
    }

    Ok(entries)
}
