//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `insights` - Insight derivation commands (insights, frequent, recent,
//!   recommend)
//! - `logs` - Log file loading, validation, and reference listings (validate,
//!   moods, categories)

pub mod insights;
pub mod logs;

// Re-export command functions for main.rs
pub use insights::*;
pub use logs::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
