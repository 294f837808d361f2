//! Terminal styling for out-of-band status messages
//!
//! Everything here goes to stderr. Standard output carries only the
//! conversion transcript.

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static THERMOMETER: Emoji<'_, '_> = Emoji("🌡️  ", "");

/// Report how many scales were loaded and from where
pub fn print_load_summary(path: &Path, count: usize) {
    eprintln!(
        "{}{} {} scale(s) from {}",
        THERMOMETER,
        style("✓").green().bold(),
        style(count).yellow().bold(),
        style(truncate_path(path, 48)).dim()
    );
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_string("scales.csv", 20), "scales.csv");
    }

    #[test]
    fn test_truncate_keeps_tail() {
        let truncated = truncate_string("/very/long/path/to/scales.csv", 15);
        assert_eq!(truncated.chars().count(), 15);
        assert!(truncated.starts_with("..."));
        assert!(truncated.ends_with("scales.csv"));
    }
}
