//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for colors and score badges
//! used throughout the gradebook CLI.

use colored::{ColoredString, Colorize};

use crate::record::ScoreBand;

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("GRADEBOOK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a score colored by its display band.
///
/// Bands:
/// - Excellent (>= 80): green
/// - Good (>= 70): blue
/// - Passing (>= 60): yellow
/// - Failing: red
pub fn score_badge(score: f64) -> ColoredString {
    let text = format!("{:.2}", score);
    match ScoreBand::from_score(score) {
        ScoreBand::Excellent => text.green(),
        ScoreBand::Good => text.blue(),
        ScoreBand::Passing => text.yellow(),
        ScoreBand::Failing => text.red(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/confirmation
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (record ids, course codes)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_score_badge_all_bands() {
        score_badge(95.0);
        score_badge(75.0);
        score_badge(65.0);
        score_badge(30.0);
    }

    #[test]
    #[serial]
    fn test_is_quiet_env_values() {
        std::env::set_var("GRADEBOOK_QUIET", "1");
        assert!(is_quiet());

        std::env::set_var("GRADEBOOK_QUIET", "true");
        assert!(is_quiet());

        std::env::set_var("GRADEBOOK_QUIET", "0");
        assert!(!is_quiet());

        std::env::remove_var("GRADEBOOK_QUIET");
        assert!(!is_quiet());
    }
}
