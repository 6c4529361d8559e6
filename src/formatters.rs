//! Output formatters for record listings
//!
//! Provides pure formatters that transform grade records into terminal
//! text or JSON, so the command handlers only sequence calls.

use colored::Colorize;

use crate::record::{course_display_name, GradeRecord};
use crate::ui;

/// Format records as a numbered table, one row per record.
///
/// Callers pass records already ordered newest-first; this function does
/// not re-sort.
pub fn format_records_table(records: &[GradeRecord]) -> String {
    let mut output = vec![
        "Grade Records".bold().to_string(),
        "=============".to_string(),
        String::new(),
    ];

    if records.is_empty() {
        output.push("  (no records yet)".dimmed().to_string());
        return output.join("\n");
    }

    output.push(format!(
        "{:<4} {:<24} {:<12} {:<36} {:>8}",
        "#", "Name", "Student ID", "Course", "Score"
    ));
    output.push("─".repeat(88));

    for (i, record) in records.iter().enumerate() {
        output.push(format_record_row(i + 1, record));
    }

    output.push(String::new());
    output.push(
        format!("{} record(s)", records.len())
            .dimmed()
            .to_string(),
    );

    output.join("\n")
}

/// Format a single numbered table row.
fn format_record_row(number: usize, record: &GradeRecord) -> String {
    format!(
        "{:<4} {:<24} {:<12} {:<36} {:>8}",
        number,
        record.student_name,
        record.student_id,
        course_display_name(&record.course_code),
        ui::score_badge(record.score)
    )
}

/// Format records as a JSON array in the stored document shape.
pub fn format_records_json(records: &[GradeRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Format validation errors as a red bulleted list under a heading.
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = vec!["Validation failed:".red().bold().to_string()];
    for error in errors {
        output.push(format!("  • {}", error.red()));
    }
    output.join("\n")
}

/// Format the confirmation line printed after a successful save.
pub fn format_save_confirmation(id: &str) -> String {
    format!(
        "{} Record saved with id {}",
        "✓".green(),
        id.cyan()
    )
}
