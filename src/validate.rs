//! Input validation for candidate grade records.
//!
//! Validation is synchronous, side-effect-free, and never panics for any
//! input. All rule violations are collected in field order rather than
//! stopping at the first failure, so the user sees every problem at once.
//!
//! Normalization policy: every field is trimmed exactly once up front and
//! all checks run on the trimmed value. The original form logic trimmed only
//! for emptiness checks on the student id; that inconsistency is not
//! preserved here.

use crate::record::GradeRecord;

/// Minimum length of a student id after trimming.
pub const MIN_STUDENT_ID_LEN: usize = 5;
/// Minimum length of a student name after trimming.
pub const MIN_STUDENT_NAME_LEN: usize = 3;

/// A candidate grade record as raw form-field strings, before validation.
///
/// `score` arrives unparsed so that "not a number" is a validation error
/// rather than a failure in the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct GradeCandidate {
    pub student_id: String,
    pub student_name: String,
    pub course_code: String,
    pub score: String,
}

impl GradeCandidate {
    /// Build a candidate from raw field values.
    pub fn new(student_id: &str, student_name: &str, course_code: &str, score: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            student_name: student_name.to_string(),
            course_code: course_code.to_string(),
            score: score.to_string(),
        }
    }
}

/// Result of validating a candidate grade record.
#[derive(Debug)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub is_valid: bool,
    /// List of validation errors (empty if valid)
    pub errors: Vec<String>,
}

/// Validate a candidate record against the fixed rules.
///
/// Rules, evaluated independently per field:
/// - student id: non-empty, at least 5 characters, digits only
/// - student name: non-empty, at least 3 characters
/// - course code: non-empty (catalog membership is deliberately not checked;
///   see [`COURSE_CATALOG`])
/// - score: non-empty, parses as a number, within `[0, 100]` inclusive
pub fn validate(candidate: &GradeCandidate) -> ValidationResult {
    let mut errors = Vec::new();

    let student_id = candidate.student_id.trim();
    if student_id.is_empty() {
        errors.push("Student ID must not be empty".to_string());
    } else if student_id.len() < MIN_STUDENT_ID_LEN {
        errors.push(format!(
            "Student ID must be at least {} characters",
            MIN_STUDENT_ID_LEN
        ));
    } else if !student_id.chars().all(|c| c.is_ascii_digit()) {
        errors.push("Student ID must contain only digits".to_string());
    }

    let student_name = candidate.student_name.trim();
    if student_name.is_empty() {
        errors.push("Student name must not be empty".to_string());
    } else if student_name.chars().count() < MIN_STUDENT_NAME_LEN {
        errors.push(format!(
            "Student name must be at least {} characters",
            MIN_STUDENT_NAME_LEN
        ));
    }

    if candidate.course_code.trim().is_empty() {
        errors.push("A course must be selected".to_string());
    }

    let score = candidate.score.trim();
    if score.is_empty() {
        errors.push("Score must not be empty".to_string());
    } else {
        match score.parse::<f64>() {
            Err(_) => errors.push("Score must be a number".to_string()),
            Ok(n) if !(0.0..=100.0).contains(&n) => {
                errors.push("Score must be between 0 and 100".to_string());
            }
            Ok(_) => {}
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Build a [`GradeRecord`] from a candidate that has already passed
/// validation, with the given store-assigned id and timestamp.
///
/// Fields are stored in their trimmed form, matching the validation
/// normalization.
pub fn into_record(candidate: &GradeCandidate, id: String, recorded_at: String) -> GradeRecord {
    GradeRecord {
        id,
        student_id: candidate.student_id.trim().to_string(),
        student_name: candidate.student_name.trim().to_string(),
        course_code: candidate.course_code.trim().to_string(),
        // Callers validate first; the fallback keeps this panic-free.
        score: candidate.score.trim().parse::<f64>().unwrap_or(0.0),
        recorded_at,
    }
}
