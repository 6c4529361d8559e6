//! The grade record entity and the fixed course catalog.

use serde::{Deserialize, Serialize};

/// One student's score entry for one course.
///
/// Records are immutable once saved: the store assigns `id` and
/// `recorded_at` exactly once at save time and no update or delete
/// operation exists anywhere in the crate.
///
/// Serialized field names match the persisted document shape used by every
/// backend: `id`, `nim`, `nama`, `kode_mk`, `nilai`, `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Store-assigned opaque identifier, unique and never reused.
    pub id: String,
    /// Student identification number, digits only.
    #[serde(rename = "nim")]
    pub student_id: String,
    /// Full student name.
    #[serde(rename = "nama")]
    pub student_name: String,
    /// Course code, e.g. `MK001`.
    #[serde(rename = "kode_mk")]
    pub course_code: String,
    /// Score in `[0, 100]`.
    #[serde(rename = "nilai")]
    pub score: f64,
    /// UTC save time in ISO 8601, the sole sort key for listing.
    #[serde(rename = "timestamp")]
    pub recorded_at: String,
}

/// Fixed catalog of known courses: `(code, display name)`.
///
/// This table exists purely for display formatting. Validation never
/// consults it; an unrecognized course code is accepted by the validator and
/// displayed verbatim.
pub const COURSE_CATALOG: &[(&str, &str)] = &[
    ("MK001", "MK001 - Kalkulus I"),
    ("MK002", "MK002 - Fisika Dasar"),
    ("MK003", "MK003 - Algoritma & Pemrograman"),
    ("MK004", "MK004 - Bahasa Indonesia"),
    ("MK005", "MK005 - Basis Data"),
    ("MK006", "MK006 - Rekayasa Perangkat Lunak"),
];

/// Look up the display name for a course code.
///
/// Unknown codes are returned verbatim.
pub fn course_display_name(code: &str) -> String {
    COURSE_CATALOG
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Display banding for scores, used only to color CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 70 to 79
    Good,
    /// 60 to 69
    Passing,
    /// Below 60
    Failing,
}

impl ScoreBand {
    /// Classify a score into its display band.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Passing
        } else {
            ScoreBand::Failing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_display_name_known() {
        assert_eq!(course_display_name("MK001"), "MK001 - Kalkulus I");
        assert_eq!(course_display_name("MK005"), "MK005 - Basis Data");
    }

    #[test]
    fn test_course_display_name_unknown_verbatim() {
        assert_eq!(course_display_name("MK999"), "MK999");
        assert_eq!(course_display_name(""), "");
    }

    #[test]
    fn test_catalog_has_six_entries() {
        assert_eq!(COURSE_CATALOG.len(), 6);
    }

    #[test]
    fn test_score_band_boundaries() {
        assert_eq!(ScoreBand::from_score(100.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(70.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Passing);
        assert_eq!(ScoreBand::from_score(59.9), ScoreBand::Failing);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Failing);
    }

    #[test]
    fn test_record_serializes_with_stored_field_names() {
        let record = GradeRecord {
            id: "abc123".to_string(),
            student_id: "12345".to_string(),
            student_name: "Ana Wijaya".to_string(),
            course_code: "MK001".to_string(),
            score: 85.0,
            recorded_at: "2026-08-27T10:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["nim"], "12345");
        assert_eq!(json["nama"], "Ana Wijaya");
        assert_eq!(json["kode_mk"], "MK001");
        assert_eq!(json["nilai"], 85.0);
        assert_eq!(json["timestamp"], "2026-08-27T10:00:00Z");
    }

    #[test]
    fn test_record_round_trips_through_stored_shape() {
        let json = r#"{
            "id": "x1",
            "nim": "99999",
            "nama": "Budi",
            "kode_mk": "MK003",
            "nilai": 72.5,
            "timestamp": "2026-08-27T11:00:00Z"
        }"#;

        let record: GradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.student_id, "99999");
        assert_eq!(record.course_code, "MK003");
        assert_eq!(record.score, 72.5);
    }
}
