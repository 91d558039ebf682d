//! Attendance record model.
//!
//! # Invariants
//! - `student` and `date` are non-empty and trimmed on every stored record.
//! - `status` is one of the four closed variants; there is no "unknown".

use crate::model::id::RecordId;
use crate::model::validation::{require_text, RecordError};
use serde::{Deserialize, Serialize};

/// Attendance outcome for one student on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Sick,
    /// Absent with permission.
    ExcusedAbsence,
    /// Absent without explanation.
    UnexcusedAbsence,
}

impl AttendanceStatus {
    /// Every status, in form/option order.
    pub const ALL: [AttendanceStatus; 4] = [
        Self::Present,
        Self::Sick,
        Self::ExcusedAbsence,
        Self::UnexcusedAbsence,
    ];

    /// Roster label shown in tables and written to CSV.
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Hadir",
            Self::Sick => "Sakit",
            Self::ExcusedAbsence => "Izin (Excused)",
            Self::UnexcusedAbsence => "Izin (Unexcused)",
        }
    }

    /// Parses a roster label. Unknown or blank input yields `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL.into_iter().find(|status| status.label() == trimmed)
    }

    /// Stable style key for status pills.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Present => "hadir",
            Self::Sick => "sakit",
            Self::ExcusedAbsence => "excused",
            Self::UnexcusedAbsence => "unexcused",
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }

    pub fn is_excused(self) -> bool {
        matches!(self, Self::ExcusedAbsence)
    }

    pub fn is_unexcused(self) -> bool {
        matches!(self, Self::UnexcusedAbsence)
    }
}

/// Committed attendance entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub student: String,
    /// ISO calendar date (`YYYY-MM-DD`), kept as entered.
    pub date: String,
    pub status: AttendanceStatus,
    /// Free text; empty when not provided.
    pub note: String,
}

/// Staged attendance input for `add` and `commit_edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub student: String,
    pub date: String,
    /// `None` when no status was chosen.
    pub status: Option<AttendanceStatus>,
    pub note: String,
}

/// Draft fields after trimming and required checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidAttendance {
    pub student: String,
    pub date: String,
    pub status: AttendanceStatus,
    pub note: String,
}

impl AttendanceDraft {
    pub fn new(
        student: impl Into<String>,
        date: impl Into<String>,
        status: AttendanceStatus,
        note: impl Into<String>,
    ) -> Self {
        Self {
            student: student.into(),
            date: date.into(),
            status: Some(status),
            note: note.into(),
        }
    }

    /// Builds a draft from raw form text, resolving the status label.
    pub fn from_input(student: &str, date: &str, status_label: &str, note: &str) -> Self {
        Self {
            student: student.to_string(),
            date: date.to_string(),
            status: AttendanceStatus::from_label(status_label),
            note: note.to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<ValidAttendance, RecordError> {
        let student = require_text("student", &self.student)?;
        let date = require_text("date", &self.date)?;
        let status = self.status.ok_or(RecordError::MissingField("status"))?;
        Ok(ValidAttendance {
            student,
            date,
            status,
            note: self.note.trim().to_string(),
        })
    }
}

impl From<&AttendanceRecord> for AttendanceDraft {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            student: record.student.clone(),
            date: record.date.clone(),
            status: Some(record.status),
            note: record.note.clone(),
        }
    }
}

impl AttendanceRecord {
    pub(crate) fn from_valid(id: RecordId, valid: ValidAttendance) -> Self {
        Self {
            id,
            student: valid.student,
            date: valid.date,
            status: valid.status,
            note: valid.note,
        }
    }

    pub(crate) fn apply(&mut self, valid: ValidAttendance) {
        self.student = valid.student;
        self.date = valid.date;
        self.status = valid.status;
        self.note = valid.note;
    }
}

#[cfg(test)]
mod tests {
    use super::{AttendanceDraft, AttendanceStatus};
    use crate::model::validation::RecordError;

    #[test]
    fn labels_round_trip_through_from_label() {
        for status in AttendanceStatus::ALL {
            assert_eq!(AttendanceStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(AttendanceStatus::from_label(" Sakit "), Some(AttendanceStatus::Sick));
        assert_eq!(AttendanceStatus::from_label(""), None);
        assert_eq!(AttendanceStatus::from_label("Excused"), None);
    }

    #[test]
    fn excused_family_is_exclusive() {
        assert!(AttendanceStatus::ExcusedAbsence.is_excused());
        assert!(!AttendanceStatus::ExcusedAbsence.is_unexcused());
        assert!(AttendanceStatus::UnexcusedAbsence.is_unexcused());
        assert!(!AttendanceStatus::UnexcusedAbsence.is_excused());
        assert!(!AttendanceStatus::Sick.is_excused());
        assert!(!AttendanceStatus::Present.is_unexcused());
    }

    #[test]
    fn validate_trims_fields_and_keeps_empty_note() {
        let draft = AttendanceDraft::new("  Andi  ", "2024-10-28", AttendanceStatus::Present, "   ");
        let valid = draft.validate().unwrap();
        assert_eq!(valid.student, "Andi");
        assert_eq!(valid.note, "");
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let draft = AttendanceDraft::from_input("Andi", "2024-10-28", "", "");
        assert_eq!(
            draft.validate().unwrap_err(),
            RecordError::MissingField("status")
        );

        let draft = AttendanceDraft::from_input("Andi", "", "Hadir", "");
        assert_eq!(draft.validate().unwrap_err(), RecordError::MissingField("date"));
    }
}
