//! Demo roster for a fresh session.

use crate::model::attendance::{AttendanceDraft, AttendanceStatus};
use crate::model::grade::GradeDraft;
use crate::model::id::IdGenerator;
use crate::model::validation::RecordError;
use crate::store::attendance_store::AttendanceStore;
use crate::store::grade_store::GradeStore;

/// Demo attendance entries in display order.
pub fn sample_attendance() -> Vec<AttendanceDraft> {
    vec![
        AttendanceDraft::new(
            "Andi Saputra",
            "2024-10-28",
            AttendanceStatus::Present,
            "Tepat waktu",
        ),
        AttendanceDraft::new(
            "Bella Sasmita",
            "2024-10-28",
            AttendanceStatus::ExcusedAbsence,
            "Mengikuti lomba sains",
        ),
        AttendanceDraft::new(
            "Chandra Wijaya",
            "2024-10-28",
            AttendanceStatus::UnexcusedAbsence,
            "Tanpa keterangan",
        ),
    ]
}

/// Demo grade entries in display order.
pub fn sample_grades() -> Vec<GradeDraft> {
    vec![
        GradeDraft::new("Andi Saputra", "Ulangan Harian Matematika", 88.0),
        GradeDraft::new("Bella Sasmita", "Proyek Literasi", 94.0),
        GradeDraft::new("Chandra Wijaya", "Presentasi IPS", 80.0),
    ]
}

/// Loads the demo roster so the stores list it in roster order.
///
/// Entries are added last-to-first because `add` prepends.
pub fn seed_sample_roster<A: IdGenerator, G: IdGenerator>(
    attendance: &mut AttendanceStore<A>,
    grades: &mut GradeStore<G>,
) -> Result<(), RecordError> {
    for draft in sample_attendance().iter().rev() {
        attendance.add(draft)?;
    }
    for draft in sample_grades().iter().rev() {
        grades.add(draft)?;
    }
    Ok(())
}
