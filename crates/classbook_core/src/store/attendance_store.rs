//! Attendance store and attendance statistics.
//!
//! # Responsibility
//! - Own attendance records and the single editing target.
//! - Derive attendance rate and excused/unexcused counts on demand.
//!
//! # Invariants
//! - Records at rest always have non-empty `student`, `date` and a status.
//! - `commit_edit` preserves the record id and collection size.

use crate::export::csv::{render_csv, CsvColumn};
use crate::model::attendance::{AttendanceDraft, AttendanceRecord, AttendanceStatus};
use crate::model::id::{IdGenerator, RecordId, UuidIdGenerator};
use crate::model::validation::RecordError;
use crate::store::record_set::RecordSet;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Derived attendance figures for the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    pub total: usize,
    pub present_count: usize,
    pub sick_count: usize,
    pub excused_count: usize,
    pub unexcused_count: usize,
    /// Present share of all records, whole percent rounded half-up.
    pub attendance_rate: u32,
}

impl AttendanceStats {
    /// Percent label such as `50%`; `0%` for an empty collection.
    pub fn rate_label(&self) -> String {
        format!("{}%", self.attendance_rate)
    }
}

/// CSV columns for attendance export. Ids are never exported.
pub const ATTENDANCE_CSV_COLUMNS: [CsvColumn<AttendanceRecord>; 4] = [
    CsvColumn::new("Nama Siswa", csv_student),
    CsvColumn::new("Tanggal", csv_date),
    CsvColumn::new("Status", csv_status),
    CsvColumn::new("Keterangan", csv_note),
];

fn csv_student(record: &AttendanceRecord) -> Option<String> {
    Some(record.student.clone())
}

fn csv_date(record: &AttendanceRecord) -> Option<String> {
    Some(record.date.clone())
}

fn csv_status(record: &AttendanceRecord) -> Option<String> {
    Some(record.status.label().to_string())
}

fn csv_note(record: &AttendanceRecord) -> Option<String> {
    Some(record.note.clone())
}

/// Sole owner and mutator of attendance records.
pub struct AttendanceStore<G: IdGenerator = UuidIdGenerator> {
    records: RecordSet<AttendanceRecord>,
    ids: G,
}

impl AttendanceStore<UuidIdGenerator> {
    /// Creates an empty store with random ids.
    pub fn new() -> Self {
        Self::with_id_generator(UuidIdGenerator)
    }
}

impl Default for AttendanceStore<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> AttendanceStore<G> {
    /// Creates an empty store drawing ids from `ids`.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            records: RecordSet::default(),
            ids,
        }
    }

    /// Read-only snapshot, most recent first.
    pub fn records(&self) -> &[AttendanceRecord] {
        self.records.items()
    }

    pub fn get(&self, id: RecordId) -> Option<&AttendanceRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.items().is_empty()
    }

    /// Current editing target, if any.
    pub fn editing_id(&self) -> Option<RecordId> {
        self.records.editing()
    }

    /// Validates `draft` and prepends it as a new record.
    ///
    /// # Errors
    /// - `MissingField` when student, date or status is empty.
    pub fn add(&mut self, draft: &AttendanceDraft) -> Result<&AttendanceRecord, RecordError> {
        let valid = draft.validate().map_err(|err| {
            warn!("event=attendance_add module=store status=rejected reason={err}");
            err
        })?;
        let record = AttendanceRecord::from_valid(self.ids.next_id(), valid);
        info!(
            "event=attendance_add module=store status=ok id={} total={}",
            record.id,
            self.len() + 1
        );
        Ok(self.records.prepend(record))
    }

    /// Marks `id` as the editing target. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        let found = self.records.begin_edit(id);
        debug!("event=attendance_edit_begin module=store id={id} found={found}");
        found
    }

    pub fn cancel_edit(&mut self) {
        self.records.cancel_edit();
    }

    /// Overwrites record `id` with `draft`, keeping its id.
    ///
    /// Returns `Ok(None)` when `id` is unknown; the editing target is then
    /// left as it was.
    ///
    /// # Errors
    /// - `MissingField` when a required field is empty. Nothing changes.
    pub fn commit_edit(
        &mut self,
        id: RecordId,
        draft: &AttendanceDraft,
    ) -> Result<Option<&AttendanceRecord>, RecordError> {
        let valid = draft.validate().map_err(|err| {
            warn!("event=attendance_commit module=store status=rejected id={id} reason={err}");
            err
        })?;
        let updated = self.records.update(id, |record| record.apply(valid));
        info!(
            "event=attendance_commit module=store status={} id={id}",
            if updated.is_some() { "ok" } else { "not_found" }
        );
        Ok(updated)
    }

    /// Removes record `id`. Confirmation is the caller's job.
    pub fn delete(&mut self, id: RecordId) -> Option<AttendanceRecord> {
        let removed = self.records.remove(id);
        info!(
            "event=attendance_delete module=store status={} id={id}",
            if removed.is_some() { "ok" } else { "not_found" }
        );
        removed
    }

    /// Removes record `id` only when `confirm` accepts it.
    pub fn delete_confirmed(
        &mut self,
        id: RecordId,
        confirm: impl FnOnce(&AttendanceRecord) -> bool,
    ) -> Option<AttendanceRecord> {
        let record = self.records.get(id)?;
        if !confirm(record) {
            debug!("event=attendance_delete module=store status=declined id={id}");
            return None;
        }
        self.delete(id)
    }

    pub fn stats(&self) -> AttendanceStats {
        let records = self.records.items();
        let mut stats = AttendanceStats {
            total: records.len(),
            present_count: 0,
            sick_count: 0,
            excused_count: 0,
            unexcused_count: 0,
            attendance_rate: 0,
        };
        for record in records {
            match record.status {
                AttendanceStatus::Present => stats.present_count += 1,
                AttendanceStatus::Sick => stats.sick_count += 1,
                AttendanceStatus::ExcusedAbsence => stats.excused_count += 1,
                AttendanceStatus::UnexcusedAbsence => stats.unexcused_count += 1,
            }
        }
        if stats.total > 0 {
            let share = stats.present_count as f64 / stats.total as f64;
            stats.attendance_rate = (share * 100.0).round() as u32;
        }
        stats
    }

    /// CSV text of every record in display order.
    pub fn export_csv(&self) -> String {
        render_csv(self.records.items(), &ATTENDANCE_CSV_COLUMNS)
    }
}
