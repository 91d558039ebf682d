//! Grade store and grade statistics.
//!
//! # Responsibility
//! - Own grade records and the single editing target.
//! - Derive class average, distinct task count and top students on demand.
//!
//! # Invariants
//! - Every stored score is within `[0, 100]`.
//! - All tasks weigh the same; averages are plain means.
//! - Per-student averages follow first appearance in display order.

use crate::config::GradeStatsConfig;
use crate::export::csv::{render_csv, CsvColumn};
use crate::model::grade::{format_score, GradeDraft, GradeRecord};
use crate::model::id::{IdGenerator, RecordId, UuidIdGenerator};
use crate::model::validation::RecordError;
use crate::store::record_set::RecordSet;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Weight label exported for every grade row.
pub const EQUAL_WEIGHT_LABEL: &str = "Setara";

/// Mean score of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAverage {
    pub student: String,
    pub average: f64,
    pub entry_count: usize,
}

impl StudentAverage {
    /// One-decimal label, e.g. `91.0`.
    pub fn label(&self) -> String {
        one_decimal(self.average)
    }
}

/// Derived grade figures for the current collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeStats {
    pub entry_count: usize,
    /// Mean of all scores; `None` when there are none.
    pub class_average: Option<f64>,
    pub distinct_task_count: usize,
    /// Students tied for the highest average, in first-appearance order.
    pub top_students: Vec<String>,
    pub per_student_averages: Vec<StudentAverage>,
}

impl GradeStats {
    /// `0` when empty, otherwise one decimal rounded half-up.
    pub fn class_average_label(&self) -> String {
        match self.class_average {
            Some(average) => one_decimal(average),
            None => "0".to_string(),
        }
    }

    /// Comma-joined top students, or `-` when there are none.
    pub fn top_students_label(&self) -> String {
        if self.top_students.is_empty() {
            "-".to_string()
        } else {
            self.top_students.join(", ")
        }
    }
}

/// Rounds half-up at one decimal before formatting, so 87.25 gives `87.3`.
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// CSV columns for grade export. Ids are never exported.
pub const GRADE_CSV_COLUMNS: [CsvColumn<GradeRecord>; 4] = [
    CsvColumn::new("Nama Siswa", csv_student),
    CsvColumn::new("Tugas", csv_task),
    CsvColumn::new("Nilai", csv_score),
    CsvColumn::new("Bobot", csv_weight),
];

fn csv_student(record: &GradeRecord) -> Option<String> {
    Some(record.student.clone())
}

fn csv_task(record: &GradeRecord) -> Option<String> {
    Some(record.task.clone())
}

fn csv_score(record: &GradeRecord) -> Option<String> {
    Some(format_score(record.score))
}

fn csv_weight(_: &GradeRecord) -> Option<String> {
    Some(EQUAL_WEIGHT_LABEL.to_string())
}

/// Sole owner and mutator of grade records.
pub struct GradeStore<G: IdGenerator = UuidIdGenerator> {
    records: RecordSet<GradeRecord>,
    ids: G,
    config: GradeStatsConfig,
}

impl GradeStore<UuidIdGenerator> {
    /// Creates an empty store with random ids and default settings.
    pub fn new() -> Self {
        Self::with_id_generator(UuidIdGenerator)
    }
}

impl Default for GradeStore<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> GradeStore<G> {
    pub fn with_id_generator(ids: G) -> Self {
        Self::with_config(ids, GradeStatsConfig::default())
    }

    pub fn with_config(ids: G, config: GradeStatsConfig) -> Self {
        Self {
            records: RecordSet::default(),
            ids,
            config,
        }
    }

    pub fn config(&self) -> GradeStatsConfig {
        self.config
    }

    /// Read-only snapshot, most recent first.
    pub fn records(&self) -> &[GradeRecord] {
        self.records.items()
    }

    pub fn get(&self, id: RecordId) -> Option<&GradeRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.items().is_empty()
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        self.records.editing()
    }

    /// Validates `draft` and prepends it as a new record.
    ///
    /// # Errors
    /// - `MissingField` / `ScoreNotNumeric` (validation kind).
    /// - `ScoreOutOfRange` (range kind).
    pub fn add(&mut self, draft: &GradeDraft) -> Result<&GradeRecord, RecordError> {
        let valid = draft.validate().map_err(|err| {
            warn!(
                "event=grade_add module=store status=rejected kind={:?} reason={err}",
                err.kind()
            );
            err
        })?;
        let record = GradeRecord::from_valid(self.ids.next_id(), valid);
        info!(
            "event=grade_add module=store status=ok id={} total={}",
            record.id,
            self.len() + 1
        );
        Ok(self.records.prepend(record))
    }

    /// Marks `id` as the editing target. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        let found = self.records.begin_edit(id);
        debug!("event=grade_edit_begin module=store id={id} found={found}");
        found
    }

    pub fn cancel_edit(&mut self) {
        self.records.cancel_edit();
    }

    /// Overwrites record `id` with `draft`, keeping its id.
    ///
    /// Same validation as [`GradeStore::add`]. Returns `Ok(None)` when `id`
    /// is unknown.
    pub fn commit_edit(
        &mut self,
        id: RecordId,
        draft: &GradeDraft,
    ) -> Result<Option<&GradeRecord>, RecordError> {
        let valid = draft.validate().map_err(|err| {
            warn!(
                "event=grade_commit module=store status=rejected id={id} kind={:?} reason={err}",
                err.kind()
            );
            err
        })?;
        let updated = self.records.update(id, |record| record.apply(valid));
        info!(
            "event=grade_commit module=store status={} id={id}",
            if updated.is_some() { "ok" } else { "not_found" }
        );
        Ok(updated)
    }

    /// Removes record `id`. Confirmation is the caller's job.
    pub fn delete(&mut self, id: RecordId) -> Option<GradeRecord> {
        let removed = self.records.remove(id);
        info!(
            "event=grade_delete module=store status={} id={id}",
            if removed.is_some() { "ok" } else { "not_found" }
        );
        removed
    }

    /// Removes record `id` only when `confirm` accepts it.
    pub fn delete_confirmed(
        &mut self,
        id: RecordId,
        confirm: impl FnOnce(&GradeRecord) -> bool,
    ) -> Option<GradeRecord> {
        let record = self.records.get(id)?;
        if !confirm(record) {
            debug!("event=grade_delete module=store status=declined id={id}");
            return None;
        }
        self.delete(id)
    }

    pub fn stats(&self) -> GradeStats {
        let records = self.records.items();

        let class_average = if records.is_empty() {
            None
        } else {
            let total: f64 = records.iter().map(|record| record.score).sum();
            Some(total / records.len() as f64)
        };

        let distinct_task_count = records
            .iter()
            .map(|record| record.task.as_str())
            .collect::<HashSet<_>>()
            .len();

        let per_student_averages = per_student_averages(records);
        let top_students = top_students(&per_student_averages, self.config.top_average_tolerance);

        GradeStats {
            entry_count: records.len(),
            class_average,
            distinct_task_count,
            top_students,
            per_student_averages,
        }
    }

    /// CSV text of every record in display order.
    pub fn export_csv(&self) -> String {
        render_csv(self.records.items(), &GRADE_CSV_COLUMNS)
    }
}

fn per_student_averages(records: &[GradeRecord]) -> Vec<StudentAverage> {
    // (student, score sum, count) in first-appearance order.
    let mut totals: Vec<(&str, f64, usize)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|entry| entry.0 == record.student) {
            Some(entry) => {
                entry.1 += record.score;
                entry.2 += 1;
            }
            None => totals.push((record.student.as_str(), record.score, 1)),
        }
    }
    totals
        .into_iter()
        .map(|(student, sum, count)| StudentAverage {
            student: student.to_string(),
            average: sum / count as f64,
            entry_count: count,
        })
        .collect()
}

fn top_students(averages: &[StudentAverage], tolerance: f64) -> Vec<String> {
    let Some(max) = averages
        .iter()
        .map(|item| item.average)
        .reduce(f64::max)
    else {
        return Vec::new();
    };
    averages
        .iter()
        .filter(|item| item.average == max || (item.average - max).abs() < tolerance)
        .map(|item| item.student.clone())
        .collect()
}
