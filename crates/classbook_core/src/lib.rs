//! Core domain logic for the classroom record keeper.
//! This crate is the single source of truth for attendance and grade invariants.

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod sample;
pub mod store;

pub use config::{ExportConfig, GradeStatsConfig, DEFAULT_TOP_AVERAGE_TOLERANCE};
pub use export::csv::{quote_field, render_csv, CsvColumn};
pub use export::file::{write_csv_file, ExportError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attendance::{AttendanceDraft, AttendanceRecord, AttendanceStatus};
pub use model::grade::{format_score, parse_score, GradeDraft, GradeRecord};
pub use model::id::{IdGenerator, RecordId, SequentialIdGenerator, UuidIdGenerator};
pub use model::validation::{RecordError, RecordErrorKind, SCORE_MAX, SCORE_MIN};
pub use sample::seed_sample_roster;
pub use store::attendance_store::{AttendanceStats, AttendanceStore, ATTENDANCE_CSV_COLUMNS};
pub use store::grade_store::{
    GradeStats, GradeStore, StudentAverage, EQUAL_WEIGHT_LABEL, GRADE_CSV_COLUMNS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
