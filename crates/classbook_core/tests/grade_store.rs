use classbook_core::{
    seed_sample_roster, AttendanceStore, GradeDraft, GradeStatsConfig, GradeStore, RecordError,
    RecordErrorKind, SequentialIdGenerator,
};
use uuid::Uuid;

fn store() -> GradeStore<SequentialIdGenerator> {
    GradeStore::with_id_generator(SequentialIdGenerator::new())
}

fn sample_store() -> GradeStore<SequentialIdGenerator> {
    let mut attendance = AttendanceStore::with_id_generator(SequentialIdGenerator::new());
    let mut grades = store();
    seed_sample_roster(&mut attendance, &mut grades).unwrap();
    grades
}

#[test]
fn sample_roster_stats_match_expected_summary() {
    let stats = sample_store().stats();

    assert_eq!(stats.class_average_label(), "87.3");
    assert_eq!(stats.distinct_task_count, 3);
    assert_eq!(stats.top_students, vec!["Bella Sasmita"]);
    assert_eq!(stats.top_students_label(), "Bella Sasmita");
}

#[test]
fn sample_roster_keeps_roster_display_order() {
    let grades = sample_store();
    let students: Vec<_> = grades.records().iter().map(|r| r.student.as_str()).collect();
    assert_eq!(students, vec!["Andi Saputra", "Bella Sasmita", "Chandra Wijaya"]);
}

#[test]
fn empty_store_reports_plain_zero_average() {
    let stats = store().stats();
    assert_eq!(stats.class_average, None);
    assert_eq!(stats.class_average_label(), "0");
    assert_eq!(stats.distinct_task_count, 0);
    assert!(stats.top_students.is_empty());
    assert_eq!(stats.top_students_label(), "-");
    assert!(stats.per_student_averages.is_empty());
}

#[test]
fn add_out_of_range_score_is_range_error() {
    let mut store = sample_store();
    let before = store.len();

    let err = store.add(&GradeDraft::new("Andi", "Kuis", 150.0)).unwrap_err();
    assert_eq!(err, RecordError::ScoreOutOfRange(150.0));
    assert_eq!(err.kind(), RecordErrorKind::Range);
    assert_eq!(store.len(), before);

    let err = store.add(&GradeDraft::new("Andi", "Kuis", -0.5)).unwrap_err();
    assert_eq!(err.kind(), RecordErrorKind::Range);
    assert_eq!(store.len(), before);
}

#[test]
fn add_accepts_range_bounds() {
    let mut store = store();
    store.add(&GradeDraft::new("Andi", "Kuis 1", 0.0)).unwrap();
    store.add(&GradeDraft::new("Andi", "Kuis 2", 100.0)).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn add_rejects_missing_fields_and_nan() {
    let mut store = store();
    assert_eq!(
        store.add(&GradeDraft::new(" ", "Kuis", 80.0)).unwrap_err(),
        RecordError::MissingField("student")
    );
    assert_eq!(
        store.add(&GradeDraft::new("Andi", "", 80.0)).unwrap_err(),
        RecordError::MissingField("task")
    );
    let err = store.add(&GradeDraft::new("Andi", "Kuis", f64::NAN)).unwrap_err();
    assert_eq!(err.kind(), RecordErrorKind::Validation);
    assert!(store.is_empty());
}

#[test]
fn commit_edit_validates_like_add_and_preserves_id() {
    let mut store = sample_store();
    let id = store.records()[1].id;
    let before = store.records().to_vec();

    store.begin_edit(id);
    let err = store
        .commit_edit(id, &GradeDraft::new("Bella Sasmita", "Proyek Literasi", 101.0))
        .unwrap_err();
    assert_eq!(err.kind(), RecordErrorKind::Range);
    assert_eq!(store.records(), before.as_slice());
    assert_eq!(store.editing_id(), Some(id));

    let updated = store
        .commit_edit(id, &GradeDraft::new("Bella Sasmita", "Proyek Literasi", 70.0))
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.score, 70.0);
    assert_eq!(store.len(), before.len());
    assert_eq!(store.editing_id(), None);
    assert_eq!(store.stats().top_students, vec!["Andi Saputra"]);
}

#[test]
fn commit_edit_unknown_id_returns_none() {
    let mut store = sample_store();
    let result = store
        .commit_edit(Uuid::from_u128(500), &GradeDraft::new("X", "Y", 50.0))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn tied_averages_are_all_top_students() {
    let mut store = store();
    store.add(&GradeDraft::new("Andi", "Kuis 1", 85.0)).unwrap();
    store.add(&GradeDraft::new("Andi", "Kuis 2", 95.0)).unwrap();
    store.add(&GradeDraft::new("Bella", "Kuis 1", 90.0)).unwrap();
    store.add(&GradeDraft::new("Chandra", "Kuis 1", 70.0)).unwrap();

    let stats = store.stats();
    // Display order is newest first: Chandra, Bella, Andi.
    assert_eq!(stats.top_students, vec!["Bella", "Andi"]);
    assert_eq!(stats.distinct_task_count, 2);
}

#[test]
fn per_student_averages_follow_first_appearance() {
    let mut store = store();
    store.add(&GradeDraft::new("Andi", "Kuis 1", 80.0)).unwrap();
    store.add(&GradeDraft::new("Bella", "Kuis 1", 70.0)).unwrap();
    store.add(&GradeDraft::new("Andi", "Kuis 2", 91.0)).unwrap();

    let averages = store.stats().per_student_averages;
    assert_eq!(averages.len(), 2);
    assert_eq!(averages[0].student, "Andi");
    assert_eq!(averages[0].entry_count, 2);
    assert_eq!(averages[0].label(), "85.5");
    assert_eq!(averages[1].student, "Bella");
    assert_eq!(averages[1].label(), "70.0");
}

#[test]
fn class_average_rounds_half_up() {
    let mut store = store();
    for (task, score) in [("a", 87.0), ("b", 87.0), ("c", 87.0), ("d", 88.0)] {
        store.add(&GradeDraft::new("Andi", task, score)).unwrap();
    }
    // 349 / 4 = 87.25
    assert_eq!(store.stats().class_average_label(), "87.3");
}

#[test]
fn tolerance_is_configurable() {
    let mut store = GradeStore::with_config(
        SequentialIdGenerator::new(),
        GradeStatsConfig::with_tolerance(1.0),
    );
    store.add(&GradeDraft::new("Andi", "Kuis", 90.0)).unwrap();
    store.add(&GradeDraft::new("Bella", "Kuis", 89.5)).unwrap();

    let mut top = store.stats().top_students;
    top.sort();
    assert_eq!(top, vec!["Andi", "Bella"]);
}

#[test]
fn delete_updates_stats() {
    let mut store = sample_store();
    let bella = store.records()[1].id;
    store.delete(bella).unwrap();

    let stats = store.stats();
    assert_eq!(stats.top_students, vec!["Andi Saputra"]);
    assert_eq!(stats.class_average_label(), "84.0");
    assert!(store.delete(bella).is_none());
    assert_eq!(store.len(), 2);
}

#[test]
fn grade_draft_from_input_parses_score_text() {
    let mut store = store();
    store
        .add(&GradeDraft::from_input("Andi", "Kuis", " 77.5 ").unwrap())
        .unwrap();
    assert_eq!(store.records()[0].score, 77.5);

    assert_eq!(
        GradeDraft::from_input("Andi", "Kuis", "tujuh").unwrap_err(),
        RecordError::ScoreNotNumeric
    );
}
