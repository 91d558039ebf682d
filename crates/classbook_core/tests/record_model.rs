use classbook_core::{
    AttendanceDraft, AttendanceRecord, AttendanceStatus, AttendanceStore, GradeDraft, GradeStore,
    SequentialIdGenerator,
};

#[test]
fn attendance_record_serializes_with_snake_case_status() {
    let mut store = AttendanceStore::with_id_generator(SequentialIdGenerator::new());
    let record = store
        .add(&AttendanceDraft::new(
            "Chandra Wijaya",
            "2024-10-28",
            AttendanceStatus::UnexcusedAbsence,
            "Tanpa keterangan",
        ))
        .unwrap()
        .clone();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], SequentialIdGenerator::id_at(1).to_string());
    assert_eq!(json["status"], "unexcused_absence");
    assert_eq!(json["note"], "Tanpa keterangan");

    let decoded: AttendanceRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn stats_serialize_for_machine_output() {
    let mut grades = GradeStore::with_id_generator(SequentialIdGenerator::new());
    grades.add(&GradeDraft::new("Andi", "Kuis", 90.0)).unwrap();

    let json = serde_json::to_value(grades.stats()).unwrap();
    assert_eq!(json["class_average"], 90.0);
    assert_eq!(json["distinct_task_count"], 1);
    assert_eq!(json["top_students"][0], "Andi");
    assert_eq!(json["per_student_averages"][0]["entry_count"], 1);
}

#[test]
fn draft_from_record_round_trips_through_commit() {
    let mut store = AttendanceStore::with_id_generator(SequentialIdGenerator::new());
    let id = store
        .add(&AttendanceDraft::new("Andi", "2024-10-28", AttendanceStatus::Sick, "demam"))
        .unwrap()
        .id;
    let before = store.records().to_vec();

    let staged = AttendanceDraft::from(store.get(id).unwrap());
    store.begin_edit(id);
    store.commit_edit(id, &staged).unwrap();

    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn every_status_has_distinct_slug() {
    let mut slugs: Vec<_> = AttendanceStatus::ALL.iter().map(|s| s.slug()).collect();
    slugs.sort();
    slugs.dedup();
    assert_eq!(slugs.len(), 4);
}
