//! Damaged or unwritable enrollment files never abort a session.

use std::fs;

use enroll::{JsonRecordStore, RecordStore, Session, StoreError};
use tempfile::tempdir;

#[test]
fn unparsable_file_starts_empty_and_next_save_replaces_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Enrollments.json");
    fs::write(&path, "not json at all").unwrap();

    let (mut session, notice) = Session::open(JsonRecordStore::new(), &path);
    assert!(matches!(notice, Some(StoreError::Parse { .. })));
    assert!(session.records().is_empty());

    session.register("ann", "lee", "Art").unwrap();
    session.save().unwrap();

    assert_eq!(JsonRecordStore::new().load(&path).records.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("Enrollments.json.bak")).unwrap(),
        "not json at all"
    );
}

#[test]
fn lossy_recovery_without_backup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Enrollments.json");
    fs::write(&path, "{\"FirstName\": \"Ann\"}").unwrap();

    let store = JsonRecordStore::new().with_backup_on_recover(false);
    let outcome = store.load(&path);

    assert!(outcome.recovered());
    assert!(outcome.records.is_empty());
    assert!(!dir.path().join("Enrollments.json.bak").exists());
}

#[test]
fn failed_save_keeps_records_in_memory() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();
    let path = blocker.join("Enrollments.json");

    let (mut session, notice) = Session::open(JsonRecordStore::new(), &path);
    assert!(matches!(notice, Some(StoreError::Io { .. })));

    session.register("ann", "lee", "Art").unwrap();
    let err = session.save().unwrap_err();

    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(session.records().len(), 1);
}
