//! A first run against an empty directory, then a second run that reloads.

use enroll::{Config, HasName, JsonRecordStore, RecordStore, Session, StoreError};
use tempfile::tempdir;

#[test]
fn register_save_and_reload_one_student() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Enrollments.json");

    let (mut session, notice) = Session::open(JsonRecordStore::new(), &path);
    assert!(matches!(notice, Some(StoreError::NotFound { .. })));
    assert!(session.records().is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");

    let record = session.register("mary", "smith", "Biology 101").unwrap();
    assert_eq!(record.display_name(), "Mary Smith");
    assert_eq!(record.describe(), "Mary Smith, is enrolled in Biology 101");

    session.save().unwrap();

    let (reloaded, notice) = Session::open(JsonRecordStore::new(), &path);
    assert!(notice.is_none());
    assert_eq!(reloaded.records().len(), 1);
    let record = &reloaded.records()[0];
    assert_eq!(record.first_name(), "Mary");
    assert_eq!(record.last_name(), "Smith");
    assert_eq!(record.course_name(), "Biology 101");
}

#[test]
fn invalid_registration_leaves_session_unchanged() {
    let dir = tempdir().unwrap();
    let config = Config::default().with_file(dir.path().join("Enrollments.json"));
    let (mut session, _) = enroll::presentation::open_session(&config);

    session.register("ann", "lee", "Art").unwrap();
    let err = session.register("ann", "lee2", "Art").unwrap_err();

    assert_eq!(err.field, enroll::NameField::Last);
    assert_eq!(session.records().len(), 1);
}

#[test]
fn order_survives_multiple_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Enrollments.json");

    let (mut session, _) = Session::open(JsonRecordStore::new(), &path);
    session.register("cy", "ng", "Chemistry").unwrap();
    session.register("ann", "lee", "Art").unwrap();
    session.save().unwrap();

    let (mut session, _) = Session::open(JsonRecordStore::new(), &path);
    session.register("bob", "kim", "Math").unwrap();
    session.save().unwrap();

    let names: Vec<String> = JsonRecordStore::new()
        .load(&path)
        .records
        .iter()
        .map(|r| r.first_name())
        .collect();
    assert_eq!(names, vec!["Cy", "Ann", "Bob"]);
}
