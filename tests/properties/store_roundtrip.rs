//! Property tests for save/load round-trips.

use proptest::prelude::*;

use enroll::{JsonRecordStore, Record, RecordStore};
use tempfile::tempdir;

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z]{0,12}").unwrap(),
        proptest::string::string_regex("[A-Za-zßﬁﬂŉİǆ]{0,12}").unwrap(),
        proptest::string::string_regex("\\p{L}{0,12}").unwrap(),
    ]
}

fn record() -> impl Strategy<Value = Record> {
    (
        name(),
        name(),
        "(?s).{0,40}",
    )
        .prop_map(|(first, last, course)| Record::new(first, last, course).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: save then load returns the same records in the same order.
    #[test]
    fn property_save_load_round_trip(
        records in proptest::collection::vec(record(), 1..=8),
        atomic in any::<bool>(),
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        let store = JsonRecordStore::new().with_atomic_writes(atomic);

        store.save(&path, &records).unwrap();
        let outcome = store.load(&path);

        prop_assert!(!outcome.recovered());
        prop_assert_eq!(outcome.records, records);
    }

    /// PROPERTY: `load` never panics on arbitrary file content.
    #[test]
    fn property_load_never_panics(content in proptest::collection::vec(any::<u8>(), 0..256)) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        std::fs::write(&path, &content).unwrap();

        let _ = JsonRecordStore::new().with_backup_on_recover(false).load(&path);
    }
}
