mod common;

use common::sample_values;
use servicelogger::core::service_logs::ServiceLogStore;
use servicelogger::core::validation::validate;

#[test]
fn create_stamps_identity_and_equal_timestamps() {
    let mut store = ServiceLogStore::default();
    let values = validate(&sample_values("2024-03-01", "2024-03-02")).unwrap();

    let id = store.create_service_log(values);
    let log = store.get(&id).expect("created log");

    assert!(!log.id.is_empty());
    assert_eq!(log.created_at, log.updated_at);
    assert_eq!(log.data.end_date, "2024-03-02");
    assert_eq!(log.data.provider_id, "P1");
}

#[test]
fn newest_record_sits_at_the_front() {
    let mut store = ServiceLogStore::default();
    let first = store.create_service_log(sample_values("2024-03-01", "2024-03-02"));
    let second = store.create_service_log(sample_values("2024-04-01", "2024-04-02"));

    assert_eq!(store.logs[0].id, second);
    assert_eq!(store.logs[1].id, first);
}

#[test]
fn update_overwrites_fields_and_bumps_updated_at() {
    let mut store = ServiceLogStore::default();
    let id = store.create_service_log(sample_values("2024-03-01", "2024-03-02"));
    let created_at = store.get(&id).unwrap().created_at.clone();

    let mut edited = sample_values("2024-03-01", "2024-03-02");
    edited.service_description = "brake pads".to_string();
    store.update_service_log(&id, edited);

    let log = store.get(&id).unwrap();
    assert_eq!(log.data.service_description, "brake pads");
    assert_eq!(log.created_at, created_at);
    assert!(log.updated_at >= created_at);
}

#[test]
fn update_of_an_unknown_id_is_silent() {
    let mut store = ServiceLogStore::default();
    let id = store.create_service_log(sample_values("2024-03-01", "2024-03-02"));
    let rev = store.revision();

    store.update_service_log("missing", sample_values("2024-05-01", "2024-05-02"));

    assert_eq!(store.revision(), rev);
    assert_eq!(store.get(&id).unwrap().data.start_date, "2024-03-01");
}

#[test]
fn delete_removes_only_the_matching_record() {
    let mut store = ServiceLogStore::default();
    let keep = store.create_service_log(sample_values("2024-03-01", "2024-03-02"));
    let gone = store.create_service_log(sample_values("2024-04-01", "2024-04-02"));

    store.delete_service_log(&gone);
    assert_eq!(store.len(), 1);
    assert!(store.get(&keep).is_some());

    // Absent ids are ignored, revision untouched.
    let rev = store.revision();
    store.delete_service_log(&gone);
    assert_eq!(store.revision(), rev);
}

#[test]
fn typed_accessors_read_the_stored_strings() {
    let mut store = ServiceLogStore::default();
    let id = store.create_service_log(sample_values("2024-03-01", "2024-03-02"));
    let log = store.get(&id).unwrap();

    assert!(log.service_type().unwrap().is_planned());
    assert_eq!(
        log.start_date().unwrap().succ_opt(),
        log.end_date()
    );
}
