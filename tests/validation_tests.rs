mod common;

use common::sample_values;
use servicelogger::core::validation::{validate, ValidationError};
use servicelogger::models::ServiceLogFormValues;

#[test]
fn valid_values_pass_and_stay_normalized() {
    let values = sample_values("2024-03-01", "2024-03-02");
    let validated = validate(&values).expect("valid values must pass");

    assert_eq!(validated.provider_id, "P1");
    assert_eq!(validated.end_date, "2024-03-02");
    assert_eq!(validated.service_type, "planned");
}

#[test]
fn normalization_trims_whitespace() {
    let mut values = sample_values("2024-03-01", "2024-03-02");
    values.provider_id = "  P1  ".to_string();
    values.service_type = " PLANNED ".to_string();

    let validated = validate(&values).expect("whitespace-padded values must pass");
    assert_eq!(validated.provider_id, "P1");
    assert_eq!(validated.service_type, "planned");
}

#[test]
fn empty_strings_are_required_fields() {
    let mut values = sample_values("2024-03-01", "2024-03-02");
    values.provider_id = String::new();
    values.service_order = "   ".to_string();
    values.service_description = String::new();

    let errors = validate(&values).expect_err("empty fields must fail");
    assert!(errors.contains(&ValidationError::RequiredField("Provider ID")));
    assert!(errors.contains(&ValidationError::RequiredField("Service order")));
    assert!(errors.contains(&ValidationError::RequiredField("Service description")));
    assert_eq!(errors.len(), 3);
}

#[test]
fn non_finite_numbers_are_invalid() {
    let mut values = sample_values("2024-03-01", "2024-03-02");
    values.odometer = f64::NAN;
    values.engine_hours = f64::INFINITY;

    let errors = validate(&values).expect_err("non-finite numbers must fail");
    assert!(errors.contains(&ValidationError::InvalidNumber("Odometer")));
    assert!(errors.contains(&ValidationError::InvalidNumber("Engine hours")));
}

#[test]
fn negative_numbers_are_out_of_range() {
    let mut values = sample_values("2024-03-01", "2024-03-02");
    values.odometer = -1.0;

    let errors = validate(&values).expect_err("negative odometer must fail");
    assert!(errors.contains(&ValidationError::OutOfRange("Odometer")));
    assert!(!errors.contains(&ValidationError::InvalidNumber("Odometer")));
}

#[test]
fn zero_is_an_accepted_reading() {
    let mut values = sample_values("2024-03-01", "2024-03-02");
    values.odometer = 0.0;
    values.engine_hours = 0.0;

    assert!(validate(&values).is_ok());
}

#[test]
fn end_date_must_be_the_next_day() {
    let mut values = sample_values("2024-03-01", "2024-03-03");
    let errors = validate(&values).expect_err("stale end date must fail");
    assert!(errors.contains(&ValidationError::DateMismatch));

    values.end_date = "2024-03-02".to_string();
    assert!(validate(&values).is_ok());
}

#[test]
fn unparseable_start_date_is_a_mismatch() {
    let values = sample_values("garbage", "2024-03-02");
    let errors = validate(&values).expect_err("bad start date must fail");
    assert!(errors.contains(&ValidationError::DateMismatch));
}

#[test]
fn missing_dates_are_required_not_mismatched() {
    let values = sample_values("", "");
    let errors = validate(&values).expect_err("missing dates must fail");
    assert!(errors.contains(&ValidationError::RequiredField("Start date")));
    assert!(errors.contains(&ValidationError::RequiredField("End date")));
    assert!(!errors.contains(&ValidationError::DateMismatch));
}

#[test]
fn unknown_service_type_is_invalid_enum() {
    let mut values = sample_values("2024-03-01", "2024-03-02");
    values.service_type = "scheduled".to_string();

    let errors = validate(&values).expect_err("unknown type must fail");
    assert!(errors.contains(&ValidationError::InvalidEnum("scheduled".to_string())));
}

#[test]
fn all_three_service_types_are_accepted() {
    for kind in ["planned", "unplanned", "emergency"] {
        let mut values = sample_values("2024-03-01", "2024-03-02");
        values.service_type = kind.to_string();
        assert!(validate(&values).is_ok(), "{kind} must be accepted");
    }
}

#[test]
fn default_values_only_miss_the_text_fields() {
    // Defaults carry a coherent date pair and type; only the free-text
    // fields block submission.
    let errors = validate(&ServiceLogFormValues::default_values())
        .expect_err("defaults are not submittable");
    assert!(errors
        .iter()
        .all(|e| matches!(e, ValidationError::RequiredField(_))));
}
