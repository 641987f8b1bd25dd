//! Field-level validation for service log form values.
//! Pure and synchronous; collects every failure instead of stopping at
//! the first one, so a form can surface all inline messages at once.

use std::fmt;

use thiserror::Error;

use crate::models::form_values::ServiceLogFormValues;
use crate::models::service_type::ServiceType;
use crate::utils::date::next_day_str;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    RequiredField(&'static str),

    #[error("{0} must be a number")]
    InvalidNumber(&'static str),

    #[error("{0} must be greater than or equal to 0")]
    OutOfRange(&'static str),

    #[error("End date must be the next day")]
    DateMismatch,

    #[error("Invalid service type: {0}")]
    InvalidEnum(String),
}

/// All field errors found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(pub Vec<ValidationError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn contains(&self, err: &ValidationError) -> bool {
        self.0.contains(err)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

fn require(out: &mut Vec<ValidationError>, label: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        out.push(ValidationError::RequiredField(label));
        false
    } else {
        true
    }
}

fn check_number(out: &mut Vec<ValidationError>, label: &'static str, value: f64) {
    if !value.is_finite() {
        out.push(ValidationError::InvalidNumber(label));
    } else if value < 0.0 {
        out.push(ValidationError::OutOfRange(label));
    }
}

/// Validate a full form snapshot. On success returns the normalized
/// values: strings trimmed and the end date rewritten to the canonical
/// next-day form, so `end_date == next_day(start_date)` holds by
/// construction.
pub fn validate(values: &ServiceLogFormValues) -> Result<ServiceLogFormValues, FieldErrors> {
    let mut errors = Vec::new();

    require(&mut errors, "Provider ID", &values.provider_id);
    require(&mut errors, "Service order", &values.service_order);
    require(&mut errors, "Car ID", &values.car_id);

    check_number(&mut errors, "Odometer", values.odometer);
    check_number(&mut errors, "Engine hours", values.engine_hours);

    let start = values.start_date.trim();
    let end = values.end_date.trim();
    let has_start = require(&mut errors, "Start date", start);
    let has_end = require(&mut errors, "End date", end);

    // The next-day rule only fires when both dates are present; the
    // required checks above already cover the empty cases.
    let mut expected_end = None;
    if has_start && has_end {
        match next_day_str(start) {
            Some(next) if next == end => expected_end = Some(next),
            _ => errors.push(ValidationError::DateMismatch),
        }
    }

    let service_type = ServiceType::st_from_str(values.service_type.trim());
    if service_type.is_none() {
        errors.push(ValidationError::InvalidEnum(values.service_type.clone()));
    }

    if !errors.is_empty() {
        return Err(FieldErrors(errors));
    }

    Ok(ServiceLogFormValues {
        provider_id: values.provider_id.trim().to_string(),
        service_order: values.service_order.trim().to_string(),
        car_id: values.car_id.trim().to_string(),
        odometer: values.odometer,
        engine_hours: values.engine_hours,
        start_date: start.to_string(),
        end_date: expected_end.unwrap_or_else(|| end.to_string()),
        service_type: service_type
            .map(|t| t.st_as_str().to_string())
            .unwrap_or_else(|| values.service_type.clone()),
        service_description: values.service_description.trim().to_string(),
    })
}
