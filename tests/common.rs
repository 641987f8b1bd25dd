#![allow(dead_code)]
use servicelogger::models::{FormPatch, ServiceLogFormValues};

/// A complete, valid form snapshot anchored on a fixed start date.
pub fn sample_values(start_date: &str, end_date: &str) -> ServiceLogFormValues {
    ServiceLogFormValues {
        provider_id: "P1".to_string(),
        service_order: "SO1".to_string(),
        car_id: "C1".to_string(),
        odometer: 100.0,
        engine_hours: 5.0,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        service_type: "planned".to_string(),
        service_description: "oil change".to_string(),
    }
}

/// Patch carrying only an edited provider field, the typical shape a
/// live form delivers mid-edit.
pub fn provider_patch(provider_id: &str) -> FormPatch {
    FormPatch {
        provider_id: Some(provider_id.to_string()),
        ..FormPatch::default()
    }
}
