use serde::{Deserialize, Serialize};

use crate::models::service_type::ServiceType;
use crate::utils::date::{next_day_str, today_str};

/// One complete form snapshot, the value object behind both drafts and
/// finalized logs. Field names keep the persisted camelCase wire shape.
///
/// `end_date` is derived (start date + 1 day) and never independently
/// user-settable; validation rejects anything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLogFormValues {
    pub provider_id: String,
    pub service_order: String,
    pub car_id: String,
    pub odometer: f64,
    pub engine_hours: f64,
    pub start_date: String, // "YYYY-MM-DD"
    pub end_date: String,   // "YYYY-MM-DD", always start_date + 1
    #[serde(rename = "type")]
    pub service_type: String, // 'planned' | 'unplanned' | 'emergency'
    pub service_description: String,
}

impl ServiceLogFormValues {
    /// Fresh-form defaults: empty fields, today as start date, end date
    /// already set to the following day.
    pub fn default_values() -> Self {
        let start_date = today_str();
        let end_date = next_day_str(&start_date).unwrap_or_else(|| start_date.clone());

        Self {
            provider_id: String::new(),
            service_order: String::new(),
            car_id: String::new(),
            odometer: 0.0,
            engine_hours: 0.0,
            start_date,
            end_date,
            service_type: ServiceType::Planned.st_as_str().to_string(),
            service_description: String::new(),
        }
    }
}

/// Partial form snapshot as delivered by a live form's change stream.
/// Merged over [`ServiceLogFormValues::default_values`] before any draft
/// write so the stored snapshot always carries every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPatch {
    pub provider_id: Option<String>,
    pub service_order: Option<String>,
    pub car_id: Option<String>,
    pub odometer: Option<f64>,
    pub engine_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub service_type: Option<String>,
    pub service_description: Option<String>,
}

impl FormPatch {
    pub fn merge_over(self, base: ServiceLogFormValues) -> ServiceLogFormValues {
        ServiceLogFormValues {
            provider_id: self.provider_id.unwrap_or(base.provider_id),
            service_order: self.service_order.unwrap_or(base.service_order),
            car_id: self.car_id.unwrap_or(base.car_id),
            odometer: self.odometer.unwrap_or(base.odometer),
            engine_hours: self.engine_hours.unwrap_or(base.engine_hours),
            start_date: self.start_date.unwrap_or(base.start_date),
            end_date: self.end_date.unwrap_or(base.end_date),
            service_type: self.service_type.unwrap_or(base.service_type),
            service_description: self
                .service_description
                .unwrap_or(base.service_description),
        }
    }

    pub fn merge_over_defaults(self) -> ServiceLogFormValues {
        self.merge_over(ServiceLogFormValues::default_values())
    }

    pub fn has_changes(&self) -> bool {
        self.provider_id.is_some()
            || self.service_order.is_some()
            || self.car_id.is_some()
            || self.odometer.is_some()
            || self.engine_hours.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.service_type.is_some()
            || self.service_description.is_some()
    }
}

impl From<ServiceLogFormValues> for FormPatch {
    fn from(v: ServiceLogFormValues) -> Self {
        Self {
            provider_id: Some(v.provider_id),
            service_order: Some(v.service_order),
            car_id: Some(v.car_id),
            odometer: Some(v.odometer),
            engine_hours: Some(v.engine_hours),
            start_date: Some(v.start_date),
            end_date: Some(v.end_date),
            service_type: Some(v.service_type),
            service_description: Some(v.service_description),
        }
    }
}
