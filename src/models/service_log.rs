use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::form_values::ServiceLogFormValues;
use crate::models::service_type::ServiceType;
use crate::models::EditableRecord;
use crate::utils::date::{now_rfc3339, parse_date};

/// A finalized service event. The form fields are flattened so the
/// persisted record literally extends the form snapshot shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLog {
    pub id: String,
    #[serde(flatten)]
    pub data: ServiceLogFormValues,
    pub created_at: String, // ISO8601
    pub updated_at: String, // ISO8601
}

impl ServiceLog {
    /// Stamp validated form values with a fresh identity. Both timestamps
    /// start equal; `updated_at` moves on every later edit.
    pub fn new(data: ServiceLogFormValues) -> Self {
        let now = now_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            data,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Typed view of the stored service type code.
    pub fn service_type(&self) -> Option<ServiceType> {
        ServiceType::st_from_str(&self.data.service_type)
    }

    /// Typed view of the stored start date.
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.data.start_date)
    }

    /// Typed view of the stored end date.
    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.data.end_date)
    }
}

impl EditableRecord for ServiceLog {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn write_form_values(&mut self, values: ServiceLogFormValues) {
        self.data = values;
        self.updated_at = now_rfc3339();
    }
}
