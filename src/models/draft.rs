use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::form_values::ServiceLogFormValues;
use crate::models::EditableRecord;
use crate::utils::date::{now_clock_label, now_rfc3339};

/// An in-progress, autosaved form snapshot not yet submitted as a
/// permanent record. Owned exclusively by the draft store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: String,
    pub name: String,
    pub data: ServiceLogFormValues,
    /// True iff no edit happened since the last write-through.
    pub saved: bool,
    pub updated_at: String, // ISO8601
}

impl Draft {
    /// New draft with a timestamp-derived display name. Defaults are used
    /// when no snapshot is supplied.
    pub fn new(data: Option<ServiceLogFormValues>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("Draft {}", now_clock_label()),
            data: data.unwrap_or_else(ServiceLogFormValues::default_values),
            saved: true,
            updated_at: now_rfc3339(),
        }
    }
}

impl EditableRecord for Draft {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn write_form_values(&mut self, values: ServiceLogFormValues) {
        self.data = values;
        self.saved = true;
        self.updated_at = now_rfc3339();
    }
}
