//! Finalized service log collection. Newest records sit at the front,
//! which is a display convention rather than an invariant.

use serde::{Deserialize, Serialize};

use crate::models::form_values::ServiceLogFormValues;
use crate::models::service_log::ServiceLog;
use crate::models::EditableRecord;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLogStore {
    pub logs: Vec<ServiceLog>,
    /// Bumped on every mutation; lets derived views memoize cheaply.
    /// Not part of the persisted snapshot.
    #[serde(skip)]
    revision: u64,
}

impl ServiceLogStore {
    /// Stamp validated values with identity and timestamps and insert
    /// the record at the front. Returns the generated id.
    pub fn create_service_log(&mut self, values: ServiceLogFormValues) -> String {
        let log = ServiceLog::new(values);
        let id = log.id.clone();
        self.logs.insert(0, log);
        self.revision += 1;
        id
    }

    /// Overwrite a located record's form fields and refresh its
    /// `updated_at`; silent no-op when the id is not found.
    pub fn update_service_log(&mut self, id: &str, values: ServiceLogFormValues) {
        if let Some(log) = self.logs.iter_mut().find(|l| l.id == id) {
            log.write_form_values(values);
            self.revision += 1;
        }
    }

    /// Remove a record; silent no-op when absent.
    pub fn delete_service_log(&mut self, id: &str) {
        let before = self.logs.len();
        self.logs.retain(|l| l.id != id);
        if self.logs.len() != before {
            self.revision += 1;
        }
    }

    pub fn get(&self, id: &str) -> Option<&ServiceLog> {
        self.logs.iter().find(|l| l.id == id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}
