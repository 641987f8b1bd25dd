//! Snapshot persistence boundary.
//! The core treats the store as an opaque collaborator: `load` once at
//! startup, `save` after each mutation, no acknowledgment or retries.

pub mod json_file;
pub mod memory;

use serde::{Deserialize, Serialize};

use crate::core::drafts::DraftStore;
use crate::core::service_logs::ServiceLogStore;
use crate::errors::AppResult;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// The whole persisted application state.
/// Wire shape: `{ "drafts": { activeDraftId, drafts }, "serviceLogs": { logs } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub drafts: DraftStore,
    pub service_logs: ServiceLogStore,
}

pub trait SnapshotStore {
    /// Load the previous snapshot. `Ok(None)` means "nothing usable":
    /// a missing or incompatible snapshot is absent, not an error.
    fn load(&self) -> AppResult<Option<AppSnapshot>>;

    /// Write the current snapshot. Failures propagate to the caller;
    /// the in-memory state stays the source of truth either way.
    fn save(&self, snapshot: &AppSnapshot) -> AppResult<()>;
}
