//! Application facade: owns both stores, the autosave controller and
//! the snapshot store, and exposes the operation set a presentation
//! layer binds to.
//!
//! Every mutating operation applies to memory first and persists after;
//! a failed save surfaces as an error but never rolls back or corrupts
//! the in-memory state.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::autosave::AutosaveController;
use crate::core::drafts::DraftStore;
use crate::core::filter::{filter_logs, LogFilter};
use crate::core::service_logs::ServiceLogStore;
use crate::core::validation::validate;
use crate::errors::{AppError, AppResult};
use crate::models::form_values::{FormPatch, ServiceLogFormValues};
use crate::models::service_log::ServiceLog;
use crate::storage::{AppSnapshot, JsonFileStore, SnapshotStore};

pub struct App {
    pub drafts: DraftStore,
    pub service_logs: ServiceLogStore,
    autosave: AutosaveController,
    storage: Box<dyn SnapshotStore>,
}

impl App {
    /// Open against the configured snapshot file.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let storage = Box::new(JsonFileStore::new(&cfg.storage));
        let mut app = Self::with_storage(storage)?;
        app.autosave = AutosaveController::new(Duration::from_millis(cfg.autosave_delay_ms));
        Ok(app)
    }

    /// Open against any snapshot store. A missing or incompatible
    /// snapshot seeds default state (one fresh active draft, no logs).
    pub fn with_storage(storage: Box<dyn SnapshotStore>) -> AppResult<Self> {
        let (drafts, service_logs) = match storage.load()? {
            Some(snapshot) => {
                let mut drafts = snapshot.drafts;
                drafts.ensure_seeded();
                (drafts, snapshot.service_logs)
            }
            None => (DraftStore::default(), ServiceLogStore::default()),
        };

        Ok(Self {
            drafts,
            service_logs,
            autosave: AutosaveController::default(),
            storage,
        })
    }

    // ------------------------------------------------
    // Draft lifecycle
    // ------------------------------------------------

    /// New default draft, activated. The form rebinds to it, so the
    /// next change notification is a reset echo and gets swallowed.
    pub fn create_draft(&mut self) -> AppResult<String> {
        self.autosave.note_form_reset();
        let id = self.drafts.create_new_draft();
        self.persist()?;
        Ok(id)
    }

    pub fn select_draft(&mut self, id: &str) -> AppResult<()> {
        self.autosave.note_form_reset();
        self.drafts.set_active_draft(id);
        self.persist()
    }

    pub fn delete_active_draft(&mut self) -> AppResult<()> {
        self.autosave.note_form_reset();
        self.drafts.delete_active_draft();
        self.persist()
    }

    pub fn clear_drafts(&mut self) -> AppResult<()> {
        self.autosave.note_form_reset();
        self.drafts.clear_all_drafts();
        self.persist()
    }

    // ------------------------------------------------
    // Autosave plumbing
    // ------------------------------------------------

    /// Feed one change notification from the bound form.
    pub fn form_changed(&mut self, patch: FormPatch) {
        self.autosave
            .record_change(&mut self.drafts, patch, Instant::now());
    }

    /// Drive the debounce; call from the event loop tick. Returns true
    /// when a snapshot was committed (and persisted).
    pub fn autosave_tick(&mut self) -> AppResult<bool> {
        if self.autosave.poll(&mut self.drafts, Instant::now()) {
            self.persist()?;
            return Ok(true);
        }
        Ok(false)
    }

    // ------------------------------------------------
    // Service logs
    // ------------------------------------------------

    /// Finalize the current form values as a new service log and reset
    /// the active draft back to defaults.
    pub fn submit_form(&mut self, values: &ServiceLogFormValues) -> AppResult<String> {
        let validated = validate(values).map_err(AppError::Validation)?;
        let id = self.service_logs.create_service_log(validated);

        // The form resets to defaults after submit; swallow the echo and
        // leave the draft clean.
        self.autosave.note_form_reset();
        self.drafts
            .upsert_active_draft_data(ServiceLogFormValues::default_values());

        self.persist()?;
        Ok(id)
    }

    /// Edit-dialog save path: validates, then overwrites the record.
    /// Unknown ids are silently ignored, as everywhere in the stores.
    pub fn update_service_log(
        &mut self,
        id: &str,
        values: &ServiceLogFormValues,
    ) -> AppResult<()> {
        let validated = validate(values).map_err(AppError::Validation)?;
        self.service_logs.update_service_log(id, validated);
        self.persist()
    }

    pub fn delete_service_log(&mut self, id: &str) -> AppResult<()> {
        self.service_logs.delete_service_log(id);
        self.persist()
    }

    pub fn filter_logs(&self, filter: &LogFilter) -> Vec<&ServiceLog> {
        filter_logs(&self.service_logs.logs, filter)
    }

    // ------------------------------------------------
    // Persistence
    // ------------------------------------------------

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            drafts: self.drafts.clone(),
            service_logs: self.service_logs.clone(),
        }
    }

    fn persist(&self) -> AppResult<()> {
        self.storage.save(&self.snapshot())
    }
}
