//! In-memory draft collection with a single "active" pointer.
//! Every operation is total: absent ids degrade to no-ops instead of
//! errors, and the store reseeds itself rather than ever going empty.

use serde::{Deserialize, Serialize};

use crate::models::draft::Draft;
use crate::models::form_values::ServiceLogFormValues;
use crate::models::EditableRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftStore {
    pub active_draft_id: Option<String>,
    pub drafts: Vec<Draft>,
}

impl Default for DraftStore {
    fn default() -> Self {
        let draft = Draft::new(None);
        Self {
            active_draft_id: Some(draft.id.clone()),
            drafts: vec![draft],
        }
    }
}

impl DraftStore {
    /// Restore the never-empty invariant after deserializing a snapshot
    /// that predates it (or was tampered with).
    pub fn ensure_seeded(&mut self) {
        if self.drafts.is_empty() {
            let draft = Draft::new(None);
            self.active_draft_id = Some(draft.id.clone());
            self.drafts = vec![draft];
        } else if self.active_draft_id.is_none() {
            self.active_draft_id = Some(self.drafts[0].id.clone());
        }
    }

    /// New default draft, inserted at the front and made active.
    pub fn create_new_draft(&mut self) -> String {
        let draft = Draft::new(None);
        let id = draft.id.clone();
        self.drafts.insert(0, draft);
        self.active_draft_id = Some(id.clone());
        id
    }

    /// Point the store at `id`. Membership is deliberately unchecked:
    /// callers pass known ids, and a dangling pointer simply behaves as
    /// "no active draft" everywhere the draft has to be resolved.
    pub fn set_active_draft(&mut self, id: &str) {
        self.active_draft_id = Some(id.to_string());
    }

    pub fn active_draft(&self) -> Option<&Draft> {
        let id = self.active_draft_id.as_deref()?;
        self.drafts.iter().find(|d| d.id == id)
    }

    fn active_draft_mut(&mut self) -> Option<&mut Draft> {
        let id = self.active_draft_id.clone()?;
        self.drafts.iter_mut().find(|d| d.id == id)
    }

    /// Overwrite the active draft's snapshot, marking it saved again.
    /// No-op when no active draft resolves.
    pub fn upsert_active_draft_data(&mut self, values: ServiceLogFormValues) {
        if let Some(draft) = self.active_draft_mut() {
            draft.write_form_values(values);
        }
    }

    /// Remove the active draft. The first remaining draft takes over;
    /// when none remains a fresh default draft is synthesized, so the
    /// store is never empty after this call.
    pub fn delete_active_draft(&mut self) {
        let Some(active_id) = self.active_draft_id.clone() else {
            return;
        };

        self.drafts.retain(|d| d.id != active_id);
        self.active_draft_id = self.drafts.first().map(|d| d.id.clone());

        if self.drafts.is_empty() {
            let fallback = Draft::new(None);
            self.active_draft_id = Some(fallback.id.clone());
            self.drafts = vec![fallback];
        }
    }

    /// Replace the whole collection with one fresh default draft.
    pub fn clear_all_drafts(&mut self) {
        let fallback = Draft::new(None);
        self.active_draft_id = Some(fallback.id.clone());
        self.drafts = vec![fallback];
    }

    /// Flip the saved flag on a located draft; no-op when absent.
    pub fn mark_draft_saved_state(&mut self, id: &str, saved: bool) {
        if let Some(draft) = self.drafts.iter_mut().find(|d| d.id == id) {
            draft.saved = saved;
        }
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
