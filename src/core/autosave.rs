//! Debounced bridge between a live form's change stream and the draft
//! store.
//!
//! The controller is a plain state machine driven by caller-supplied
//! `Instant`s, so nothing here owns a timer thread: the embedding event
//! loop calls [`AutosaveController::record_change`] on every form change
//! and [`AutosaveController::poll`] on its tick, and tests drive it with
//! a fabricated clock.
//!
//! Two rules make the bridge loop-safe:
//! - debounce: only the last snapshot within the delay window survives;
//!   arming a new deadline discards the previous pending snapshot.
//! - echo suppression: the first change after a programmatic form reset
//!   (draft switch, submit) is not a user edit and is swallowed once.

use std::time::{Duration, Instant};

use crate::core::drafts::DraftStore;
use crate::models::form_values::{FormPatch, ServiceLogFormValues};

/// Quiet period before an edit is written through to the draft store.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No pending write; the active draft is considered saved.
    Idle,
    /// An edit was observed; the write fires once `deadline` passes
    /// without a newer edit re-arming it.
    Dirty { deadline: Instant },
}

#[derive(Debug)]
pub struct AutosaveController {
    delay: Duration,
    phase: Phase,
    pending: Option<ServiceLogFormValues>,
    skip_next_change: bool,
}

impl Default for AutosaveController {
    fn default() -> Self {
        Self::new(AUTOSAVE_DELAY)
    }
}

impl AutosaveController {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: Phase::Idle,
            pending: None,
            skip_next_change: false,
        }
    }

    /// The form is about to be programmatically reset (active draft
    /// switched, submit completed): swallow exactly the next change
    /// notification and drop any trailing pending write, so the old
    /// draft's last edit can never land in the new one.
    pub fn note_form_reset(&mut self) {
        self.skip_next_change = true;
        self.phase = Phase::Idle;
        self.pending = None;
    }

    /// Feed one change notification from the form.
    ///
    /// The draft's saved flag flips to false exactly once per dirty
    /// window; the patch is completed over defaults so the eventual
    /// write always carries a full snapshot.
    pub fn record_change(&mut self, drafts: &mut DraftStore, patch: FormPatch, now: Instant) {
        let (was_saved, active_id) = match drafts.active_draft() {
            Some(active) => (active.saved, active.id.clone()),
            None => return,
        };

        if self.skip_next_change {
            self.skip_next_change = false;
            return;
        }

        if was_saved {
            drafts.mark_draft_saved_state(&active_id, false);
        }

        self.pending = Some(patch.merge_over_defaults());
        self.phase = Phase::Dirty {
            deadline: now + self.delay,
        };
    }

    /// Commit the pending snapshot if its quiet period has elapsed.
    /// Returns true when a write reached the store. A write with no
    /// resolvable active draft is dropped silently.
    pub fn poll(&mut self, drafts: &mut DraftStore, now: Instant) -> bool {
        match self.phase {
            Phase::Dirty { deadline } if now >= deadline => {
                self.phase = Phase::Idle;
                if let Some(values) = self.pending.take() {
                    drafts.upsert_active_draft_data(values);
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.phase, Phase::Dirty { .. })
    }

    /// Deadline of the pending write, if one is armed.
    pub fn pending_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Dirty { deadline } => Some(deadline),
            Phase::Idle => None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
