//! In-process snapshot store for tests and embedders that manage
//! persistence themselves.

use std::cell::RefCell;

use crate::errors::AppResult;
use crate::storage::{AppSnapshot, SnapshotStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RefCell<Option<AppSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: AppSnapshot) -> Self {
        Self {
            snapshot: RefCell::new(Some(snapshot)),
        }
    }

    pub fn current(&self) -> Option<AppSnapshot> {
        self.snapshot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> AppResult<Option<AppSnapshot>> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, snapshot: &AppSnapshot) -> AppResult<()> {
        *self.snapshot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }
}
