// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use crate::snapshot::Snapshot;

/// In-memory snapshot storage.
///
/// Used by tests and by ephemeral sessions that should leave nothing
/// behind. Holds at most one snapshot, exactly like the durable blob.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// The stored snapshot, if any.
    slot: Option<Snapshot>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Creates a store pre-seeded with a snapshot, as if a prior session
    /// had persisted it.
    #[must_use]
    pub const fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            slot: Some(snapshot),
        }
    }
}

impl StorageBackend for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        self.slot = Some(snapshot.clone());
        Ok(())
    }
}
