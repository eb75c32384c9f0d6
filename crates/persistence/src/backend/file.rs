// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use crate::snapshot::{STORE_NAME, Snapshot};

/// File-backed snapshot storage.
///
/// The blob lives at `<dir>/muster-console-store.json`. The directory is
/// created on first save if it does not exist.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Full path of the blob file.
    path: PathBuf,
}

impl FileStore {
    /// Creates a file store rooted at the given directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory the blob file lives in
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STORE_NAME}.json")),
        }
    }

    /// Returns the full path of the blob file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot blob found");
            return Ok(None);
        }

        let raw: String = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw: String = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "snapshot blob written");
        Ok(())
    }
}
