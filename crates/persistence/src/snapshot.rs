// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use muster_domain::{Request, Soldier};
use serde::{Deserialize, Serialize};

/// The fixed name the console's blob is stored under.
///
/// The file backend derives its on-disk filename from this key.
pub const STORE_NAME: &str = "muster-console-store";

/// The persisted subset of the application state.
///
/// Exactly these four fields survive a restart. Loading and error state are
/// deliberately excluded: a rehydrated session always starts idle with an
/// empty error log.
///
/// Every field carries a serde default so a shape-mismatched blob (older or
/// newer revision, missing keys) rehydrates to per-field defaults instead
/// of failing wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// The soldier collection.
    pub soldiers: Vec<Soldier>,
    /// The request collection.
    pub requests: Vec<Request>,
    /// The authenticated user, when a session was active.
    pub current_user: Option<String>,
    /// Whether a session was active.
    pub is_authenticated: bool,
}
