// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use muster_domain::{Request, Soldier};
use muster_persistence::Snapshot;
use time::OffsetDateTime;

/// A single recorded failure.
///
/// Events are ordered and timestamped so that consecutive failures never
/// overwrite one another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    /// When the failure was recorded.
    pub at: OffsetDateTime,
    /// The action that failed (e.g. `load_soldiers`).
    pub context: String,
    /// A human-readable description of the failure.
    pub message: String,
}

/// An ordered queue of error events.
///
/// Replaces a single overwrite slot: every failure is kept until a consumer
/// explicitly acknowledges it, so unrelated errors are never silently
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    /// Recorded events, oldest first.
    events: Vec<ErrorEvent>,
}

impl ErrorLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Records a failure, stamped with the current time.
    pub fn push(&mut self, context: &str, message: String) {
        self.events.push(ErrorEvent {
            at: OffsetDateTime::now_utc(),
            context: context.to_string(),
            message,
        });
    }

    /// Returns the most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&ErrorEvent> {
        self.events.last()
    }

    /// Returns every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> &[ErrorEvent] {
        &self.events
    }

    /// Acknowledges (removes) the oldest event and returns it.
    pub fn acknowledge_oldest(&mut self) -> Option<ErrorEvent> {
        if self.events.is_empty() {
            None
        } else {
            Some(self.events.remove(0))
        }
    }

    /// Acknowledges every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when no events are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// The complete application state.
///
/// This is the sole source of truth for the view layer. The persisted
/// subset (soldiers, requests, current user, auth flag) survives a restart;
/// the loading flag and error log always start fresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// The authenticated user, if any.
    pub current_user: Option<String>,
    /// Whether a user is authenticated.
    pub is_authenticated: bool,
    /// The soldier collection.
    pub soldiers: Vec<Soldier>,
    /// The request collection.
    pub requests: Vec<Request>,
    /// Whether a refresh operation is in flight.
    pub is_loading: bool,
    /// Recorded failures awaiting acknowledgement.
    pub errors: ErrorLog,
}

impl AppState {
    /// Rehydrates state from a persisted snapshot.
    ///
    /// Transient fields start at their defaults.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            current_user: snapshot.current_user,
            is_authenticated: snapshot.is_authenticated,
            soldiers: snapshot.soldiers,
            requests: snapshot.requests,
            is_loading: false,
            errors: ErrorLog::new(),
        }
    }

    /// Extracts the persisted subset of this state.
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            soldiers: self.soldiers.clone(),
            requests: self.requests.clone(),
            current_user: self.current_user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}
