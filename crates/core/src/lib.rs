// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application store for the Muster visit-request console.
//!
//! The [`Store`] is the single authoritative owner of application state and
//! the only place allowed to mutate it. It is an explicit, constructed
//! object handed to callers, never ambient global state. Mutating methods
//! take exclusive access; readers take shared access.
//!
//! Every action commits its full next state before anything observes it,
//! and no failure escapes an action: remote and storage errors are caught
//! at the action boundary and recorded in the state's error log, leaving
//! the affected collection at its last-known-good value.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod ident;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types
pub use auth::CredentialStore;
pub use error::CoreError;
pub use state::{AppState, ErrorEvent, ErrorLog};
pub use store::{RequestFilter, Store, UNKNOWN_SUBMITTER};
