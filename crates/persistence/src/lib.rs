// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Durable local snapshot storage for the Muster visit-request console.
//!
//! The console persists a configured subset of its application state (the
//! soldier collection, the request collection, the current user, and the
//! authentication flag) as a single named JSON blob, and rehydrates it
//! wholesale at startup. Transient state (loading flag, error events) is
//! never persisted.
//!
//! ## Backend Support
//!
//! - [`FileStore`] - a JSON blob on disk under the fixed store name
//!   (default for the console)
//! - [`MemoryStore`] - an in-process slot (tests and ephemeral sessions)
//!
//! There is no migration or versioning logic: every snapshot field carries
//! a serde default, so a blob written by an older or newer revision
//! rehydrates field-by-field with defaults filling the gaps. A blob that is
//! not valid JSON at all surfaces as an error the caller converts into a
//! fresh default snapshot.

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

mod backend;
mod error;
mod snapshot;

#[cfg(test)]
mod tests;

pub use backend::{FileStore, MemoryStore, StorageBackend};
pub use error::PersistenceError;
pub use snapshot::{STORE_NAME, Snapshot};
