// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Remote API client for the Muster visit-request console.
//!
//! The store depends on the [`RemoteApi`] capability, not on a concrete
//! transport. [`HttpRemote`] is the production implementation: a thin
//! reqwest client over the collaborator's REST surface (`/api/soldier` and
//! `/api/submitting`, JSON bodies, any non-2xx status surfaced as an
//! error). The collaborator service itself is not owned by this
//! repository.
//!
//! Every method returns a `Result`; nothing panics across this boundary.
//! The store catches every failure and converts it into its error log.

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

mod error;
mod http;

#[cfg(test)]
mod tests;

pub use error::ClientError;
pub use http::HttpRemote;

use muster_domain::{Request, RequestStatus, Soldier, SoldierPatch};

/// The remote-backend capability the store suspends on.
///
/// Implementations may fail on any call (network or server error) and must
/// surface the failure as a [`ClientError`] rather than panicking.
#[allow(async_fn_in_trait)]
pub trait RemoteApi {
    /// Fetches the full soldier collection.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn fetch_soldiers(&self) -> Result<Vec<Soldier>, ClientError>;

    /// Applies a partial update to a soldier and returns the updated record
    /// as the server confirmed it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn update_soldier(
        &self,
        id: &str,
        patch: &SoldierPatch,
    ) -> Result<Soldier, ClientError>;

    /// Fetches the full request collection.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn fetch_requests(&self) -> Result<Vec<Request>, ClientError>;

    /// Submits a new request and returns the record as the server stored it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn create_request(&self, request: &Request) -> Result<Request, ClientError>;

    /// Replaces a stored request wholesale and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn update_request(&self, id: &str, request: &Request) -> Result<Request, ClientError>;

    /// Transitions a request's approval status and returns the updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Result<Request, ClientError>;

    /// Deletes a stored request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    async fn delete_request(&self, id: &str) -> Result<(), ClientError>;
}
