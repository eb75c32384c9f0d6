// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use reqwest::Response;
use serde::Serialize;
use tracing::debug;

use crate::RemoteApi;
use crate::error::ClientError;
use muster_domain::{Request, RequestStatus, Soldier, SoldierPatch};

/// The resource path for the soldier collection.
const SOLDIER_RESOURCE: &str = "soldier";

/// The resource path for the request ("submitting") collection.
const SUBMITTING_RESOURCE: &str = "submitting";

/// Body of a status-transition call.
#[derive(Debug, Serialize)]
struct StatusBody {
    /// The new approval status.
    status: RequestStatus,
}

/// HTTP implementation of [`RemoteApi`] over the collaborator's REST
/// surface.
///
/// All resources live under the `/api` base path. Bodies are JSON; any
/// non-2xx response is surfaced as [`ClientError::Status`].
#[derive(Debug, Clone)]
pub struct HttpRemote {
    /// The shared reqwest client.
    client: reqwest::Client,
    /// Service root, without the `/api` suffix.
    base_url: String,
}

impl HttpRemote {
    /// Creates a client over the given service root
    /// (e.g. `http://localhost:3000`).
    ///
    /// # Arguments
    ///
    /// * `base_url` - The service root; a trailing slash is tolerated
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the full URL for a resource path under `/api`.
    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// Converts a non-2xx response into a [`ClientError::Status`].
    fn check(response: Response, context: &str) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                context: context.to_string(),
            })
        }
    }
}

impl RemoteApi for HttpRemote {
    async fn fetch_soldiers(&self) -> Result<Vec<Soldier>, ClientError> {
        let url: String = self.url(SOLDIER_RESOURCE);
        debug!(%url, "fetching soldier collection");

        let response = self.client.get(&url).send().await?;
        let soldiers: Vec<Soldier> = Self::check(response, "GET soldier")?.json().await?;
        Ok(soldiers)
    }

    async fn update_soldier(
        &self,
        id: &str,
        patch: &SoldierPatch,
    ) -> Result<Soldier, ClientError> {
        let url: String = self.url(&format!("{SOLDIER_RESOURCE}/{id}"));
        debug!(%url, "updating soldier");

        let response = self.client.put(&url).json(patch).send().await?;
        let soldier: Soldier = Self::check(response, "PUT soldier")?.json().await?;
        Ok(soldier)
    }

    async fn fetch_requests(&self) -> Result<Vec<Request>, ClientError> {
        let url: String = self.url(SUBMITTING_RESOURCE);
        debug!(%url, "fetching request collection");

        let response = self.client.get(&url).send().await?;
        let requests: Vec<Request> = Self::check(response, "GET submitting")?.json().await?;
        Ok(requests)
    }

    async fn create_request(&self, request: &Request) -> Result<Request, ClientError> {
        let url: String = self.url(SUBMITTING_RESOURCE);
        debug!(%url, submitting_type = request.detail.submitting_type(), "submitting request");

        let response = self.client.post(&url).json(request).send().await?;
        let created: Request = Self::check(response, "POST submitting")?.json().await?;
        Ok(created)
    }

    async fn update_request(&self, id: &str, request: &Request) -> Result<Request, ClientError> {
        let url: String = self.url(&format!("{SUBMITTING_RESOURCE}/{id}"));
        debug!(%url, "replacing request");

        let response = self.client.put(&url).json(request).send().await?;
        let updated: Request = Self::check(response, "PUT submitting")?.json().await?;
        Ok(updated)
    }

    async fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Result<Request, ClientError> {
        let url: String = self.url(&format!("{SUBMITTING_RESOURCE}/{id}/status"));
        debug!(%url, %status, "transitioning request status");

        let body = StatusBody { status };
        let response = self.client.put(&url).json(&body).send().await?;
        let updated: Request = Self::check(response, "PUT submitting status")?.json().await?;
        Ok(updated)
    }

    async fn delete_request(&self, id: &str) -> Result<(), ClientError> {
        let url: String = self.url(&format!("{SUBMITTING_RESOURCE}/{id}"));
        debug!(%url, "deleting request");

        let response = self.client.delete(&url).send().await?;
        Self::check(response, "DELETE submitting")?;
        Ok(())
    }
}
