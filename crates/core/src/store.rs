// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use muster_client::{ClientError, RemoteApi};
use muster_domain::{NewSoldier, Request, RequestDetail, RequestStatus, Soldier, SoldierPatch};
use muster_persistence::StorageBackend;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::auth::CredentialStore;
use crate::ident::unique_millis_id;
use crate::state::{AppState, ErrorEvent};

/// Submitter recorded when a request is somehow added without an
/// authenticated user.
pub const UNKNOWN_SUBMITTER: &str = "unknown";

/// Criteria for filtering the request collection.
///
/// Absent criteria act as wildcards. The department and soldier-name
/// criteria are resolved against whichever soldier reference(s) the variant
/// carries; exchanges match on both participants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    /// Match requests with exactly this status.
    pub status: Option<RequestStatus>,
    /// Match requests whose soldier belongs to exactly this department.
    pub department: Option<String>,
    /// Match requests whose soldier's name contains this string
    /// (case-insensitive).
    pub soldier_name: Option<String>,
}

/// A token identifying one issued load.
///
/// Each refresh bumps a per-collection generation counter; a completion
/// holding a token that is no longer the latest issued is discarded, so an
/// overlapping earlier load can never clobber a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoadToken(u64);

/// The application store: single authoritative owner of [`AppState`] and
/// the only place allowed to mutate it.
///
/// All mutations are synchronous, atomic commits: an action computes its
/// full next state before anything can observe it. Asynchronous actions
/// suspend only at the remote-call boundary. After every commit the
/// persisted subset of the state is written back to the storage backend.
///
/// No error escapes an action: remote and storage failures are recorded in
/// the state's error log and the affected collection keeps its
/// last-known-good value.
pub struct Store<R, S> {
    /// The owned application state.
    state: AppState,
    /// The remote backend, when the console is networked.
    remote: Option<R>,
    /// The durable snapshot backend.
    storage: S,
    /// The static operator credential list.
    credentials: CredentialStore,
    /// Generation counter for soldier loads.
    soldier_load_gen: u64,
    /// Generation counter for request loads.
    request_load_gen: u64,
}

impl<R, S> Store<R, S>
where
    R: RemoteApi,
    S: StorageBackend,
{
    /// Opens a store, rehydrating the persisted subset from the backend.
    ///
    /// A missing blob yields default state. A corrupt blob also yields
    /// default state, plus an error event describing the failure; the
    /// console must come up either way.
    ///
    /// # Arguments
    ///
    /// * `remote` - The remote backend, or `None` for a detached console
    /// * `storage` - The durable snapshot backend
    /// * `credentials` - The static operator credential list
    #[must_use]
    pub fn open(remote: Option<R>, storage: S, credentials: CredentialStore) -> Self {
        let state: AppState = match storage.load() {
            Ok(Some(snapshot)) => AppState::from_snapshot(snapshot),
            Ok(None) => AppState::default(),
            Err(err) => {
                warn!("Failed to rehydrate stored state: {err}");
                let mut fresh: AppState = AppState::default();
                fresh
                    .errors
                    .push("rehydrate", format!("Failed to rehydrate stored state: {err}"));
                fresh
            }
        };

        Self {
            state,
            remote,
            storage,
            credentials,
            soldier_load_gen: 0,
            request_load_gen: 0,
        }
    }

    /// Returns a shared view of the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Checks credentials and opens a session.
    ///
    /// On success the user identity and auth flag are set and the error log
    /// is cleared. On mismatch a descriptive error is recorded and the auth
    /// fields keep their prior values.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if self.credentials.verify(username, password) {
            info!(%username, "login succeeded");
            self.state.current_user = Some(username.to_string());
            self.state.is_authenticated = true;
            self.state.errors.clear();
            self.persist();
            true
        } else {
            self.record_error("login", String::from("Incorrect username or password"));
            false
        }
    }

    /// Closes the session. Always succeeds.
    pub fn logout(&mut self) {
        info!("logout");
        self.state.current_user = None;
        self.state.is_authenticated = false;
        self.persist();
    }

    /// Refreshes the soldier collection from the remote backend.
    ///
    /// On success the collection is replaced wholesale (never merged). On
    /// failure a contextual error is recorded and the collection keeps its
    /// last-known-good value. The loading flag clears on every path.
    pub async fn load_soldiers(&mut self) -> bool {
        let token: LoadToken = self.begin_soldier_load();
        let result: Result<Vec<Soldier>, ClientError> = match &self.remote {
            Some(remote) => remote.fetch_soldiers().await,
            None => {
                self.state.is_loading = false;
                self.record_error("load_soldiers", String::from("No remote backend configured"));
                return false;
            }
        };
        self.commit_soldiers(token, result)
    }

    /// Refreshes the request collection from the remote backend.
    ///
    /// Same contract as [`Store::load_soldiers`].
    pub async fn load_requests(&mut self) -> bool {
        let token: LoadToken = self.begin_request_load();
        let result: Result<Vec<Request>, ClientError> = match &self.remote {
            Some(remote) => remote.fetch_requests().await,
            None => {
                self.state.is_loading = false;
                self.record_error("load_requests", String::from("No remote backend configured"));
                return false;
            }
        };
        self.commit_requests(token, result)
    }

    /// Issues a load token for a soldier refresh and raises the loading
    /// flag.
    pub(crate) fn begin_soldier_load(&mut self) -> LoadToken {
        self.soldier_load_gen += 1;
        self.state.is_loading = true;
        LoadToken(self.soldier_load_gen)
    }

    /// Commits a completed soldier load.
    ///
    /// The loading flag clears unconditionally. A stale token (a newer load
    /// was issued meanwhile) discards the completion; the last-issued load
    /// wins regardless of completion order.
    pub(crate) fn commit_soldiers(
        &mut self,
        token: LoadToken,
        result: Result<Vec<Soldier>, ClientError>,
    ) -> bool {
        self.state.is_loading = false;
        if token.0 != self.soldier_load_gen {
            debug!("discarding stale soldier load completion");
            return false;
        }
        match result {
            Ok(soldiers) => {
                info!(count = soldiers.len(), "soldier collection replaced");
                self.state.soldiers = soldiers;
                self.persist();
                true
            }
            Err(err) => {
                self.record_error("load_soldiers", format!("Failed to load soldiers: {err}"));
                false
            }
        }
    }

    /// Issues a load token for a request refresh and raises the loading
    /// flag.
    pub(crate) fn begin_request_load(&mut self) -> LoadToken {
        self.request_load_gen += 1;
        self.state.is_loading = true;
        LoadToken(self.request_load_gen)
    }

    /// Commits a completed request load. Same contract as
    /// [`Store::commit_soldiers`].
    pub(crate) fn commit_requests(
        &mut self,
        token: LoadToken,
        result: Result<Vec<Request>, ClientError>,
    ) -> bool {
        self.state.is_loading = false;
        if token.0 != self.request_load_gen {
            debug!("discarding stale request load completion");
            return false;
        }
        match result {
            Ok(requests) => {
                info!(count = requests.len(), "request collection replaced");
                self.state.requests = requests;
                self.persist();
                true
            }
            Err(err) => {
                self.record_error("load_requests", format!("Failed to load requests: {err}"));
                false
            }
        }
    }

    /// Adds a soldier under a freshly assigned id and returns the stored
    /// record.
    ///
    /// Every field of the payload is preserved verbatim; only the id is
    /// stamped. The remote API exposes no soldier creation, so this is a
    /// local mutation.
    pub fn add_soldier(&mut self, soldier: NewSoldier) -> &Soldier {
        let id: String =
            unique_millis_id(|candidate| self.state.soldiers.iter().any(|s| s.id == candidate));
        info!(%id, "soldier added");
        self.state.soldiers.push(soldier.into_soldier(id));
        self.persist();
        let index: usize = self.state.soldiers.len() - 1;
        &self.state.soldiers[index]
    }

    /// Applies a partial update to a soldier as a shallow merge.
    ///
    /// When networked this is a confirmed write: the server is asked first
    /// and its echo of the record is what gets committed; on failure the
    /// local record is left untouched. An absent id is a silent no-op.
    pub async fn update_soldier(&mut self, id: &str, patch: SoldierPatch) -> bool {
        if !self.state.soldiers.iter().any(|soldier| soldier.id == id) {
            debug!(%id, "update for absent soldier id is a no-op");
            return false;
        }

        if let Some(remote) = &self.remote {
            let result: Result<Soldier, ClientError> = remote.update_soldier(id, &patch).await;
            match result {
                Ok(confirmed) => {
                    if let Some(existing) =
                        self.state.soldiers.iter_mut().find(|s| s.id == id)
                    {
                        *existing = confirmed;
                    }
                    self.persist();
                    true
                }
                Err(err) => {
                    self.record_error(
                        "update_soldier",
                        format!("Failed to update soldier '{id}': {err}"),
                    );
                    false
                }
            }
        } else {
            if let Some(existing) = self.state.soldiers.iter_mut().find(|s| s.id == id) {
                patch.apply_to(existing);
            }
            self.persist();
            true
        }
    }

    /// Removes a soldier by id. An absent id is a silent no-op.
    ///
    /// Soldiers are never removed as a side effect of request lifecycle
    /// changes; this action is the only way one leaves the collection.
    pub fn delete_soldier(&mut self, id: &str) -> bool {
        let before: usize = self.state.soldiers.len();
        self.state.soldiers.retain(|soldier| soldier.id != id);
        if self.state.soldiers.len() == before {
            debug!(%id, "delete for absent soldier id is a no-op");
            return false;
        }
        info!(%id, "soldier deleted");
        self.persist();
        true
    }

    /// Looks up a soldier by id.
    #[must_use]
    pub fn soldier_by_id(&self, id: &str) -> Option<&Soldier> {
        self.state.soldiers.iter().find(|soldier| soldier.id == id)
    }

    /// Produces a filtered, order-preserving view of the soldier
    /// collection.
    ///
    /// An empty or whitespace-only query returns the full collection. A
    /// non-empty query matches case-insensitively against the full name
    /// and as a raw substring against the military and national
    /// identifiers. Returns a fresh list; never mutates the collection.
    #[must_use]
    pub fn search_soldiers(&self, query: &str) -> Vec<Soldier> {
        if query.trim().is_empty() {
            return self.state.soldiers.clone();
        }

        let lowered: String = query.to_lowercase();
        self.state
            .soldiers
            .iter()
            .filter(|soldier| {
                soldier.full_name.to_lowercase().contains(&lowered)
                    || soldier.military_id.contains(query)
                    || soldier.national_id.contains(query)
            })
            .cloned()
            .collect()
    }

    /// Submits a new request.
    ///
    /// The store stamps a fresh id, the creation time, the submitter (the
    /// current user, or a sentinel when somehow unauthenticated), and the
    /// initial pending status, regardless of anything status-like in the
    /// payload. When networked this is a confirmed write: nothing is
    /// inserted unless the server accepts the submission.
    ///
    /// Callers are responsible for validating the payload at the form
    /// boundary first; the store does not re-run those rules.
    pub async fn add_request(&mut self, detail: RequestDetail) -> Option<&Request> {
        let id: String =
            unique_millis_id(|candidate| self.state.requests.iter().any(|r| r.id == candidate));
        let created_by: String = self
            .state
            .current_user
            .clone()
            .unwrap_or_else(|| String::from(UNKNOWN_SUBMITTER));
        let record: Request = Request::new(id, OffsetDateTime::now_utc(), created_by, detail);

        let committed: Request = if let Some(remote) = &self.remote {
            let result: Result<Request, ClientError> = remote.create_request(&record).await;
            match result {
                Ok(confirmed) => confirmed,
                Err(err) => {
                    self.record_error("add_request", format!("Failed to submit request: {err}"));
                    return None;
                }
            }
        } else {
            record
        };

        info!(
            id = %committed.id,
            submitting_type = committed.detail.submitting_type(),
            "request added"
        );
        self.state.requests.push(committed);
        self.persist();
        let index: usize = self.state.requests.len() - 1;
        Some(&self.state.requests[index])
    }

    /// Transitions exactly one request's approval status.
    ///
    /// An absent id is a silent no-op. When networked this is a confirmed
    /// write; on failure the record keeps its prior status. Repeated calls
    /// leave the status of the last call; there is no status history.
    pub async fn update_request_status(&mut self, id: &str, status: RequestStatus) -> bool {
        if !self.state.requests.iter().any(|request| request.id == id) {
            debug!(%id, "status update for absent request id is a no-op");
            return false;
        }

        if let Some(remote) = &self.remote {
            let result: Result<Request, ClientError> =
                remote.update_request_status(id, status).await;
            match result {
                Ok(confirmed) => {
                    if let Some(existing) =
                        self.state.requests.iter_mut().find(|r| r.id == id)
                    {
                        *existing = confirmed;
                    }
                    self.persist();
                    true
                }
                Err(err) => {
                    self.record_error(
                        "update_request_status",
                        format!("Failed to update status of request '{id}': {err}"),
                    );
                    false
                }
            }
        } else {
            if let Some(existing) = self.state.requests.iter_mut().find(|r| r.id == id) {
                existing.status = status;
            }
            self.persist();
            true
        }
    }

    /// Looks up a request by id.
    #[must_use]
    pub fn request_by_id(&self, id: &str) -> Option<&Request> {
        self.state.requests.iter().find(|request| request.id == id)
    }

    /// Produces a filtered view of the request collection. Pure read.
    #[must_use]
    pub fn requests_by_filter(&self, filter: &RequestFilter) -> Vec<Request> {
        self.state
            .requests
            .iter()
            .filter(|request| {
                if let Some(status) = filter.status
                    && request.status != status
                {
                    return false;
                }
                if let Some(department) = &filter.department
                    && !request
                        .detail
                        .soldiers()
                        .iter()
                        .any(|soldier| &soldier.department == department)
                {
                    return false;
                }
                if let Some(name) = &filter.soldier_name {
                    let needle: String = name.to_lowercase();
                    if !request
                        .detail
                        .soldiers()
                        .iter()
                        .any(|soldier| soldier.full_name.to_lowercase().contains(&needle))
                    {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Acknowledges every recorded error event.
    pub fn acknowledge_errors(&mut self) {
        self.state.errors.clear();
    }

    /// Acknowledges the oldest recorded error event and returns it.
    pub fn acknowledge_oldest_error(&mut self) -> Option<ErrorEvent> {
        self.state.errors.acknowledge_oldest()
    }

    /// Records a failure in the error log.
    fn record_error(&mut self, context: &str, message: String) {
        warn!(context, "{message}");
        self.state.errors.push(context, message);
    }

    /// Writes the persisted subset of the state to the storage backend.
    ///
    /// Called synchronously after every state commit. A storage failure is
    /// itself recorded as an error event; the in-memory state stands.
    fn persist(&mut self) {
        let snapshot = self.state.to_snapshot();
        if let Err(err) = self.storage.save(&snapshot) {
            warn!("Failed to persist state: {err}");
            self.state
                .errors
                .push("persist", format!("Failed to persist state: {err}"));
        }
    }
}
