// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod request_tests;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;

use muster_client::{ClientError, RemoteApi};
use muster_domain::{
    Gender, NewSoldier, Request, RequestDetail, RequestStatus, ServiceType, Soldier, SoldierPatch,
};
use muster_persistence::{MemoryStore, PersistenceError, Snapshot, StorageBackend};
use time::macros::date;

use crate::auth::CredentialStore;
use crate::store::Store;

static CREDENTIALS: OnceLock<CredentialStore> = OnceLock::new();

/// Hashing the stock credentials is slow; do it once per test binary.
pub fn test_credentials() -> CredentialStore {
    CREDENTIALS
        .get_or_init(|| CredentialStore::with_defaults().unwrap())
        .clone()
}

pub fn create_test_new_soldier(name: &str, department: &str) -> NewSoldier {
    NewSoldier {
        full_name: name.to_string(),
        military_id: String::from("1234567"),
        national_id: String::from("123456789"),
        phone: String::from("0501234567"),
        gender: Gender::Female,
        rank: String::from("Sergeant"),
        service_type: ServiceType::Regular,
        center: String::from("Center 1"),
        branch: String::from("Intelligence"),
        department: department.to_string(),
        team: None,
        role: String::from("Analyst"),
        requires_entry_approval: false,
        has_unit_guard: false,
        security_clearance: String::from("Secret"),
        allergies: String::from("None"),
    }
}

pub fn create_test_soldier(id: &str, name: &str, department: &str) -> Soldier {
    create_test_new_soldier(name, department).into_soldier(id.to_string())
}

pub fn create_day_visit(soldier: Soldier) -> RequestDetail {
    RequestDetail::DayVisit {
        soldier,
        arrival_date: date!(2025 - 01 - 10),
        base: String::from("North Base"),
        requires_base_approval: false,
        has_visited_base: true,
    }
}

/// A canned remote backend.
///
/// Reads answer from the prepared collections; writes echo their input the
/// way a well-behaved server would. With `fail` set, every call reports a
/// server error instead.
#[derive(Debug, Clone, Default)]
pub struct StubRemote {
    pub soldiers: Vec<Soldier>,
    pub requests: Vec<Request>,
    pub fail: bool,
}

impl StubRemote {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn error() -> ClientError {
        ClientError::Status {
            status: 500,
            context: String::from("stub"),
        }
    }
}

impl RemoteApi for StubRemote {
    async fn fetch_soldiers(&self) -> Result<Vec<Soldier>, ClientError> {
        if self.fail {
            return Err(Self::error());
        }
        Ok(self.soldiers.clone())
    }

    async fn update_soldier(
        &self,
        id: &str,
        patch: &SoldierPatch,
    ) -> Result<Soldier, ClientError> {
        if self.fail {
            return Err(Self::error());
        }
        let mut updated: Soldier = self
            .soldiers
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(Self::error)?;
        patch.apply_to(&mut updated);
        Ok(updated)
    }

    async fn fetch_requests(&self) -> Result<Vec<Request>, ClientError> {
        if self.fail {
            return Err(Self::error());
        }
        Ok(self.requests.clone())
    }

    async fn create_request(&self, request: &Request) -> Result<Request, ClientError> {
        if self.fail {
            return Err(Self::error());
        }
        Ok(request.clone())
    }

    async fn update_request(&self, _id: &str, request: &Request) -> Result<Request, ClientError> {
        if self.fail {
            return Err(Self::error());
        }
        Ok(request.clone())
    }

    async fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Result<Request, ClientError> {
        if self.fail {
            return Err(Self::error());
        }
        let mut updated: Request = self
            .requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(Self::error)?;
        updated.status = status;
        Ok(updated)
    }

    async fn delete_request(&self, _id: &str) -> Result<(), ClientError> {
        if self.fail {
            return Err(Self::error());
        }
        Ok(())
    }
}

/// A storage handle two stores can share, standing in for the one blob a
/// restart would reread.
#[derive(Debug, Clone, Default)]
pub struct SharedStorage(pub Rc<RefCell<MemoryStore>>);

impl StorageBackend for SharedStorage {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        self.0.borrow().load()
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        self.0.borrow_mut().save(snapshot)
    }
}

/// A storage backend whose every operation fails.
#[derive(Debug, Clone, Default)]
pub struct FailingStorage;

impl StorageBackend for FailingStorage {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        Err(PersistenceError::Io(String::from("disk unavailable")))
    }

    fn save(&mut self, _snapshot: &Snapshot) -> Result<(), PersistenceError> {
        Err(PersistenceError::Io(String::from("disk unavailable")))
    }
}

/// A store with no remote backend and throwaway storage.
pub fn detached_store() -> Store<StubRemote, MemoryStore> {
    Store::open(None, MemoryStore::new(), test_credentials())
}

/// A store over the given remote backend and throwaway storage.
pub fn networked_store(remote: StubRemote) -> Store<StubRemote, MemoryStore> {
    Store::open(Some(remote), MemoryStore::new(), test_credentials())
}
