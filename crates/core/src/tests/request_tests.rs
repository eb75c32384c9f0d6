// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use muster_domain::{RequestDetail, RequestStatus};
use time::macros::date;

use crate::store::{RequestFilter, Store, UNKNOWN_SUBMITTER};
use crate::tests::{
    StubRemote, create_day_visit, create_test_soldier, detached_store, networked_store,
    test_credentials,
};
use muster_persistence::MemoryStore;

#[tokio::test]
async fn test_add_request_stamps_envelope_and_pending_status() {
    let mut store = detached_store();
    assert!(store.login("user1", "1234"));

    let detail = create_day_visit(create_test_soldier("s-1", "Dana Levi", "Research"));
    let stored = store.add_request(detail).await.unwrap().clone();

    assert!(!stored.id.is_empty());
    assert_eq!(stored.created_by, "user1");
    assert_eq!(stored.status, RequestStatus::Pending);
}

#[tokio::test]
async fn test_add_request_without_session_uses_the_sentinel_submitter() {
    let mut store = detached_store();

    let detail = create_day_visit(create_test_soldier("s-1", "Dana Levi", "Research"));
    let stored = store.add_request(detail).await.unwrap().clone();

    assert_eq!(stored.created_by, UNKNOWN_SUBMITTER);
}

#[tokio::test]
async fn test_add_request_dto_cannot_smuggle_a_status() {
    // A wire payload that claims to be approved still lands pending: the
    // body type has no status field and the envelope is stamped fresh.
    let soldier = create_test_soldier("s-1", "Dana Levi", "Research");
    let mut payload = serde_json::to_value(create_day_visit(soldier)).unwrap();
    payload["status"] = serde_json::Value::String(String::from("approved"));
    let detail: RequestDetail = serde_json::from_value(payload).unwrap();

    let mut store = detached_store();
    let stored = store.add_request(detail).await.unwrap().clone();

    assert_eq!(stored.status, RequestStatus::Pending);
}

#[tokio::test]
async fn test_add_request_rejection_leaves_collection_unchanged() {
    let mut store = networked_store(StubRemote::failing());
    assert!(store.login("user1", "1234"));

    let detail = create_day_visit(create_test_soldier("s-1", "Dana Levi", "Research"));
    assert!(store.add_request(detail).await.is_none());

    // No optimistic insert without confirmation.
    assert!(store.state().requests.is_empty());
    assert_eq!(store.state().errors.len(), 1);
    assert_eq!(store.state().errors.last().unwrap().context, "add_request");
}

#[tokio::test]
async fn test_networked_add_request_commits_the_confirmed_record() {
    let mut store = networked_store(StubRemote::default());
    assert!(store.login("user2", "1234"));

    let detail = create_day_visit(create_test_soldier("s-1", "Dana Levi", "Research"));
    let stored = store.add_request(detail).await.unwrap().clone();

    assert_eq!(store.state().requests.len(), 1);
    assert_eq!(stored.created_by, "user2");
    assert_eq!(stored.status, RequestStatus::Pending);
}

#[tokio::test]
async fn test_update_request_status_transitions_exactly_one_record() {
    let mut store = detached_store();
    let first = store
        .add_request(create_day_visit(create_test_soldier(
            "s-1",
            "Dana Levi",
            "Research",
        )))
        .await
        .unwrap()
        .id
        .clone();
    let second = store
        .add_request(create_day_visit(create_test_soldier(
            "s-2",
            "Noam Carmel",
            "Development",
        )))
        .await
        .unwrap()
        .id
        .clone();

    assert!(
        store
            .update_request_status(&first, RequestStatus::Approved)
            .await
    );

    assert_eq!(
        store.request_by_id(&first).unwrap().status,
        RequestStatus::Approved
    );
    assert_eq!(
        store.request_by_id(&second).unwrap().status,
        RequestStatus::Pending
    );

    // A filter for the new status now includes the transitioned id.
    let approved = store.requests_by_filter(&RequestFilter {
        status: Some(RequestStatus::Approved),
        ..RequestFilter::default()
    });
    assert!(approved.iter().any(|r| r.id == first));
}

#[tokio::test]
async fn test_update_status_for_absent_id_is_a_silent_no_op() {
    let mut store = detached_store();

    assert!(
        !store
            .update_request_status("no-such-id", RequestStatus::Approved)
            .await
    );
    assert!(store.state().errors.is_empty());
    // An id absent before the call is never present after it.
    assert!(store.request_by_id("no-such-id").is_none());
}

#[tokio::test]
async fn test_sequential_status_updates_last_call_wins() {
    let mut store = detached_store();
    let id = store
        .add_request(create_day_visit(create_test_soldier(
            "s-1",
            "Dana Levi",
            "Research",
        )))
        .await
        .unwrap()
        .id
        .clone();

    assert!(
        store
            .update_request_status(&id, RequestStatus::Approved)
            .await
    );
    assert!(
        store
            .update_request_status(&id, RequestStatus::Rejected)
            .await
    );

    assert_eq!(
        store.request_by_id(&id).unwrap().status,
        RequestStatus::Rejected
    );
}

#[tokio::test]
async fn test_approval_is_reversible() {
    let mut store = detached_store();
    let id = store
        .add_request(create_day_visit(create_test_soldier(
            "s-1",
            "Dana Levi",
            "Research",
        )))
        .await
        .unwrap()
        .id
        .clone();

    assert!(
        store
            .update_request_status(&id, RequestStatus::Approved)
            .await
    );
    assert!(
        store
            .update_request_status(&id, RequestStatus::Pending)
            .await
    );

    assert_eq!(
        store.request_by_id(&id).unwrap().status,
        RequestStatus::Pending
    );
}

#[tokio::test]
async fn test_networked_status_update_failure_keeps_prior_status() {
    let mut store = detached_store();
    let id = store
        .add_request(create_day_visit(create_test_soldier(
            "s-1",
            "Dana Levi",
            "Research",
        )))
        .await
        .unwrap()
        .id
        .clone();

    // Rebuild the same state behind a failing remote.
    let snapshot = store.state().to_snapshot();
    let mut store = Store::open(
        Some(StubRemote::failing()),
        MemoryStore::with_snapshot(snapshot),
        test_credentials(),
    );

    assert!(
        !store
            .update_request_status(&id, RequestStatus::Approved)
            .await
    );
    assert_eq!(
        store.request_by_id(&id).unwrap().status,
        RequestStatus::Pending
    );
    assert_eq!(store.state().errors.len(), 1);
}

#[tokio::test]
async fn test_filter_by_department_covers_both_exchange_participants() {
    let mut store = detached_store();
    let incoming = create_test_soldier("s-1", "Dana Levi", "Research");
    let outgoing = create_test_soldier("s-2", "Noam Carmel", "Development");
    let id = store
        .add_request(RequestDetail::Exchange {
            incoming,
            outgoing,
            arrival_date: date!(2025 - 02 - 01),
            departure_date: date!(2025 - 02 - 10),
            exit_date: date!(2025 - 02 - 02),
            base: String::from("North Base"),
        })
        .await
        .unwrap()
        .id
        .clone();

    let by_incoming = store.requests_by_filter(&RequestFilter {
        department: Some(String::from("Research")),
        ..RequestFilter::default()
    });
    assert!(by_incoming.iter().any(|r| r.id == id));

    let by_outgoing = store.requests_by_filter(&RequestFilter {
        department: Some(String::from("Development")),
        ..RequestFilter::default()
    });
    assert!(by_outgoing.iter().any(|r| r.id == id));

    let by_neither = store.requests_by_filter(&RequestFilter {
        department: Some(String::from("Logistics")),
        ..RequestFilter::default()
    });
    assert!(by_neither.is_empty());
}

#[tokio::test]
async fn test_filter_by_soldier_name_is_case_insensitive_substring() {
    let mut store = detached_store();
    store
        .add_request(create_day_visit(create_test_soldier(
            "s-1",
            "Dana Levi",
            "Research",
        )))
        .await
        .unwrap();
    store
        .add_request(create_day_visit(create_test_soldier(
            "s-2",
            "Noam Carmel",
            "Development",
        )))
        .await
        .unwrap();

    let matched = store.requests_by_filter(&RequestFilter {
        soldier_name: Some(String::from("dana")),
        ..RequestFilter::default()
    });
    assert_eq!(matched.len(), 1);
}

#[tokio::test]
async fn test_absent_criteria_act_as_wildcards() {
    let mut store = detached_store();
    store
        .add_request(create_day_visit(create_test_soldier(
            "s-1",
            "Dana Levi",
            "Research",
        )))
        .await
        .unwrap();
    store
        .add_request(create_day_visit(create_test_soldier(
            "s-2",
            "Noam Carmel",
            "Development",
        )))
        .await
        .unwrap();

    assert_eq!(
        store.requests_by_filter(&RequestFilter::default()).len(),
        2
    );
}

#[tokio::test]
async fn test_combined_criteria_narrow_together() {
    let mut store = detached_store();
    let id = store
        .add_request(create_day_visit(create_test_soldier(
            "s-1",
            "Dana Levi",
            "Research",
        )))
        .await
        .unwrap()
        .id
        .clone();
    store
        .add_request(create_day_visit(create_test_soldier(
            "s-2",
            "Dana Carmel",
            "Development",
        )))
        .await
        .unwrap();

    let matched = store.requests_by_filter(&RequestFilter {
        status: Some(RequestStatus::Pending),
        department: Some(String::from("Research")),
        soldier_name: Some(String::from("dana")),
    });
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, id);
}
