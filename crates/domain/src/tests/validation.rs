// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_new_soldier, create_test_soldier};
use crate::{DomainError, RequestDetail, validate_new_soldier, validate_request};
use time::macros::date;

#[test]
fn test_valid_soldier_passes() {
    let payload = create_test_new_soldier();
    assert!(validate_new_soldier(&payload).is_ok());
}

#[test]
fn test_blank_name_rejected() {
    let mut payload = create_test_new_soldier();
    payload.full_name = String::from("   ");

    assert!(matches!(
        validate_new_soldier(&payload),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_empty_military_id_rejected() {
    let mut payload = create_test_new_soldier();
    payload.military_id = String::new();

    assert!(matches!(
        validate_new_soldier(&payload),
        Err(DomainError::InvalidMilitaryId(_))
    ));
}

#[test]
fn test_empty_national_id_rejected() {
    let mut payload = create_test_new_soldier();
    payload.national_id = String::new();

    assert!(matches!(
        validate_new_soldier(&payload),
        Err(DomainError::InvalidNationalId(_))
    ));
}

#[test]
fn test_stay_with_later_departure_passes() {
    let detail = RequestDetail::Stay {
        soldier: create_test_soldier("s-1"),
        arrival_date: date!(2025 - 01 - 10),
        departure_date: date!(2025 - 01 - 15),
        base: String::from("North Base"),
        requires_base_approval: false,
        has_visited_base: true,
    };

    assert!(validate_request(&detail).is_ok());
}

#[test]
fn test_stay_departure_equal_to_arrival_rejected() {
    let detail = RequestDetail::Stay {
        soldier: create_test_soldier("s-1"),
        arrival_date: date!(2025 - 01 - 10),
        departure_date: date!(2025 - 01 - 10),
        base: String::from("North Base"),
        requires_base_approval: false,
        has_visited_base: false,
    };

    assert!(matches!(
        validate_request(&detail),
        Err(DomainError::DepartureNotAfterArrival { .. })
    ));
}

#[test]
fn test_stay_departure_before_arrival_rejected() {
    let detail = RequestDetail::Stay {
        soldier: create_test_soldier("s-1"),
        arrival_date: date!(2025 - 01 - 15),
        departure_date: date!(2025 - 01 - 10),
        base: String::from("North Base"),
        requires_base_approval: false,
        has_visited_base: false,
    };

    assert!(validate_request(&detail).is_err());
}

#[test]
fn test_exchange_requires_distinct_soldiers() {
    let detail = RequestDetail::Exchange {
        incoming: create_test_soldier("s-1"),
        outgoing: create_test_soldier("s-1"),
        arrival_date: date!(2025 - 02 - 01),
        departure_date: date!(2025 - 02 - 10),
        exit_date: date!(2025 - 02 - 02),
        base: String::from("North Base"),
    };

    assert!(matches!(
        validate_request(&detail),
        Err(DomainError::ExchangeSoldiersIdentical { .. })
    ));
}

#[test]
fn test_exchange_with_distinct_soldiers_passes() {
    let detail = RequestDetail::Exchange {
        incoming: create_test_soldier("s-1"),
        outgoing: create_test_soldier("s-2"),
        arrival_date: date!(2025 - 02 - 01),
        departure_date: date!(2025 - 02 - 10),
        exit_date: date!(2025 - 02 - 02),
        base: String::from("North Base"),
    };

    assert!(validate_request(&detail).is_ok());
}

#[test]
fn test_empty_base_rejected() {
    let detail = RequestDetail::Departure {
        soldier: create_test_soldier("s-1"),
        exit_date: date!(2025 - 03 - 01),
        base: String::new(),
    };

    assert!(matches!(
        validate_request(&detail),
        Err(DomainError::InvalidBase(_))
    ));
}
