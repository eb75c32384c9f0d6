// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::request::RequestDetail;
use crate::types::NewSoldier;

/// Validates that a new soldier's basic field constraints are met.
///
/// This function checks that required fields are not empty.
/// It does NOT check for id uniqueness (that requires collection context,
/// which belongs to the store).
///
/// # Arguments
///
/// * `soldier` - The soldier payload to validate
///
/// # Returns
///
/// * `Ok(())` if the payload is valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The full name is empty
/// - The military identifier is empty
/// - The national identifier is empty
pub fn validate_new_soldier(soldier: &NewSoldier) -> Result<(), DomainError> {
    // Rule: full name must not be empty
    if soldier.full_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Full name cannot be empty",
        )));
    }

    // Rule: military id must not be empty
    if soldier.military_id.trim().is_empty() {
        return Err(DomainError::InvalidMilitaryId(String::from(
            "Military id cannot be empty",
        )));
    }

    // Rule: national id must not be empty
    if soldier.national_id.trim().is_empty() {
        return Err(DomainError::InvalidNationalId(String::from(
            "National id cannot be empty",
        )));
    }

    Ok(())
}

/// Validates a request payload at the form boundary, before it reaches the
/// store.
///
/// This function is pure, deterministic, and has no side effects. The store
/// itself does not re-run these rules; callers submitting a payload are
/// responsible for validating it first.
///
/// # Arguments
///
/// * `detail` - The request body to validate
///
/// # Returns
///
/// * `Ok(())` if the payload is valid
/// * `Err(DomainError)` if a rule is violated
///
/// # Errors
///
/// Returns an error if:
/// - The base name is empty
/// - A stay's departure date is not strictly after its arrival date
/// - An exchange's incoming stay has a departure date not strictly after
///   its arrival date
/// - An exchange names the same soldier on both sides
pub fn validate_request(detail: &RequestDetail) -> Result<(), DomainError> {
    if detail.base().trim().is_empty() {
        return Err(DomainError::InvalidBase(String::from(
            "Base cannot be empty",
        )));
    }

    match detail {
        RequestDetail::Stay {
            arrival_date,
            departure_date,
            ..
        } => {
            if departure_date <= arrival_date {
                return Err(DomainError::DepartureNotAfterArrival {
                    arrival: *arrival_date,
                    departure: *departure_date,
                });
            }
        }
        RequestDetail::Exchange {
            incoming,
            outgoing,
            arrival_date,
            departure_date,
            ..
        } => {
            if departure_date <= arrival_date {
                return Err(DomainError::DepartureNotAfterArrival {
                    arrival: *arrival_date,
                    departure: *departure_date,
                });
            }
            if incoming.id == outgoing.id {
                return Err(DomainError::ExchangeSoldiersIdentical {
                    soldier_id: incoming.id.clone(),
                });
            }
        }
        RequestDetail::DayVisit { .. } | RequestDetail::Departure { .. } => {}
    }

    Ok(())
}
