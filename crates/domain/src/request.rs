// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Visit-request records and approval status.
//!
//! A request is one explicit sum type discriminated by its submitting type.
//! Consumers switch exhaustively on the discriminant; no code may infer the
//! variant from incidental field presence.

use crate::error::DomainError;
use crate::types::Soldier;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Approval status of a request.
///
/// Every request starts pending. All transitions between the three states
/// are legal in both directions; approvals are correctable decisions, not
/// one-way gates, so no state is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting review.
    #[default]
    Pending,
    /// Reviewed and accepted.
    Approved,
    /// Reviewed and declined.
    Rejected,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The variant-specific body of a request, discriminated by submitting type.
///
/// Soldier references are denormalized: each request carries a copy of the
/// soldier record(s) as they stood at submission time, so a request remains
/// readable after the roster changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "submitting_type", rename_all = "snake_case")]
pub enum RequestDetail {
    /// A single-day visit to a base.
    DayVisit {
        /// The visiting soldier.
        soldier: Soldier,
        /// The arrival date.
        arrival_date: Date,
        /// The base being visited.
        base: String,
        /// Whether the base demands its own approval for this visit.
        requires_base_approval: bool,
        /// Whether the soldier has been at this base before.
        has_visited_base: bool,
    },
    /// A multi-day stay with lodging.
    Stay {
        /// The staying soldier.
        soldier: Soldier,
        /// The arrival date.
        arrival_date: Date,
        /// The departure date; strictly after the arrival date.
        departure_date: Date,
        /// The base being visited.
        base: String,
        /// Whether the base demands its own approval for this stay.
        requires_base_approval: bool,
        /// Whether the soldier has been at this base before.
        has_visited_base: bool,
    },
    /// One soldier replacing another on base.
    Exchange {
        /// The soldier coming onto the base.
        incoming: Soldier,
        /// The soldier leaving the base.
        outgoing: Soldier,
        /// Arrival date of the incoming soldier.
        arrival_date: Date,
        /// Departure date of the incoming soldier; strictly after arrival.
        departure_date: Date,
        /// The date the outgoing soldier exits the base.
        exit_date: Date,
        /// The base where the exchange happens.
        base: String,
    },
    /// A soldier departing a base for good.
    Departure {
        /// The departing soldier.
        soldier: Soldier,
        /// The date the soldier exits the base.
        exit_date: Date,
        /// The base being left.
        base: String,
    },
}

impl RequestDetail {
    /// Returns the submitting-type discriminant as a string.
    #[must_use]
    pub const fn submitting_type(&self) -> &'static str {
        match self {
            Self::DayVisit { .. } => "day_visit",
            Self::Stay { .. } => "stay",
            Self::Exchange { .. } => "exchange",
            Self::Departure { .. } => "departure",
        }
    }

    /// Returns the base this request concerns.
    #[must_use]
    pub fn base(&self) -> &str {
        match self {
            Self::DayVisit { base, .. }
            | Self::Stay { base, .. }
            | Self::Exchange { base, .. }
            | Self::Departure { base, .. } => base,
        }
    }

    /// Returns every soldier reference this variant carries.
    ///
    /// Exchanges yield both participants; all other variants yield one.
    #[must_use]
    pub fn soldiers(&self) -> Vec<&Soldier> {
        match self {
            Self::DayVisit { soldier, .. }
            | Self::Stay { soldier, .. }
            | Self::Departure { soldier, .. } => vec![soldier],
            Self::Exchange {
                incoming, outgoing, ..
            } => vec![incoming, outgoing],
        }
    }

    /// Returns the materialized stay duration in days, for stay requests.
    #[must_use]
    pub fn stay_duration(&self) -> Option<i64> {
        match self {
            Self::Stay {
                arrival_date,
                departure_date,
                ..
            } => Some(stay_duration_days(*arrival_date, *departure_date)),
            _ => None,
        }
    }
}

/// Computes the length of a stay in whole days.
///
/// A stay arriving 2025-01-10 and departing 2025-01-15 lasts 5 days.
#[must_use]
pub fn stay_duration_days(arrival: Date, departure: Date) -> i64 {
    (departure - arrival).whole_days()
}

/// A submitted visit request.
///
/// The envelope fields are stamped by the store at submission time. Once
/// created, only `status` is ever updated; every other field is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Canonical identifier (opaque, stable, immutable).
    pub id: String,
    /// When the request was submitted.
    pub created_at: OffsetDateTime,
    /// The authenticated user who submitted the request.
    pub created_by: String,
    /// Approval status; the only mutable field after creation.
    pub status: RequestStatus,
    /// The variant-specific body.
    #[serde(flatten)]
    pub detail: RequestDetail,
}

impl Request {
    /// Creates a freshly submitted request.
    ///
    /// The status always starts pending, regardless of anything status-like
    /// the submitting payload may have carried.
    #[must_use]
    pub const fn new(
        id: String,
        created_at: OffsetDateTime,
        created_by: String,
        detail: RequestDetail,
    ) -> Self {
        Self {
            id,
            created_at,
            created_by,
            status: RequestStatus::Pending,
            detail,
        }
    }
}
