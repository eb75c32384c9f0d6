// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Soldier full name is empty or invalid.
    InvalidName(String),
    /// Soldier military identifier is empty or invalid.
    InvalidMilitaryId(String),
    /// Soldier national identifier is empty or invalid.
    InvalidNationalId(String),
    /// Gender string is not recognized.
    InvalidGender(String),
    /// Service type string is not recognized.
    InvalidServiceType(String),
    /// Request status string is not recognized.
    InvalidStatus(String),
    /// Base name is empty or invalid.
    InvalidBase(String),
    /// A stay's departure date is not strictly after its arrival date.
    DepartureNotAfterArrival {
        /// The arrival date.
        arrival: Date,
        /// The offending departure date.
        departure: Date,
    },
    /// An exchange names the same soldier as both incoming and outgoing.
    ExchangeSoldiersIdentical {
        /// The duplicated soldier id.
        soldier_id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidMilitaryId(msg) => write!(f, "Invalid military id: {msg}"),
            Self::InvalidNationalId(msg) => write!(f, "Invalid national id: {msg}"),
            Self::InvalidGender(msg) => write!(f, "Invalid gender: {msg}"),
            Self::InvalidServiceType(msg) => write!(f, "Invalid service type: {msg}"),
            Self::InvalidStatus(msg) => write!(f, "Invalid request status: {msg}"),
            Self::InvalidBase(msg) => write!(f, "Invalid base: {msg}"),
            Self::DepartureNotAfterArrival { arrival, departure } => {
                write!(
                    f,
                    "Departure date {departure} must be strictly after arrival date {arrival}"
                )
            }
            Self::ExchangeSoldiersIdentical { soldier_id } => {
                write!(
                    f,
                    "Exchange requires two distinct soldiers, got '{soldier_id}' twice"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
