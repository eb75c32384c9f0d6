// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential checking for console operators.
//!
//! A stand-in for an external identity collaborator: a static list of
//! operator credentials, hashed with bcrypt at construction time. Nothing
//! here issues sessions or tokens; the store's auth flag is the session.

use tracing::warn;

use crate::error::CoreError;

/// A single operator credential.
#[derive(Debug, Clone)]
struct Credential {
    /// The operator's login name.
    username: String,
    /// The bcrypt hash of the operator's password.
    password_hash: String,
}

/// A static list of operator credentials.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    /// All known credentials.
    credentials: Vec<Credential>,
}

impl CredentialStore {
    /// Builds a credential store from plain-text pairs, hashing each
    /// password with bcrypt.
    ///
    /// # Arguments
    ///
    /// * `pairs` - `(username, password)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if a password cannot be hashed.
    pub fn from_plain(pairs: &[(&str, &str)]) -> Result<Self, CoreError> {
        let mut credentials: Vec<Credential> = Vec::with_capacity(pairs.len());
        for (username, password) in pairs {
            let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
                .map_err(|e| CoreError::CredentialSetup(format!("Failed to hash password: {e}")))?;
            credentials.push(Credential {
                username: (*username).to_string(),
                password_hash,
            });
        }
        Ok(Self { credentials })
    }

    /// Builds the console's stock credential list.
    ///
    /// # Errors
    ///
    /// Returns an error if a password cannot be hashed.
    pub fn with_defaults() -> Result<Self, CoreError> {
        Self::from_plain(&[("user1", "1234"), ("user2", "1234")])
    }

    /// Checks a username/password pair against the list.
    ///
    /// A verification failure inside bcrypt (malformed hash) is treated as
    /// a mismatch and logged, never propagated.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.credentials
            .iter()
            .filter(|credential| credential.username == username)
            .any(|credential| {
                bcrypt::verify(password, &credential.password_hash).unwrap_or_else(|e| {
                    warn!("Failed to verify password hash: {e}");
                    false
                })
            })
    }
}
