// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while assembling the store.
///
/// Running store actions never return errors; failures there are recorded
/// in the state's error log instead. This type only covers setup work that
/// happens before a store exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Hashing a credential failed.
    CredentialSetup(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CredentialSetup(msg) => write!(f, "Credential setup failed: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}
