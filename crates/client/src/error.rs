// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors surfaced by the remote API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (connection refused,
    /// timeout, malformed payload).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("Remote returned status {status} for {context}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The operation that failed (method and resource).
        context: String,
    },
}
