/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use reqwest::StatusCode;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImmichError {
    /// Transport-level failure: connection refused, DNS failure, timeout,
    /// TLS handshake failure. Carries the underlying error for diagnostics.
    #[error("Error connecting to the API")]
    CannotConnect(#[source] reqwest::Error),

    /// The server rejected the configured credential. Never produced by the
    /// hub itself ([`crate::Hub::authenticate`] returns a boolean instead);
    /// reserved for callers that decide a `false` result means bad auth.
    #[error("Invalid authentication credentials")]
    InvalidAuth,

    /// The server answered a data-fetching operation with a non-success
    /// status. The response body is logged before this is returned.
    #[error("API returned status {0}")]
    Api(StatusCode),

    /// A success response carried a body that does not match the endpoint's
    /// documented shape.
    #[error("Malformed API response")]
    Decode(#[from] serde_json::Error),

    #[error("URL parse error")]
    UrlParse(#[from] url::ParseError),
}
