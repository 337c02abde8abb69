//! Error types returned by the client.
//!
//! Every fallible operation in this crate resolves to [`crate::Result`],
//! which carries one of the variants below. The taxonomy separates local
//! precondition failures from remote rejections so callers can branch on
//! what actually went wrong:
//!
//! - [`Error::Authentication`] - the credential exchange itself failed
//!   (bad client id/secret, token endpoint outage). Fatal to the call that
//!   triggered it, not to the client.
//! - [`Error::NotAuthenticated`] - a request was dispatched while no token
//!   was held. Always avoidable; facade methods authenticate on demand.
//! - [`Error::Api`] - the Spotify API accepted the request but reported an
//!   application-level error (unknown id, validation failure, rate limit).
//! - [`Error::Transport`] - the request never produced a usable response
//!   (DNS, TLS, timeout, connection reset). The client performs no
//!   automatic retries; retrying is at the caller's discretion.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the Spotify client.
#[derive(Error, Debug)]
pub enum Error {
    /// The client-credentials exchange was rejected or returned a
    /// malformed body. Any previously held token is left untouched.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A request was dispatched before any token was acquired.
    #[error("no token has been acquired yet; call login() first")]
    NotAuthenticated,

    /// The Spotify API returned an error envelope.
    #[error("Spotify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request failed below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// True when the error indicates invalid or missing credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::NotAuthenticated)
    }
}
