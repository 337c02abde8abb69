//! Endpoint defaults and environment lookups.
//!
//! The client talks to two remote bases: the accounts service for the
//! client-credentials exchange and the Web API for everything else. Both
//! default to Spotify's public URLs and can be overridden per client via
//! [`crate::SpotifyClient::with_endpoints`], which the integration tests
//! use to point the client at a local mock server.

use std::env;

/// Base URL of the Spotify Web API.
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// URL of the client-credentials token endpoint.
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Page size applied by the remote API when `limit` is omitted.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Environment variable holding the application client id.
pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";

/// Environment variable holding the application client secret.
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";

/// Reads the client id and secret from the environment.
///
/// Looks up `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` and returns
/// them as a pair, or the name of the first missing variable.
pub fn credentials_from_env() -> Result<(String, String), String> {
    let id = env::var(ENV_CLIENT_ID).map_err(|_| format!("{} must be set", ENV_CLIENT_ID))?;
    let secret =
        env::var(ENV_CLIENT_SECRET).map_err(|_| format!("{} must be set", ENV_CLIENT_SECRET))?;
    Ok((id, secret))
}
