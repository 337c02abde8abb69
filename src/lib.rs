//! Spotify Web API Client Library
//!
//! This library provides a typed async client for the Spotify Web API
//! using the two-legged client-credentials flow: an application id/secret
//! pair is exchanged for a time-limited bearer token which the client
//! attaches to every request and refreshes in the background before it
//! lapses. Calling code never touches the token.
//!
//! # Modules
//!
//! - `api` - per-resource facades (albums, artists, browse, playlists,
//!   search, tracks, users)
//! - `client` - the [`SpotifyClient`] surface and the request dispatcher
//! - `config` - endpoint defaults and environment lookups
//! - `endpoints` - pure URL builders per resource family
//! - `error` - the error taxonomy
//! - `session` - token acquisition, renewal and teardown
//! - `types` - request options and response shapes
//!
//! # Example
//!
//! ```
//! use spotweb::SpotifyClient;
//!
//! #[tokio::main]
//! async fn main() -> spotweb::Result<()> {
//!     let client = SpotifyClient::new("client-id", "client-secret");
//!
//!     // Facade calls authenticate on demand; an explicit login() is
//!     // only needed to surface credential problems early.
//!     let album = client.albums.get_album("33pt9HBdGlAbRGBHQgsZsU", None).await?;
//!     println!("{}", album.name);
//!
//!     client.destroy();
//!     Ok(())
//! }
//! ```
//!
//! The client performs no caching, no automatic retries of resource
//! requests and no pagination on its own; `next`/`previous` URLs in the
//! paged responses are handed back to the caller verbatim.

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod session;
pub mod types;

pub use client::SpotifyClient;
pub use error::{Error, Result};
pub use session::{Credential, RenewalErrorHook, SessionManager};
