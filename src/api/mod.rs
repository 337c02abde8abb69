//! # Resource Facades
//!
//! One facade per Spotify Web API resource family, each a thin typed
//! wrapper over the shared dispatcher. Every method follows the same
//! shape: ensure a token is held (logging in on demand), build the URL
//! with the pure builders in [`crate::endpoints`], dispatch, and hand the
//! deserialized body back to the caller.
//!
//! ## Facades
//!
//! - [`Albums`] - single/several albums, album tracks, new releases
//! - [`Artists`] - single/several artists, discographies, related
//!   artists, recommendations
//! - [`Browse`] - categories and featured playlists
//! - [`Playlists`] - playlist lookup and detail updates
//! - [`Search`] - keyword search across item types
//! - [`Tracks`] - single/several tracks
//! - [`Users`] - public profiles and playlist-follower checks
//!
//! Facades hold no state of their own beyond the shared context; they can
//! be used concurrently from multiple tasks.

mod albums;
mod artists;
mod browse;
mod playlists;
mod search;
mod tracks;
mod users;

pub use albums::Albums;
pub use artists::Artists;
pub use browse::Browse;
pub use playlists::Playlists;
pub use search::Search;
pub use tracks::Tracks;
pub use users::Users;
