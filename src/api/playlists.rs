use std::sync::Arc;

use crate::client::Context;
use crate::endpoints;
use crate::error::Result;
use crate::types::{Playlist, PlaylistDetails, PlaylistOptions};

/// Playlist endpoints of the Spotify Web API.
pub struct Playlists {
    ctx: Arc<Context>,
}

impl Playlists {
    pub(crate) fn new(ctx: Arc<Context>) -> Self {
        Playlists { ctx }
    }

    /// Get a playlist owned by a Spotify user.
    ///
    /// `additional_types` widens the track listing to item types beyond
    /// plain tracks (e.g. episodes); `market` restricts item visibility.
    pub async fn get_playlist(
        &self,
        id: &str,
        options: Option<PlaylistOptions>,
    ) -> Result<Playlist> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::playlist(id, options.as_ref()))
            .await
    }

    /// Change a playlist's name and public/private state. The
    /// authenticated application must own the playlist.
    ///
    /// Absent fields are left unchanged on the remote side. Note that
    /// `collaborative` can only be set on non-public playlists.
    pub async fn update_playlist_details(
        &self,
        id: &str,
        details: &PlaylistDetails,
    ) -> Result<()> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .put_no_content(&endpoints::playlist_details(id), details)
            .await
    }
}
