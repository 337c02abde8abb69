use std::sync::Arc;

use crate::client::Context;
use crate::endpoints;
use crate::error::Result;
use crate::types::{Album, MarketOptions, NewReleases, NewReleasesOptions, Page, PageOptions,
    SeveralAlbums, Track};

/// Album endpoints of the Spotify Web API.
pub struct Albums {
    ctx: Arc<Context>,
}

impl Albums {
    pub(crate) fn new(ctx: Arc<Context>) -> Self {
        Albums { ctx }
    }

    /// Get Spotify catalog information for a single album.
    ///
    /// # Arguments
    ///
    /// * `id` - The Spotify ID of the album, e.g. `"4aawyAB9vmqN3uQ7FjRGTy"`
    /// * `options` - Optional `market` restriction
    ///
    /// # Example
    ///
    /// ```
    /// let album = client.albums.get_album("33pt9HBdGlAbRGBHQgsZsU", None).await?;
    /// assert_eq!(album.name, "Evolve");
    /// ```
    pub async fn get_album(&self, id: &str, options: Option<MarketOptions>) -> Result<Album> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx.get(&endpoints::album(id, options.as_ref())).await
    }

    /// Get Spotify catalog information for multiple albums identified by
    /// their Spotify IDs. Maximum: 20 IDs.
    pub async fn get_albums(
        &self,
        ids: &[&str],
        options: Option<MarketOptions>,
    ) -> Result<SeveralAlbums> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::albums(ids, options.as_ref()))
            .await
    }

    /// Get Spotify catalog information about an album's tracks.
    ///
    /// `limit` defaults to 20 on the remote side (minimum 1, maximum 50);
    /// `offset` defaults to 0. Use both together to page through the
    /// listing.
    pub async fn get_tracks(
        &self,
        id: &str,
        options: Option<PageOptions>,
    ) -> Result<Page<Track>> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::album_tracks(id, options.as_ref()))
            .await
    }

    /// Get a list of new album releases featured in Spotify (shown, for
    /// example, on a Spotify player's "Browse" tab).
    pub async fn get_new_releases(
        &self,
        options: Option<NewReleasesOptions>,
    ) -> Result<NewReleases> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::new_releases(options.as_ref()))
            .await
    }
}
