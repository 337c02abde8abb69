use std::sync::Arc;

use crate::client::Context;
use crate::endpoints;
use crate::error::Result;
use crate::types::{
    Album, Artist, ArtistAlbumsOptions, Page, RecommendationOptions, Recommendations,
    SeveralArtists, SeveralTracks,
};

/// Artist endpoints of the Spotify Web API.
pub struct Artists {
    ctx: Arc<Context>,
}

impl Artists {
    pub(crate) fn new(ctx: Arc<Context>) -> Self {
        Artists { ctx }
    }

    /// Get Spotify catalog information for a single artist identified by
    /// their unique Spotify ID.
    pub async fn get_artist(&self, id: &str) -> Result<Artist> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx.get(&endpoints::artist(id)).await
    }

    /// Get Spotify catalog information for several artists based on their
    /// Spotify IDs. Maximum: 50 IDs.
    pub async fn get_artists(&self, ids: &[&str]) -> Result<SeveralArtists> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx.get(&endpoints::artists(ids)).await
    }

    /// Get Spotify catalog information about an artist's albums.
    ///
    /// `include_groups` filters the listing to the given release groups;
    /// all groups are returned when absent. `limit`/`offset` page through
    /// the discography (remote default 20, maximum 50).
    pub async fn get_artist_albums(
        &self,
        id: &str,
        options: Option<ArtistAlbumsOptions>,
    ) -> Result<Page<Album>> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::artist_albums(id, options.as_ref()))
            .await
    }

    /// Get Spotify catalog information about an artist's top tracks in a
    /// given country (ISO 3166-1 alpha-2 code).
    pub async fn get_artist_top_tracks(
        &self,
        id: &str,
        country: &str,
    ) -> Result<SeveralTracks> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::artist_top_tracks(id, country))
            .await
    }

    /// Get Spotify catalog information about artists similar to a given
    /// artist. Similarity is based on analysis of the Spotify community's
    /// listening history.
    pub async fn get_related_artists(&self, id: &str) -> Result<SeveralArtists> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx.get(&endpoints::related_artists(id)).await
    }

    /// Get recommended tracks for a set of seed artists, genres and
    /// tracks.
    ///
    /// Up to 5 seed values may be provided across `seed_artists`,
    /// `seed_genres` and `seed_tracks` combined. Tunable audio attributes
    /// can constrain the result via the `min`/`max`/`target` fields of
    /// [`RecommendationOptions`]; for very new or obscure seeds there may
    /// not be enough data to fill the requested list.
    pub async fn get_recommendations(
        &self,
        options: Option<RecommendationOptions>,
    ) -> Result<Recommendations> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::recommendations(options.as_ref()))
            .await
    }
}
