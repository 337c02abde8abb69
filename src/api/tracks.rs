use std::sync::Arc;

use crate::client::Context;
use crate::endpoints;
use crate::error::Result;
use crate::types::{MarketOptions, SeveralTracks, Track};

/// Track endpoints of the Spotify Web API.
pub struct Tracks {
    ctx: Arc<Context>,
}

impl Tracks {
    pub(crate) fn new(ctx: Arc<Context>) -> Self {
        Tracks { ctx }
    }

    /// Get Spotify catalog information for a single track identified by
    /// its unique Spotify ID.
    pub async fn get_track(&self, id: &str, options: Option<MarketOptions>) -> Result<Track> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx.get(&endpoints::track(id, options.as_ref())).await
    }

    /// Get Spotify catalog information for multiple tracks based on their
    /// Spotify IDs. Maximum: 50 IDs.
    pub async fn get_tracks(
        &self,
        ids: &[&str],
        options: Option<MarketOptions>,
    ) -> Result<SeveralTracks> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::tracks(ids, options.as_ref()))
            .await
    }
}
