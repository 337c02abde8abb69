use std::sync::Arc;

use crate::client::Context;
use crate::endpoints;
use crate::error::Result;
use crate::types::{BrowseOptions, Categories, Category, PagedPlaylists};

/// Browse endpoints: categories and featured playlists.
pub struct Browse {
    ctx: Arc<Context>,
}

impl Browse {
    pub(crate) fn new(ctx: Arc<Context>) -> Self {
        Browse { ctx }
    }

    /// Get a single category used to tag items in Spotify (on, for
    /// example, the Spotify player's "Browse" tab).
    pub async fn get_category(
        &self,
        id: &str,
        options: Option<BrowseOptions>,
    ) -> Result<Category> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::category(id, options.as_ref()))
            .await
    }

    /// Get the list of categories used to tag items in Spotify.
    pub async fn get_categories(&self, options: Option<BrowseOptions>) -> Result<Categories> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::categories(options.as_ref()))
            .await
    }

    /// Get a list of Spotify playlists tagged with a particular category.
    pub async fn get_category_playlists(
        &self,
        id: &str,
        options: Option<BrowseOptions>,
    ) -> Result<PagedPlaylists> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::category_playlists(id, options.as_ref()))
            .await
    }

    /// Get a list of Spotify featured playlists (shown, for example, on a
    /// Spotify player's "Browse" tab).
    pub async fn get_featured_playlists(
        &self,
        options: Option<BrowseOptions>,
    ) -> Result<PagedPlaylists> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::featured_playlists(options.as_ref()))
            .await
    }
}
