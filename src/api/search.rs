use std::sync::Arc;

use crate::client::Context;
use crate::endpoints;
use crate::error::Result;
use crate::types::{SearchOptions, SearchResults, SearchType};

/// The search endpoint of the Spotify Web API.
pub struct Search {
    ctx: Arc<Context>,
}

impl Search {
    pub(crate) fn new(ctx: Arc<Context>) -> Self {
        Search { ctx }
    }

    /// Get catalog information about albums, artists, playlists or tracks
    /// that match a keyword string.
    ///
    /// # Arguments
    ///
    /// * `query` - Search keywords, optionally with field filters such as
    ///   `"name:abacab"`
    /// * `types` - Item types to search across; results include hits from
    ///   all of them
    /// * `options` - Paging and filtering; note that `limit` applies per
    ///   item type, not to the total response
    ///
    /// # Example
    ///
    /// ```
    /// use spotweb::types::{SearchOptions, SearchType};
    ///
    /// let results = client
    ///     .search
    ///     .search("natural", &[SearchType::Track], Some(SearchOptions {
    ///         limit: Some(1),
    ///         ..Default::default()
    ///     }))
    ///     .await?;
    /// ```
    pub async fn search(
        &self,
        query: &str,
        types: &[SearchType],
        options: Option<SearchOptions>,
    ) -> Result<SearchResults> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::search(query, types, options.as_ref()))
            .await
    }
}
