use std::sync::Arc;

use crate::client::Context;
use crate::endpoints;
use crate::error::Result;
use crate::types::User;

/// User endpoints of the Spotify Web API.
pub struct Users {
    ctx: Arc<Context>,
}

impl Users {
    pub(crate) fn new(ctx: Arc<Context>) -> Self {
        Users { ctx }
    }

    /// Get public profile information about a Spotify user.
    pub async fn get_user_profile(&self, id: &str) -> Result<User> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx.get(&endpoints::user(id)).await
    }

    /// Check whether one or more Spotify users follow a specified
    /// playlist. Maximum: 5 user IDs.
    ///
    /// The result has one boolean per user id, in the same order as
    /// `user_ids`.
    pub async fn check_users_follow_playlist(
        &self,
        playlist_id: &str,
        user_ids: &[&str],
    ) -> Result<Vec<bool>> {
        self.ctx.session.ensure_authenticated().await?;
        self.ctx
            .get(&endpoints::users_follow_playlist(playlist_id, user_ids))
            .await
    }
}
