//! Pure URL builders for the Web API resource families.
//!
//! Every function maps (resource id, options) to a path-and-query string
//! relative to the API base; the dispatcher prefixes the base when the
//! request goes out. Absent optional parameters are omitted from the query
//! entirely, list values are comma-joined, and all values are
//! percent-encoded. Nothing here performs I/O.

use crate::types::{
    AdditionalType, ArtistAlbumsOptions, BrowseOptions, MarketOptions, NewReleasesOptions,
    PageOptions, PlaylistOptions, RecommendationOptions, SearchType, TrackAttribute,
};

/// Accumulates query pairs and renders them onto a path.
///
/// Values are percent-encoded at insertion; list elements are encoded
/// individually and joined with a literal comma, which is what the remote
/// API expects for multi-id parameters.
#[derive(Default)]
struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    fn new() -> Self {
        Query::default()
    }

    fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs
            .push((key.into(), urlencoding::encode(&value.to_string()).into_owned()));
    }

    fn push_opt(&mut self, key: &str, value: Option<impl ToString>) {
        if let Some(v) = value {
            let v = v.to_string();
            if !v.is_empty() {
                self.push(key, v);
            }
        }
    }

    /// Comma-joins `values`; the key is omitted when the list is empty.
    fn push_list<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| urlencoding::encode(v.as_ref()).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.pairs.push((key.to_string(), joined));
        }
    }

    fn build(self, path: String) -> String {
        if self.pairs.is_empty() {
            return path;
        }
        let query = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", path, query)
    }
}

fn attribute_bounds(query: &mut Query, prefix: &str, bounds: &[(TrackAttribute, f64)]) {
    for (attr, value) in bounds {
        query.push(format!("{}_{}", prefix, attr.as_str()), value);
    }
}

// ---------------------------------------------------------------------------
// Albums
// ---------------------------------------------------------------------------

/// `/albums/{id}`
pub fn album(id: &str, options: Option<&MarketOptions>) -> String {
    let mut q = Query::new();
    q.push_opt("market", options.and_then(|o| o.market.as_deref()));
    q.build(format!("/albums/{}", id))
}

/// `/albums?ids=...` (maximum 20 ids)
pub fn albums(ids: &[&str], options: Option<&MarketOptions>) -> String {
    let mut q = Query::new();
    q.push_list("ids", ids);
    q.push_opt("market", options.and_then(|o| o.market.as_deref()));
    q.build("/albums".to_string())
}

/// `/albums/{id}/tracks`
pub fn album_tracks(id: &str, options: Option<&PageOptions>) -> String {
    let mut q = Query::new();
    q.push_opt("limit", options.and_then(|o| o.limit));
    q.push_opt("offset", options.and_then(|o| o.offset));
    q.push_opt("market", options.and_then(|o| o.market.as_deref()));
    q.build(format!("/albums/{}/tracks", id))
}

/// `/browse/new-releases`
pub fn new_releases(options: Option<&NewReleasesOptions>) -> String {
    let mut q = Query::new();
    q.push_opt("country", options.and_then(|o| o.country.as_deref()));
    q.push_opt("limit", options.and_then(|o| o.limit));
    q.push_opt("offset", options.and_then(|o| o.offset));
    q.build("/browse/new-releases".to_string())
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

/// `/artists/{id}`
pub fn artist(id: &str) -> String {
    format!("/artists/{}", id)
}

/// `/artists?ids=...` (maximum 50 ids)
pub fn artists(ids: &[&str]) -> String {
    let mut q = Query::new();
    q.push_list("ids", ids);
    q.build("/artists".to_string())
}

/// `/artists/{id}/albums`
pub fn artist_albums(id: &str, options: Option<&ArtistAlbumsOptions>) -> String {
    let mut q = Query::new();
    if let Some(groups) = options.and_then(|o| o.include_groups.as_ref()) {
        q.push_list("include_groups", groups.iter().map(|g| g.as_str()));
    }
    q.push_opt("limit", options.and_then(|o| o.limit));
    q.push_opt("offset", options.and_then(|o| o.offset));
    q.push_opt("market", options.and_then(|o| o.market.as_deref()));
    q.build(format!("/artists/{}/albums", id))
}

/// `/artists/{id}/top-tracks?country=...`
pub fn artist_top_tracks(id: &str, country: &str) -> String {
    let mut q = Query::new();
    q.push("country", country);
    q.build(format!("/artists/{}/top-tracks", id))
}

/// `/artists/{id}/related-artists`
pub fn related_artists(id: &str) -> String {
    format!("/artists/{}/related-artists", id)
}

/// `/recommendations`
pub fn recommendations(options: Option<&RecommendationOptions>) -> String {
    let mut q = Query::new();
    if let Some(o) = options {
        if let Some(seeds) = &o.seed_artists {
            q.push_list("seed_artists", seeds);
        }
        if let Some(seeds) = &o.seed_genres {
            q.push_list("seed_genres", seeds);
        }
        if let Some(seeds) = &o.seed_tracks {
            q.push_list("seed_tracks", seeds);
        }
        q.push_opt("limit", o.limit);
        q.push_opt("market", o.market.as_deref());
        attribute_bounds(&mut q, "min", &o.min);
        attribute_bounds(&mut q, "max", &o.max);
        attribute_bounds(&mut q, "target", &o.target);
    }
    q.build("/recommendations".to_string())
}

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

/// `/tracks/{id}`
pub fn track(id: &str, options: Option<&MarketOptions>) -> String {
    let mut q = Query::new();
    q.push_opt("market", options.and_then(|o| o.market.as_deref()));
    q.build(format!("/tracks/{}", id))
}

/// `/tracks?ids=...` (maximum 50 ids)
pub fn tracks(ids: &[&str], options: Option<&MarketOptions>) -> String {
    let mut q = Query::new();
    q.push_list("ids", ids);
    q.push_opt("market", options.and_then(|o| o.market.as_deref()));
    q.build("/tracks".to_string())
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

/// `/playlists/{id}`
pub fn playlist(id: &str, options: Option<&PlaylistOptions>) -> String {
    let mut q = Query::new();
    if let Some(types) = options.and_then(|o| o.additional_types.as_ref()) {
        q.push_list(
            "additional_types",
            types.iter().map(AdditionalType::as_str),
        );
    }
    q.push_opt("market", options.and_then(|o| o.market.as_deref()));
    q.build(format!("/playlists/{}", id))
}

/// `/playlists/{id}` (PUT target for detail updates)
pub fn playlist_details(id: &str) -> String {
    format!("/playlists/{}", id)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// `/search?q=...&type=...`
pub fn search(
    query: &str,
    types: &[SearchType],
    options: Option<&crate::types::SearchOptions>,
) -> String {
    let mut q = Query::new();
    q.push("q", query);
    q.push_list("type", types.iter().map(SearchType::as_str));
    q.push_opt(
        "include_external",
        options.and_then(|o| o.include_external.as_deref()),
    );
    q.push_opt("limit", options.and_then(|o| o.limit));
    q.push_opt("offset", options.and_then(|o| o.offset));
    q.push_opt("market", options.and_then(|o| o.market.as_deref()));
    q.build("/search".to_string())
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// `/users/{id}`
pub fn user(id: &str) -> String {
    format!("/users/{}", id)
}

/// `/playlists/{id}/followers/contains?ids=...` (maximum 5 ids)
pub fn users_follow_playlist(playlist_id: &str, user_ids: &[&str]) -> String {
    let mut q = Query::new();
    q.push_list("ids", user_ids);
    q.build(format!("/playlists/{}/followers/contains", playlist_id))
}

// ---------------------------------------------------------------------------
// Browse
// ---------------------------------------------------------------------------

/// `/browse/categories/{id}`
pub fn category(id: &str, options: Option<&BrowseOptions>) -> String {
    let mut q = Query::new();
    q.push_opt("country", options.and_then(|o| o.country.as_deref()));
    q.push_opt("locale", options.and_then(|o| o.locale.as_deref()));
    q.build(format!("/browse/categories/{}", id))
}

/// `/browse/categories`
pub fn categories(options: Option<&BrowseOptions>) -> String {
    let mut q = Query::new();
    q.push_opt("country", options.and_then(|o| o.country.as_deref()));
    q.push_opt("locale", options.and_then(|o| o.locale.as_deref()));
    q.push_opt("limit", options.and_then(|o| o.limit));
    q.push_opt("offset", options.and_then(|o| o.offset));
    q.build("/browse/categories".to_string())
}

/// `/browse/categories/{id}/playlists`
pub fn category_playlists(id: &str, options: Option<&BrowseOptions>) -> String {
    let mut q = Query::new();
    q.push_opt("country", options.and_then(|o| o.country.as_deref()));
    q.push_opt("limit", options.and_then(|o| o.limit));
    q.push_opt("offset", options.and_then(|o| o.offset));
    q.build(format!("/browse/categories/{}/playlists", id))
}

/// `/browse/featured-playlists`
pub fn featured_playlists(options: Option<&BrowseOptions>) -> String {
    let mut q = Query::new();
    q.push_opt("locale", options.and_then(|o| o.locale.as_deref()));
    q.push_opt("country", options.and_then(|o| o.country.as_deref()));
    q.push_opt("limit", options.and_then(|o| o.limit));
    q.push_opt("offset", options.and_then(|o| o.offset));
    q.build("/browse/featured-playlists".to_string())
}
