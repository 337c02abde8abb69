//! Request options and response shapes for the Spotify Web API.
//!
//! Response types are read-only projections of the remote JSON. Spotify
//! documents many fields as nullable or omits them depending on the
//! endpoint (simplified vs. full objects), so every field that is not
//! guaranteed on all paths is an `Option`. No invariants are enforced
//! locally; the structs mirror whatever the API returns.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Credential exchange
// ---------------------------------------------------------------------------

/// Body returned by the token endpoint for a client-credentials exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Error envelope the API wraps application-level failures in.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Status and message carried inside [`ErrorEnvelope`].
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Request option types
// ---------------------------------------------------------------------------

/// Album-group filter for an artist's discography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumGroup {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl AlbumGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumGroup::Album => "album",
            AlbumGroup::Single => "single",
            AlbumGroup::AppearsOn => "appears_on",
            AlbumGroup::Compilation => "compilation",
        }
    }
}

/// Item types the search endpoint can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
            SearchType::Show => "show",
            SearchType::Episode => "episode",
        }
    }
}

/// Item types a playlist can carry besides plain tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionalType {
    Track,
    Episode,
}

impl AdditionalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdditionalType::Track => "track",
            AdditionalType::Episode => "episode",
        }
    }
}

/// Tunable audio attribute understood by the recommendations endpoint.
///
/// Each attribute can be constrained with a floor (`min_*`), a ceiling
/// (`max_*`) or a preference (`target_*`) via
/// [`RecommendationOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackAttribute {
    Acousticness,
    Danceability,
    DurationMs,
    Energy,
    Instrumentalness,
    Key,
    Liveness,
    Loudness,
    Mode,
    Popularity,
    Speechiness,
    Tempo,
    TimeSignature,
    Valence,
}

impl TrackAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackAttribute::Acousticness => "acousticness",
            TrackAttribute::Danceability => "danceability",
            TrackAttribute::DurationMs => "duration_ms",
            TrackAttribute::Energy => "energy",
            TrackAttribute::Instrumentalness => "instrumentalness",
            TrackAttribute::Key => "key",
            TrackAttribute::Liveness => "liveness",
            TrackAttribute::Loudness => "loudness",
            TrackAttribute::Mode => "mode",
            TrackAttribute::Popularity => "popularity",
            TrackAttribute::Speechiness => "speechiness",
            TrackAttribute::Tempo => "tempo",
            TrackAttribute::TimeSignature => "time_signature",
            TrackAttribute::Valence => "valence",
        }
    }
}

/// Options accepted by single-resource lookups that only know `market`.
#[derive(Debug, Clone, Default)]
pub struct MarketOptions {
    /// ISO 3166-1 alpha-2 country code. Restricts catalog visibility to
    /// that region; without it the remote API may report items as
    /// unavailable.
    pub market: Option<String>,
}

/// Options for paged listings (`limit` 1-50, remote default 20; `offset`
/// default 0).
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub market: Option<String>,
}

/// Options for the new-releases listing. Uses `country` instead of
/// `market`, matching the remote parameter name.
#[derive(Debug, Clone, Default)]
pub struct NewReleasesOptions {
    pub country: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Options for an artist's album listing.
#[derive(Debug, Clone, Default)]
pub struct ArtistAlbumsOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Filters the listing to the given groups, comma-joined. All groups
    /// are returned when absent.
    pub include_groups: Option<Vec<AlbumGroup>>,
    pub market: Option<String>,
}

/// Seeds and tunables for the recommendations endpoint.
///
/// At most five seed values may be supplied across `seed_artists`,
/// `seed_genres` and `seed_tracks` combined; the remote API rejects
/// requests exceeding that.
#[derive(Debug, Clone, Default)]
pub struct RecommendationOptions {
    pub seed_artists: Option<Vec<String>>,
    pub seed_genres: Option<Vec<String>>,
    pub seed_tracks: Option<Vec<String>>,
    pub limit: Option<u32>,
    pub market: Option<String>,
    /// Hard floors, emitted as `min_<attribute>=<value>`.
    pub min: Vec<(TrackAttribute, f64)>,
    /// Hard ceilings, emitted as `max_<attribute>=<value>`.
    pub max: Vec<(TrackAttribute, f64)>,
    /// Preferred values, emitted as `target_<attribute>=<value>`.
    pub target: Vec<(TrackAttribute, f64)>,
}

/// Options for fetching a playlist.
#[derive(Debug, Clone, Default)]
pub struct PlaylistOptions {
    pub additional_types: Option<Vec<AdditionalType>>,
    pub market: Option<String>,
}

/// Options for the search endpoint.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Set to `"audio"` to include externally hosted audio content.
    pub include_external: Option<String>,
    /// Applied per item type, not to the total response.
    pub limit: Option<u32>,
    pub market: Option<String>,
    pub offset: Option<u32>,
}

/// Options for category and featured-playlist browsing.
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    pub country: Option<String>,
    /// ISO 639-1 language code joined with an ISO 3166-1 alpha-2 country
    /// code, e.g. `en_US`.
    pub locale: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// PUT body for changing a playlist's details. Absent fields are left
/// unchanged on the remote side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Only accepted on non-public playlists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub href: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restrictions {
    pub reason: Option<String>,
}

/// One page of a paged listing. The remote API wraps every collection in
/// this envelope; `next`/`previous` are ready-made URLs or null at the
/// ends of the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub href: Option<String>,
    pub items: Vec<T>,
    pub limit: Option<u32>,
    pub next: Option<String>,
    pub offset: Option<u32>,
    pub previous: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub external_urls: Option<ExternalUrls>,
    pub followers: Option<Followers>,
    pub genres: Option<Vec<String>>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub popularity: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Option<Vec<Artist>>,
    pub album: Option<Album>,
    pub available_markets: Option<Vec<String>>,
    pub disc_number: Option<u32>,
    pub duration_ms: Option<u64>,
    pub explicit: Option<bool>,
    pub external_urls: Option<ExternalUrls>,
    pub href: Option<String>,
    pub is_local: Option<bool>,
    pub preview_url: Option<String>,
    pub track_number: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub album_type: Option<String>,
    pub total_tracks: Option<u32>,
    pub available_markets: Option<Vec<String>>,
    pub external_urls: Option<ExternalUrls>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub release_date: Option<String>,
    /// `"day"`, `"month"` or `"year"`.
    pub release_date_precision: Option<String>,
    pub restrictions: Option<Restrictions>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
    pub artists: Option<Vec<Artist>>,
    /// Only present on full album objects.
    pub tracks: Option<Page<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralAlbums {
    pub albums: Vec<Album>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtists {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralTracks {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReleases {
    pub albums: Page<Album>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub followers: Option<Followers>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

/// Entry of a playlist's track listing; `track` is null for items the
/// market filter removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub collaborative: Option<bool>,
    pub description: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub owner: Option<User>,
    pub public: Option<bool>,
    pub snapshot_id: Option<String>,
    pub tracks: Option<Page<PlaylistItem>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

/// Per-type result pages of a search. Only the pages matching the
/// requested types are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub albums: Option<Page<Album>>,
    pub artists: Option<Page<Artist>>,
    pub tracks: Option<Page<Track>>,
    pub playlists: Option<Page<Playlist>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSeed {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub href: Option<String>,
    #[serde(rename = "initialPoolSize")]
    pub initial_pool_size: Option<u64>,
    #[serde(rename = "afterFilteringSize")]
    pub after_filtering_size: Option<u64>,
    #[serde(rename = "afterRelinkingSize")]
    pub after_relinking_size: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub seeds: Vec<RecommendationSeed>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub href: Option<String>,
    pub icons: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Categories {
    pub categories: Page<Category>,
}

/// Paged playlists nested under `playlists`, as returned by the category
/// and featured-playlist listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedPlaylists {
    pub message: Option<String>,
    pub playlists: Page<Playlist>,
}
