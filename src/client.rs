//! The client object and the request dispatcher.
//!
//! [`SpotifyClient`] is the library surface handed to application code: it
//! owns the session manager and exposes one facade per resource family.
//! The dispatcher lives on the shared [`Context`] and does exactly one
//! thing per call: attach the current bearer token to an outbound request
//! and normalize the outcome into [`crate::Result`].

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{Albums, Artists, Browse, Playlists, Search, Tracks, Users};
use crate::config;
use crate::error::{Error, Result};
use crate::session::{RenewalErrorHook, SessionManager};
use crate::types::ErrorEnvelope;

/// Shared state behind every facade: the session, the HTTP client and the
/// API base the built paths are resolved against.
pub(crate) struct Context {
    pub(crate) session: SessionManager,
    http: reqwest::Client,
    api_base: String,
}

impl Context {
    /// Dispatches a GET and deserializes the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, HeaderMap::new(), None::<&()>)
            .await
    }

    /// Dispatches a PUT with a JSON body, expecting no response content.
    pub(crate) async fn put_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::PUT, path, HeaderMap::new(), Some(body))
            .await
            .map(|_| ())
    }

    /// Dispatches a request and deserializes the JSON body. An
    /// undecodable success body surfaces as [`Error::Api`] carrying the
    /// HTTP status.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<&impl Serialize>,
    ) -> Result<T> {
        let (status, bytes) = self.send(method, path, headers, body).await?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Api {
            status: status.as_u16(),
            message: format!("failed to decode response body: {}", e),
        })
    }

    /// Issues one HTTP request with the current bearer token attached and
    /// maps the outcome; all dispatch paths funnel through here.
    ///
    /// Fails fast with [`Error::NotAuthenticated`] when no token is held;
    /// this is a local precondition check, not a network call. Caller
    /// headers are merged before the `Authorization` header is set, so
    /// none of them are dropped. A remote error envelope - whether inside
    /// a 2xx or a non-2xx body - becomes [`Error::Api`]; transport
    /// failures become [`Error::Transport`].
    async fn send(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<&impl Serialize>,
    ) -> Result<(StatusCode, Vec<u8>)> {
        let token = self.session.bearer_token().ok_or(Error::NotAuthenticated)?;
        let url = format!("{}{}", self.api_base, path);
        debug!(%url, %method, "dispatching request");

        let mut builder = self
            .http
            .request(method, &url)
            .headers(headers)
            .bearer_auth(token);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            return Err(Error::Api {
                status: envelope.error.status,
                message: envelope.error.message,
            });
        }
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok((status, bytes.to_vec()))
    }
}

/// Typed async client for the Spotify Web API.
///
/// Constructed from an application's client id and secret, the client
/// acquires a client-credentials token on [`SpotifyClient::login`] (or
/// transparently on the first facade call) and keeps it fresh in the
/// background until [`SpotifyClient::destroy`] is called. Resource
/// methods live on the public facade fields.
///
/// # Example
///
/// ```
/// use spotweb::SpotifyClient;
///
/// #[tokio::main]
/// async fn main() -> spotweb::Result<()> {
///     let client = SpotifyClient::from_env()?;
///     client.login().await?;
///
///     let album = client.albums.get_album("4aawyAB9vmqN3uQ7FjRGTy", None).await?;
///     println!("{}", album.name);
///
///     client.destroy();
///     Ok(())
/// }
/// ```
pub struct SpotifyClient {
    session: SessionManager,
    pub albums: Albums,
    pub artists: Artists,
    pub browse: Browse,
    pub playlists: Playlists,
    pub search: Search,
    pub tracks: Tracks,
    pub users: Users,
}

impl SpotifyClient {
    /// Creates a client against the public Spotify endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::with_endpoints(
            client_id,
            client_secret,
            config::API_BASE_URL,
            config::TOKEN_URL,
        )
    }

    /// Creates a client with credentials read from `SPOTIFY_CLIENT_ID` and
    /// `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let (id, secret) = config::credentials_from_env().map_err(Error::Authentication)?;
        Ok(Self::new(id, secret))
    }

    /// Creates a client against explicit endpoint bases. Used by the
    /// integration tests to point at a local mock server.
    pub fn with_endpoints(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_base: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::new();
        let session = SessionManager::new(client_id, client_secret, token_url, http.clone());
        let ctx = Arc::new(Context {
            session: session.clone(),
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        });

        SpotifyClient {
            session,
            albums: Albums::new(ctx.clone()),
            artists: Artists::new(ctx.clone()),
            browse: Browse::new(ctx.clone()),
            playlists: Playlists::new(ctx.clone()),
            search: Search::new(ctx.clone()),
            tracks: Tracks::new(ctx.clone()),
            users: Users::new(ctx),
        }
    }

    /// Acquires a token and arms the background renewal. See
    /// [`SessionManager::login`].
    pub async fn login(&self) -> Result<()> {
        self.session.login().await
    }

    /// Cancels the background renewal. In-flight requests are unaffected.
    pub fn destroy(&self) {
        self.session.destroy();
    }

    /// Registers a callback observing failed background token renewals.
    pub fn on_renewal_error(&self, hook: RenewalErrorHook) {
        self.session.on_renewal_error(hook);
    }

    /// Access to the underlying session manager.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }
}
