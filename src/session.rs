//! Bearer-token lifecycle for the client-credentials flow.
//!
//! [`SessionManager`] owns exactly one valid-or-absent credential and keeps
//! it fresh without caller intervention: a successful login arms a single
//! background task that re-exchanges the credentials when the token's
//! validity runs out. Facades call [`SessionManager::ensure_authenticated`]
//! before dispatching, so application code never has to touch the token.
//!
//! Failure semantics: a failed exchange never clobbers a previously held
//! credential, so in-flight requests keep using the old token until the
//! remote side rejects it. Background renewal failures are reported through
//! the hook registered with [`SessionManager::on_renewal_error`] and
//! retried with capped exponential backoff.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::{ErrorEnvelope, TokenResponse};

/// First delay after a failed background renewal. Matches the delay used
/// for transient gateway errors elsewhere in the crate's lineage.
const RENEWAL_BACKOFF_INITIAL: Duration = Duration::from_secs(10);

/// Ceiling for the renewal backoff.
const RENEWAL_BACKOFF_MAX: Duration = Duration::from_secs(300);

/// Callback invoked with every failed background renewal attempt.
pub type RenewalErrorHook = Box<dyn Fn(&Error) + Send + Sync + 'static>;

/// A bearer credential obtained from the token endpoint.
///
/// Replaced wholesale on every renewal, never mutated in place. The
/// `obtained_at` timestamp is recorded locally when the exchange response
/// arrives.
#[derive(Debug, Clone)]
pub struct Credential {
    pub access_token: String,
    pub token_type: String,
    /// Validity duration in seconds, as reported by the token endpoint.
    pub expires_in: u64,
    /// Unix timestamp of the moment the credential was received.
    pub obtained_at: u64,
}

impl Credential {
    fn from_response(res: TokenResponse) -> Self {
        Credential {
            access_token: res.access_token,
            token_type: res.token_type,
            expires_in: res.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    /// True once the nominal validity duration has fully elapsed.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in
    }
}

/// Owns the current bearer credential and the renewal task.
///
/// Cheap to clone; clones share the same session state.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client_id: String,
    client_secret: String,
    token_url: String,
    http: reqwest::Client,
    credential: Mutex<Option<Credential>>,
    /// At most one pending renewal task exists at any time.
    renewal: Mutex<Option<JoinHandle<()>>>,
    backoff_initial: Duration,
    backoff_max: Duration,
    /// Serializes credential exchanges so concurrent callers share one
    /// login instead of each triggering their own.
    login_gate: tokio::sync::Mutex<()>,
    renewal_hook: Mutex<Option<RenewalErrorHook>>,
    destroyed: AtomicBool,
}

impl SessionManager {
    pub(crate) fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_url: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self::with_backoff(
            client_id,
            client_secret,
            token_url,
            http,
            RENEWAL_BACKOFF_INITIAL,
            RENEWAL_BACKOFF_MAX,
        )
    }

    // Tests shrink the retry delays so a recovery can be observed in
    // wall-clock milliseconds.
    fn with_backoff(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_url: impl Into<String>,
        http: reqwest::Client,
        backoff_initial: Duration,
        backoff_max: Duration,
    ) -> Self {
        SessionManager {
            inner: Arc::new(SessionInner {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
                token_url: token_url.into(),
                http,
                credential: Mutex::new(None),
                renewal: Mutex::new(None),
                backoff_initial,
                backoff_max,
                login_gate: tokio::sync::Mutex::new(()),
                renewal_hook: Mutex::new(None),
                destroyed: AtomicBool::new(false),
            }),
        }
    }

    /// Performs the client-credentials exchange and arms the renewal task.
    ///
    /// On success the new credential replaces any previous one and a single
    /// renewal fires after the token's validity duration. On failure the
    /// previously held credential (if any) is left untouched and an
    /// [`Error::Authentication`] is returned.
    ///
    /// Concurrent `login()` calls serialize on an internal gate; each still
    /// performs its own exchange, since an explicit login is a request for
    /// a fresh token.
    pub async fn login(&self) -> Result<()> {
        let _gate = self.inner.login_gate.lock().await;
        // login() after destroy() re-activates the manager
        self.inner.destroyed.store(false, Ordering::SeqCst);
        self.exchange_and_store().await
    }

    /// Logs in unless a fresh credential is already held.
    ///
    /// Callers that race each other here wait on the login gate and
    /// re-check the stored credential afterwards, so the exchange runs at
    /// most once per expiry. A credential past its nominal validity is
    /// treated as absent.
    pub async fn ensure_authenticated(&self) -> Result<()> {
        if self.has_fresh_credential() {
            return Ok(());
        }
        let _gate = self.inner.login_gate.lock().await;
        if self.has_fresh_credential() {
            return Ok(());
        }
        self.inner.destroyed.store(false, Ordering::SeqCst);
        self.exchange_and_store().await
    }

    /// Cancels the pending renewal, making the manager inert.
    ///
    /// The credential, if any, stays in memory but is never renewed again;
    /// a later `login()` re-activates the manager.
    pub fn destroy(&self) {
        self.inner.destroyed.store(true, Ordering::SeqCst);
        if let Some(handle) = self.inner.renewal.lock().unwrap().take() {
            handle.abort();
            debug!("session renewal task cancelled");
        }
    }

    /// Registers a callback observing failed background renewals.
    ///
    /// Renewal runs with no caller to report to; without a hook the
    /// failure is only visible in the log.
    pub fn on_renewal_error(&self, hook: RenewalErrorHook) {
        *self.inner.renewal_hook.lock().unwrap() = Some(hook);
    }

    /// Current bearer token, or `None` while unauthenticated.
    pub fn bearer_token(&self) -> Option<String> {
        self.inner
            .credential
            .lock()
            .unwrap()
            .as_ref()
            .map(|c| c.access_token.clone())
    }

    /// True while a credential is held, expired or not.
    pub fn is_authenticated(&self) -> bool {
        self.inner.credential.lock().unwrap().is_some()
    }

    /// Snapshot of the currently held credential.
    pub fn current_credential(&self) -> Option<Credential> {
        self.inner.credential.lock().unwrap().clone()
    }

    fn has_fresh_credential(&self) -> bool {
        self.inner
            .credential
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|c| !c.is_expired())
    }

    async fn exchange_and_store(&self) -> Result<()> {
        let credential = self.exchange().await?;
        info!(
            expires_in = credential.expires_in,
            "token acquired, renewal scheduled"
        );
        let validity = credential.expires_in;
        self.store(credential);
        self.schedule_renewal(validity);
        Ok(())
    }

    /// POSTs `grant_type=client_credentials` with HTTP Basic auth built
    /// from `base64(client_id:client_secret)`.
    async fn exchange(&self) -> Result<Credential> {
        let basic = STANDARD.encode(format!(
            "{}:{}",
            self.inner.client_id, self.inner.client_secret
        ));

        debug!(url = %self.inner.token_url, "exchanging client credentials");
        let response = self
            .inner
            .http
            .post(&self.inner.token_url)
            .header(AUTHORIZATION, format!("Basic {}", basic))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| Error::Authentication(format!("token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|env| env.error.message)
                .unwrap_or(body);
            return Err(Error::Authentication(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                message
            )));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| Error::Authentication(format!("malformed token response: {}", e)))?;

        Ok(Credential::from_response(token))
    }

    fn store(&self, credential: Credential) {
        *self.inner.credential.lock().unwrap() = Some(credential);
    }

    fn notify_renewal_failure(&self, err: &Error) {
        if let Some(hook) = self.inner.renewal_hook.lock().unwrap().as_ref() {
            hook(err);
        }
    }

    /// Arms the single renewal task, replacing (and aborting) any previous
    /// one. The task re-exchanges after `delay_secs`, then keeps itself
    /// armed for each new validity window; on failure it keeps the stale
    /// credential and retries with capped exponential backoff.
    fn schedule_renewal(&self, delay_secs: u64) {
        let weak = Arc::downgrade(&self.inner);
        let initial = self.inner.backoff_initial;
        let max = self.inner.backoff_max;
        let handle = tokio::spawn(async move {
            let mut delay = Duration::from_secs(delay_secs);
            let mut backoff = initial;
            loop {
                tokio::time::sleep(delay).await;
                // Holding only a weak reference lets a dropped client shut
                // the task down instead of keeping the session alive.
                let Some(inner) = weak.upgrade() else { return };
                if inner.destroyed.load(Ordering::SeqCst) {
                    return;
                }
                let session = SessionManager { inner };
                match session.exchange().await {
                    Ok(credential) => {
                        delay = Duration::from_secs(credential.expires_in);
                        backoff = initial;
                        info!(
                            expires_in = credential.expires_in,
                            "token renewed in background"
                        );
                        session.store(credential);
                    }
                    Err(err) => {
                        warn!(error = %err, retry_in = ?backoff, "background token renewal failed");
                        session.notify_renewal_failure(&err);
                        delay = backoff;
                        backoff = (backoff * 2).min(max);
                    }
                }
            }
        });

        if let Some(old) = self.inner.renewal.lock().unwrap().replace(handle) {
            old.abort();
        }
    }
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        if let Some(handle) = self.renewal.lock().unwrap().take() {
            handle.abort();
        }
    }
}
