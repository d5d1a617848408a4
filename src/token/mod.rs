//! OAuth2 refresh-token exchange and token reuse.

mod cache;
mod wire;

pub use cache::{
    CachedToken, FileTokenCache, MemoryTokenCache, NoopTokenCache, TOKEN_FRESHNESS,
    TOKEN_SERVER_EXPIRY, TokenCache,
};

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use reqwest::Client;
use url::Url;

use crate::core::client::constants::TOKEN_PATH;
use crate::core::client::endpoint_url;
use crate::core::{TdaError, net};
use wire::{RefreshGrant, TokenResponse};

/// Produces bearer tokens, reusing a cached one while it is fresh.
///
/// Cloning shares the transport and the cache. There is no locking around the
/// load/refresh/store sequence: two callers that both see a stale record will
/// both refresh, and the later store wins.
#[derive(Clone)]
pub struct TokenProvider {
    http: Client,
    token_url: Url,
    refresh_token: String,
    consumer_key: String,
    cache: Arc<dyn TokenCache>,
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("token_url", &self.token_url.as_str())
            .field("refresh_token", &"<redacted>")
            .field("consumer_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl TokenProvider {
    /// Create a provider that posts refresh grants to `<root>/oauth2/token`.
    pub fn new(
        http: Client,
        root: &Url,
        refresh_token: impl Into<String>,
        consumer_key: impl Into<String>,
        cache: Arc<dyn TokenCache>,
    ) -> Result<Self, TdaError> {
        Ok(Self {
            http,
            token_url: endpoint_url(root, TOKEN_PATH)?,
            refresh_token: refresh_token.into(),
            consumer_key: consumer_key.into(),
            cache,
        })
    }

    /// Return a fresh cached token if there is one, otherwise refresh and cache the result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn token(&self) -> Result<String, TdaError> {
        match self.cache.load()? {
            Some(cached) if cached.is_fresh(Utc::now()) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(issued_at = %cached.issued_at, "reusing cached access token");
                return Ok(cached.token);
            }
            Some(_stale) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(issued_at = %_stale.issued_at, "cached access token is stale");
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("no cached access token");
            }
        }

        let token = self.refresh().await?;
        self.cache.store(&token)?;
        Ok(token)
    }

    /// Perform the refresh-token grant unconditionally. The cache is not touched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn refresh(&self) -> Result<String, TdaError> {
        let grant = RefreshGrant::new(&self.refresh_token, &self.consumer_key);

        let resp = self
            .http
            .post(self.token_url.clone())
            .header("accept", "application/json")
            .form(&grant)
            .send()
            .await?;

        net::check_status(&resp)?;
        // Not routed through `net::get_text`: token bodies are never recorded as fixtures.
        let body = resp.text().await?;

        let parsed: TokenResponse = serde_json::from_str(&body)
            .map_err(|source| TdaError::Decode { what: "token", source })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(expires_in = ?parsed.expires_in, "refreshed access token");

        Ok(parsed.access_token)
    }
}
