//! Public client surface + builder.
//! OAuth constants and defaults live in `constants`; token handling lives in `crate::token`.

pub(crate) mod constants;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::TdaError;
use crate::token::{FileTokenCache, NoopTokenCache, TokenCache, TokenProvider};
use constants::{
    DEFAULT_ROOT_URL, DEFAULT_TIMEOUT, ENV_CONSUMER_KEY, ENV_REFRESH_TOKEN, ENV_ROOT_URL,
    ENV_TOKEN_CACHE, USER_AGENT,
};

/// A configured connection to the API.
///
/// Holds the root URL, the HTTP transport and the [`TokenProvider`]. Cloning is
/// cheap and clones share the transport and token cache.
#[derive(Clone)]
pub struct TdaClient {
    http: Client,
    root: Url,
    tokens: TokenProvider,
}

impl fmt::Debug for TdaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TdaClient")
            .field("root", &self.root.as_str())
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl TdaClient {
    /// Create a new builder from the two required secrets.
    pub fn builder(
        refresh_token: impl Into<String>,
        consumer_key: impl Into<String>,
    ) -> TdaClientBuilder {
        TdaClientBuilder::new(refresh_token, consumer_key)
    }

    /// Return a valid bearer token, refreshing it only when the cache has none fresh.
    pub async fn access_token(&self) -> Result<String, TdaError> {
        self.tokens.token().await
    }

    /// The token provider backing this client.
    pub fn token_provider(&self) -> &TokenProvider {
        &self.tokens
    }

    /// The configured API root.
    pub fn root_url(&self) -> &Url {
        &self.root
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, TdaError> {
        endpoint_url(&self.root, path)
    }

    /// Fetch a token for a data call, wrapping any failure as an authentication error.
    pub(crate) async fn bearer(&self) -> Result<String, TdaError> {
        self.tokens
            .token()
            .await
            .map_err(TdaError::token_unavailable)
    }
}

/// Append `path` to `root`, tolerating a trailing slash on the root.
pub(crate) fn endpoint_url(root: &Url, path: &str) -> Result<Url, TdaError> {
    let mut url = root.clone();
    url.path_segments_mut()
        .map_err(|()| TdaError::Config(format!("root URL cannot be a base: {root}")))?
        .pop_if_empty()
        .extend(path.split('/'));
    Ok(url)
}

/* ----------------------- Builder ----------------------- */

/// Configuration for a [`TdaClient`].
pub struct TdaClientBuilder {
    refresh_token: String,
    consumer_key: String,
    root_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http: Option<Client>,
    token_cache: Option<Arc<dyn TokenCache>>,
}

impl fmt::Debug for TdaClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TdaClientBuilder")
            .field("root_url", &self.root_url.as_ref().map(Url::as_str))
            .field("timeout", &self.timeout)
            .field("custom_http", &self.http.is_some())
            .field("token_cache", &self.token_cache.is_some())
            .finish_non_exhaustive()
    }
}

impl TdaClientBuilder {
    pub fn new(refresh_token: impl Into<String>, consumer_key: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
            consumer_key: consumer_key.into(),
            root_url: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
            http: None,
            token_cache: None,
        }
    }

    /// Build from `TDA_REFRESH_TOKEN`, `TDA_CONSUMER_KEY` and, when set,
    /// `TDA_ROOT_URL` and `TDA_TOKEN_CACHE`.
    pub fn from_env() -> Result<Self, TdaError> {
        let required = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| TdaError::Config(format!("{name} is not set")))
        };

        let mut builder = Self::new(required(ENV_REFRESH_TOKEN)?, required(ENV_CONSUMER_KEY)?);
        if let Ok(root) = std::env::var(ENV_ROOT_URL) {
            builder = builder.root_url(Url::parse(&root)?);
        }
        if let Ok(path) = std::env::var(ENV_TOKEN_CACHE) {
            builder = builder.token_cache_path(path);
        }
        Ok(builder)
    }

    /// Override the API root (e.g., `https://api.tdameritrade.com/v1`).
    pub fn root_url(mut self, url: Url) -> Self {
        self.root_url = Some(url);
        self
    }

    /// Override the User-Agent of the built-in transport.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout of the built-in transport. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout on the built-in transport. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a caller-supplied transport. Timeout settings on this builder are then ignored.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Persist tokens in a file at `path` (see [`FileTokenCache`]).
    pub fn token_cache_path(self, path: impl Into<PathBuf>) -> Self {
        self.token_cache(Arc::new(FileTokenCache::new(path)))
    }

    /// Use any [`TokenCache`] implementation. Default: no caching.
    pub fn token_cache(mut self, cache: Arc<dyn TokenCache>) -> Self {
        self.token_cache = Some(cache);
        self
    }

    pub fn build(self) -> Result<TdaClient, TdaError> {
        let root = match self.root_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_ROOT_URL)?,
        };

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut httpb = Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
                    .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        let cache = self
            .token_cache
            .unwrap_or_else(|| Arc::new(NoopTokenCache));

        let tokens = TokenProvider::new(
            http.clone(),
            &root,
            self.refresh_token,
            self.consumer_key,
            cache,
        )?;

        Ok(TdaClient { http, root, tokens })
    }
}
