//! Centralized constants for default endpoints, timeouts and OAuth parameters.

use std::time::Duration;

/// Default User-Agent sent by the built-in transport.
pub(crate) const USER_AGENT: &str = concat!("tda-rs/", env!("CARGO_PKG_VERSION"));

/// Production API root; every endpoint path is appended to it.
pub(crate) const DEFAULT_ROOT_URL: &str = "https://api.tdameritrade.com/v1";

/// Overall request timeout applied by the built-in transport.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Token endpoint path (relative to the root URL).
pub(crate) const TOKEN_PATH: &str = "oauth2/token";

/// Fundamentals endpoint path.
pub(crate) const INSTRUMENTS_PATH: &str = "instruments";

/// Quotes endpoint path.
pub(crate) const QUOTES_PATH: &str = "marketdata/quotes";

/// Suffix the API expects on the consumer key in `client_id`.
pub(crate) const CLIENT_ID_SUFFIX: &str = "@AMER.OAUTHMAP";

/// Redirect URI registered for refresh-token grants.
pub(crate) const REDIRECT_URI: &str = "http://127.0.0.1";

/* environment variables read by `TdaClientBuilder::from_env` */
pub(crate) const ENV_REFRESH_TOKEN: &str = "TDA_REFRESH_TOKEN";
pub(crate) const ENV_CONSUMER_KEY: &str = "TDA_CONSUMER_KEY";
pub(crate) const ENV_ROOT_URL: &str = "TDA_ROOT_URL";
pub(crate) const ENV_TOKEN_CACHE: &str = "TDA_TOKEN_CACHE";
