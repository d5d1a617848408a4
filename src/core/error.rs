use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why an authentication step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthReason {
    /// The server rejected the request as malformed (HTTP 400).
    MalformedRequest,
    /// The refresh token or consumer key was rejected (HTTP 401).
    InvalidCredentials,
    /// A data call could not obtain a bearer token; the cause is attached as the source.
    TokenUnavailable,
}

impl fmt::Display for AuthReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MalformedRequest => "malformed request or credentials",
            Self::InvalidCredentials => "invalid refresh token or consumer key",
            Self::TokenUnavailable => "could not obtain an access token",
        };
        f.write_str(s)
    }
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TdaError {
    /// The request could not be sent or the response could not be received
    /// (connection refused, DNS, timeout, truncated body).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API refused our credentials, or a data call failed while fetching its token.
    #[error("authentication failed: {reason}")]
    Auth {
        /// What went wrong.
        reason: AuthReason,
        /// The underlying failure, when there is one.
        #[source]
        source: Option<Box<TdaError>>,
    },

    /// The server answered with a status other than 200, 400 or 401.
    #[error("unexpected response status: {status} at {url}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("could not decode {what} response: {source}")]
    Decode {
        /// Which payload was being decoded.
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The fundamentals endpoint returned an empty payload for the symbol.
    #[error("no fundamentals available for {symbol}")]
    EmptyResult {
        /// The (uppercased) symbol that was requested.
        symbol: String,
    },

    /// The response did not contain an entry for the requested symbol.
    #[error("symbol {symbol} not found in response")]
    NotFound {
        /// The (uppercased) symbol that was requested.
        symbol: String,
    },

    /// Reading or writing the token cache failed for a reason other than "not found".
    #[error("token cache error at {}: {source}", .path.display())]
    Storage {
        /// Location of the cache record.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Required configuration was missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A caller-supplied argument was rejected before any request was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TdaError {
    /// `true` for any authentication failure, including a data call whose token fetch failed.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    pub(crate) fn auth(reason: AuthReason) -> Self {
        Self::Auth {
            reason,
            source: None,
        }
    }

    pub(crate) fn token_unavailable(cause: TdaError) -> Self {
        Self::Auth {
            reason: AuthReason::TokenUnavailable,
            source: Some(Box::new(cause)),
        }
    }
}
