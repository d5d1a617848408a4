use serde::{Deserialize, Serialize};

use crate::core::client::constants::{CLIENT_ID_SUFFIX, REDIRECT_URI};

/// Form body of the OAuth2 refresh-token grant.
#[derive(Serialize)]
pub(crate) struct RefreshGrant<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
    client_id: String,
    redirect_uri: &'static str,
}

impl<'a> RefreshGrant<'a> {
    pub(crate) fn new(refresh_token: &'a str, consumer_key: &str) -> Self {
        Self {
            grant_type: "refresh_token",
            refresh_token,
            client_id: format!("{consumer_key}{CLIENT_ID_SUFFIX}"),
            redirect_uri: REDIRECT_URI,
        }
    }
}

/// Successful token endpoint response. Only `access_token` is required;
/// `scope` and `token_type` are ignored.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    // read only by the `tracing` debug event
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    #[serde(default)]
    pub(crate) expires_in: Option<u64>,
}
