#![allow(dead_code)]

use httpmock::{Method::POST, Mock, MockServer};
use std::sync::Arc;
use std::{fs, path::Path};
use tda_rs::{TdaClient, TokenCache};
use url::Url;

pub const REFRESH: &str = "R1";
pub const CONSUMER_KEY: &str = "CK";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{symbol}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn root(server: &MockServer) -> Url {
    Url::parse(&server.base_url()).unwrap()
}

/// A client pointed at the mock server with no token caching.
pub fn client(server: &MockServer) -> TdaClient {
    TdaClient::builder(REFRESH, CONSUMER_KEY)
        .root_url(root(server))
        .build()
        .unwrap()
}

pub fn client_with_cache(server: &MockServer, cache: Arc<dyn TokenCache>) -> TdaClient {
    TdaClient::builder(REFRESH, CONSUMER_KEY)
        .root_url(root(server))
        .token_cache(cache)
        .build()
        .unwrap()
}

/// Token endpoint answering the refresh grant for `REFRESH`/`CONSUMER_KEY` with `token`.
pub fn mock_token<'a>(server: &'a MockServer, token: &str) -> Mock<'a> {
    let body = format!(
        r#"{{"access_token":"{token}","scope":"PlaceTrades AccountAccess MoveMoney","expires_in":1800,"token_type":"Bearer"}}"#
    );
    server.mock(|when, then| {
        when.method(POST)
            .path("/oauth2/token")
            .form_urlencoded_tuple("grant_type", "refresh_token")
            .form_urlencoded_tuple("refresh_token", REFRESH);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Token endpoint answering with a bare status.
pub fn mock_token_status(server: &MockServer, status: u16) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/oauth2/token");
        then.status(status)
            .header("content-type", "application/json")
            .body(r#"{"error":"invalid_grant"}"#);
    })
}
