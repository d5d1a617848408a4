use httpmock::Method::POST;
use std::time::Duration;
use tda_rs::{AuthReason, TdaClient, TdaError};

use crate::common::{client, mock_token, mock_token_status, root, setup_server};

#[tokio::test]
async fn refresh_posts_form_encoded_grant() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/oauth2/token")
            .header("content-type", "application/x-www-form-urlencoded")
            .form_urlencoded_tuple("grant_type", "refresh_token")
            .form_urlencoded_tuple("refresh_token", "R1")
            .form_urlencoded_tuple("client_id", "CK@AMER.OAUTHMAP")
            .form_urlencoded_tuple("redirect_uri", "http://127.0.0.1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"access_token":"tok-abc","scope":"","expires_in":1800,"token_type":"Bearer"}"#);
    });

    let token = client(&server).access_token().await.unwrap();

    mock.assert();
    assert_eq!(token, "tok-abc");
}

#[tokio::test]
async fn refresh_returns_access_token_verbatim() {
    let server = setup_server();
    let weird = "a+b/c==.~_-";
    let mock = mock_token(&server, weird);

    let token = client(&server).access_token().await.unwrap();

    mock.assert();
    assert_eq!(token, weird);
}

#[tokio::test]
async fn without_cache_every_call_refreshes() {
    let server = setup_server();
    let mock = mock_token(&server, "tok-1");
    let client = client(&server);

    client.access_token().await.unwrap();
    client.access_token().await.unwrap();

    mock.assert_calls(2);
}

#[tokio::test]
async fn status_400_is_malformed_request() {
    let server = setup_server();
    let mock = mock_token_status(&server, 400);

    let err = client(&server).access_token().await.unwrap_err();

    mock.assert();
    match err {
        TdaError::Auth { reason, source } => {
            assert_eq!(reason, AuthReason::MalformedRequest);
            assert!(source.is_none());
        }
        other => panic!("expected Auth, got {other:?}"),
    }
}

#[tokio::test]
async fn status_401_is_invalid_credentials() {
    let server = setup_server();
    let mock = mock_token_status(&server, 401);

    let err = client(&server).access_token().await.unwrap_err();

    mock.assert();
    assert!(matches!(
        err,
        TdaError::Auth {
            reason: AuthReason::InvalidCredentials,
            ..
        }
    ));
}

#[tokio::test]
async fn other_status_is_server_error_with_code() {
    for code in [403_u16, 404, 429, 500, 503] {
        let server = setup_server();
        let mock = mock_token_status(&server, code);

        let err = client(&server).access_token().await.unwrap_err();

        mock.assert();
        match err {
            TdaError::Server { status, url } => {
                assert_eq!(status, code);
                assert!(url.ends_with("/oauth2/token"));
            }
            other => panic!("expected Server for {code}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn unparsable_success_body_is_decode_error() {
    for body in ["", "{}", "not json"] {
        let server = setup_server();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/oauth2/token");
            then.status(200).body(body);
        });

        let err = client(&server).access_token().await.unwrap_err();

        mock.assert();
        assert!(
            matches!(err, TdaError::Decode { what: "token", .. }),
            "body {body:?} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // Nothing listens on port 1.
    let client = TdaClient::builder("R1", "CK")
        .root_url(url::Url::parse("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();

    let err = client.access_token().await.unwrap_err();

    assert!(matches!(err, TdaError::Transport(_)), "got {err:?}");
    assert!(!err.is_auth());
}

#[tokio::test]
async fn slow_token_endpoint_times_out_as_transport_error() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/oauth2/token");
        then.status(200)
            .delay(Duration::from_secs(2))
            .header("content-type", "application/json")
            .body(r#"{"access_token":"too-late"}"#);
    });

    let client = TdaClient::builder("R1", "CK")
        .root_url(root(&server))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.access_token().await.unwrap_err();

    match err {
        TdaError::Transport(e) => assert!(e.is_timeout(), "expected a timeout, got {e}"),
        other => panic!("expected Transport, got {other:?}"),
    }
}
