#[cfg(feature = "test-mode")]
use std::env;

use reqwest::StatusCode;

use crate::core::error::{AuthReason, TdaError};

/// Map a response status onto the crate's error taxonomy.
///
/// 200 passes; 400 and 401 are authentication failures; anything else is a
/// server error carrying the code and URL.
pub(crate) fn check_status(resp: &reqwest::Response) -> Result<(), TdaError> {
    match resp.status() {
        StatusCode::OK => Ok(()),
        StatusCode::BAD_REQUEST => Err(TdaError::auth(AuthReason::MalformedRequest)),
        StatusCode::UNAUTHORIZED => Err(TdaError::auth(AuthReason::InvalidCredentials)),
        other => Err(TdaError::Server {
            status: other.as_u16(),
            url: resp.url().to_string(),
        }),
    }
}

/// Read the response body as text.
/// In `test-mode`, if `TDA_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _symbol: &str,
) -> Result<String, TdaError> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("TDA_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _symbol, "json", &text)
        {
            eprintln!("TDA_RECORD: failed to write fixture for {_symbol}: {e}");
        }
    }

    Ok(text)
}

/// Normalize a user-supplied ticker the way the API keys its responses.
pub(crate) fn normalize_symbol(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}
