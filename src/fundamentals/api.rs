use std::collections::HashMap;

use crate::core::client::constants::INSTRUMENTS_PATH;
use crate::core::{TdaClient, TdaError, net};

use super::InstrumentFundamentals;

pub(super) async fn instrument_fundamentals(
    client: &TdaClient,
    ticker: &str,
) -> Result<InstrumentFundamentals, TdaError> {
    let symbol = net::normalize_symbol(ticker);
    if symbol.is_empty() {
        return Err(TdaError::InvalidArgument(
            "fundamentals: ticker must not be empty".into(),
        ));
    }

    let token = client.bearer().await?;

    let mut url = client.endpoint(INSTRUMENTS_PATH)?;
    url.query_pairs_mut()
        .append_pair("symbol", &symbol)
        .append_pair("projection", "fundamental");

    let resp = client
        .http()
        .get(url)
        .bearer_auth(&token)
        .header("accept", "application/json")
        .send()
        .await?;

    net::check_status(&resp)?;
    let body = net::get_text(resp, "instruments", &symbol).await?;

    parse_fundamentals(&body, &symbol)
}

/// Pick `symbol` out of the ticker-keyed response map.
///
/// An empty body or an empty object means the API has no fundamentals for the
/// instrument, which is reported separately from a decode failure.
pub(super) fn parse_fundamentals(
    body: &str,
    symbol: &str,
) -> Result<InstrumentFundamentals, TdaError> {
    let empty = || TdaError::EmptyResult {
        symbol: symbol.to_string(),
    };

    if body.trim().is_empty() {
        return Err(empty());
    }

    let mut by_symbol: HashMap<String, InstrumentFundamentals> = serde_json::from_str(body)
        .map_err(|source| TdaError::Decode {
            what: "fundamentals",
            source,
        })?;

    if by_symbol.is_empty() {
        return Err(empty());
    }

    by_symbol.remove(symbol).ok_or_else(|| TdaError::NotFound {
        symbol: symbol.to_string(),
    })
}
