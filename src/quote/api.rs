use std::collections::HashMap;

use crate::core::client::constants::QUOTES_PATH;
use crate::core::{TdaClient, TdaError, net};

use super::Quote;

pub(super) async fn quotes(
    client: &TdaClient,
    tickers: &[String],
) -> Result<HashMap<String, Quote>, TdaError> {
    let symbols: Vec<&str> = tickers
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if symbols.is_empty() {
        return Err(TdaError::InvalidArgument(
            "quotes: at least one symbol required".into(),
        ));
    }

    let token = client.bearer().await?;

    let joined = symbols.join(",");
    let mut url = client.endpoint(QUOTES_PATH)?;
    url.query_pairs_mut().append_pair("symbol", &joined);

    let resp = client
        .http()
        .get(url)
        .bearer_auth(&token)
        .header("accept", "application/json")
        .send()
        .await?;

    net::check_status(&resp)?;

    let fixture_key = if symbols.len() == 1 {
        net::normalize_symbol(symbols[0])
    } else {
        "MULTI".to_string()
    };
    let body = net::get_text(resp, "quotes", &fixture_key).await?;

    parse_quotes(&body)
}

pub(super) async fn quote(client: &TdaClient, ticker: &str) -> Result<Quote, TdaError> {
    let symbol = net::normalize_symbol(ticker);
    let mut by_symbol = quotes(client, &[ticker.to_string()]).await?;
    by_symbol
        .remove(&symbol)
        .ok_or(TdaError::NotFound { symbol })
}

fn parse_quotes(body: &str) -> Result<HashMap<String, Quote>, TdaError> {
    serde_json::from_str(body).map_err(|source| TdaError::Decode {
        what: "quotes",
        source,
    })
}
