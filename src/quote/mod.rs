//! Security quotes (`GET /marketdata/quotes`).

mod api;
mod model;

pub use model::Quote;

use std::collections::HashMap;

use crate::{TdaClient, TdaError};

/// Fetch quotes for several tickers in one request.
///
/// The result is keyed by the symbols the API returns (uppercase); tickers the
/// API does not recognise are simply absent.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, tickers), err))]
pub async fn quotes<I, S>(client: &TdaClient, tickers: I) -> Result<HashMap<String, Quote>, TdaError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tickers: Vec<String> = tickers.into_iter().map(Into::into).collect();
    api::quotes(client, &tickers).await
}

/// Fetch the quote for a single ticker.
///
/// Returns [`TdaError::NotFound`] when the API has no entry for it.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn quote(client: &TdaClient, ticker: &str) -> Result<Quote, TdaError> {
    api::quote(client, ticker).await
}

impl TdaClient {
    /// See [`quotes`].
    pub async fn quotes<I, S>(&self, tickers: I) -> Result<HashMap<String, Quote>, TdaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        quotes(self, tickers).await
    }

    /// See [`quote`].
    pub async fn quote(&self, ticker: &str) -> Result<Quote, TdaError> {
        quote(self, ticker).await
    }
}
