//! Instrument fundamentals (`GET /instruments?projection=fundamental`).

mod api;
mod model;

pub use model::{Fundamental, InstrumentFundamentals};

use crate::{TdaClient, TdaError};

/// Fetch the fundamentals record for `ticker`.
///
/// The ticker is case-insensitive. An empty payload from the API yields
/// [`TdaError::EmptyResult`] rather than a zero-valued record; a payload that
/// lacks the ticker yields [`TdaError::NotFound`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn instrument_fundamentals(
    client: &TdaClient,
    ticker: &str,
) -> Result<InstrumentFundamentals, TdaError> {
    api::instrument_fundamentals(client, ticker).await
}

impl TdaClient {
    /// See [`instrument_fundamentals`].
    pub async fn instrument_fundamentals(
        &self,
        ticker: &str,
    ) -> Result<InstrumentFundamentals, TdaError> {
        instrument_fundamentals(self, ticker).await
    }
}
