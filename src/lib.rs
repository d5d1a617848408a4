//! tda-rs: a small async client for the TD Ameritrade market-data API.
//!
//! Authenticates with an OAuth2 refresh-token grant, optionally caches the
//! resulting bearer token, and exposes instrument fundamentals and quotes.
//!
//! ```no_run
//! # async fn run() -> Result<(), tda_rs::TdaError> {
//! let client = tda_rs::TdaClient::builder("refresh-token", "CONSUMERKEY")
//!     .token_cache_path("/tmp/tda-token")
//!     .build()?;
//!
//! let fundamentals = client.instrument_fundamentals("aapl").await?;
//! println!("P/E {}", fundamentals.fundamental.pe_ratio);
//!
//! let quotes = client.quotes(["AAPL", "MSFT"]).await?;
//! println!("{} quotes", quotes.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod fundamentals;
pub mod quote;
pub mod token;

pub use crate::core::{AuthReason, TdaClient, TdaClientBuilder, TdaError};
pub use fundamentals::{Fundamental, InstrumentFundamentals};
pub use quote::Quote;
pub use token::{
    CachedToken, FileTokenCache, MemoryTokenCache, NoopTokenCache, TokenCache, TokenProvider,
};

/// Install a `tracing` subscriber driven by `RUST_LOG`. Intended for examples and tests.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
