//! Core components of the `tda-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`TdaClient`] and its builder.
//! - The primary [`TdaError`] type.
//! - Internal networking helpers shared by every endpoint.

/// The main client (`TdaClient`), builder, and configuration.
pub mod client;
/// The primary error type (`TdaError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::TdaClient`
pub use client::{TdaClient, TdaClientBuilder};
pub use error::{AuthReason, TdaError};
