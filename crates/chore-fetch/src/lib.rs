//! Single-request HTTP download with atomic placement.
//!
//! - [`data`] - options and outcomes
//! - [`core`] - pure checks
//! - effects - the [`HttpClient`] seam and the [`Fetcher`] that drives it
//!
//! A fetch is one GET. A `200 OK` body is written verbatim through
//! [`chore_fs::atomic_write`]; any other status is reported and nothing is
//! written. No retries.

pub mod core;
pub mod data;
mod effects;
mod error;

pub use data::{FetchOptions, FetchOutcome, ProxySetting};
pub use effects::{Fetcher, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
