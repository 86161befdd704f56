//! Network and filesystem effects.

mod fetcher;
mod http;

pub use fetcher::Fetcher;
pub use http::{HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
