use std::future::Future;

use bytes::Bytes;

/// A fully buffered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body:   Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Asynchronous HTTP client abstraction.
///
/// One method, one GET. Implementations follow redirects and map transport
/// failures to their own error type; a non-200 status is a response, not an
/// error, and its body may be left unread.
///
/// # Implementations
///
/// - [`ReqwestClient`]: production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET for `url` and buffer the whole body.
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::{FetchOptions, ProxySetting};
    use crate::error::{FetchError, Result};

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new(options: &FetchOptions) -> Result<Self> {
            let mut builder = reqwest::Client::builder().danger_accept_invalid_certs(options.accept_invalid_certs);

            if options.accept_invalid_certs {
                tracing::warn!("TLS certificate validation is disabled");
            }

            if let Some(user_agent) = &options.user_agent {
                builder = builder.user_agent(user_agent.clone());
            }

            builder = match &options.proxy {
                ProxySetting::System => builder,
                ProxySetting::Disabled => builder.no_proxy(),
                ProxySetting::Url(url) => {
                    let proxy = reqwest::Proxy::all(url.as_str())
                        .map_err(|e| FetchError::Client(format!("invalid proxy URL {url}: {e}")))?;
                    builder.proxy(proxy)
                }
            };

            let client = builder.build().map_err(|e| FetchError::Client(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> std::result::Result<HttpResponse, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            if !crate::core::is_success(status) {
                return Ok(HttpResponse::new(status, Bytes::new()));
            }
            let body = response.bytes().await?;
            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
