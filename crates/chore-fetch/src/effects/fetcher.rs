use std::path::Path;

use chore_fs::{AtomicWriteOptions, atomic_write};

use crate::core::{is_success, validate_url};
use crate::data::FetchOutcome;
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result, error_chain};

/// Downloads one URL to one path.
///
/// Transport settings live in the client; the fetcher only decides how the
/// body lands on disk.
pub struct Fetcher<C: HttpClient> {
    client: C,
    write:  AtomicWriteOptions,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            write: AtomicWriteOptions::default(),
        }
    }

    pub fn write_options(mut self, write: AtomicWriteOptions) -> Self {
        self.write = write;
        self
    }

    pub fn client(&self) -> &C { &self.client }

    /// Fetch `url` and write the body verbatim to `destination`.
    ///
    /// Only a `200 OK` body is written, atomically and overwriting whatever is
    /// there. Any other status comes back as [`FetchOutcome::Rejected`] with
    /// the destination untouched. The parent directory must already exist.
    pub async fn fetch(&self, url: &str, destination: &Path) -> Result<FetchOutcome> {
        validate_url(url)?;
        tracing::debug!(url, destination = %destination.display(), "sending GET");

        let response = self
            .client
            .get(url)
            .await
            .map_err(|e| FetchError::Network(error_chain(&e)))?;

        if !is_success(response.status) {
            tracing::warn!(url, status = response.status, "download rejected");
            return Ok(FetchOutcome::Rejected {
                url:    url.to_owned(),
                status: response.status,
            });
        }

        atomic_write(destination, &response.body, self.write)?;

        let bytes = response.body.len() as u64;
        tracing::info!(url, destination = %destination.display(), bytes, "download saved");

        Ok(FetchOutcome::Saved {
            url: url.to_owned(),
            path: destination.to_path_buf(),
            bytes,
        })
    }
}
