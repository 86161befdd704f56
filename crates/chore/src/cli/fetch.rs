use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chore_fetch::{FetchOutcome, Fetcher, ReqwestClient};

use crate::config::FetchSection;

#[derive(Clone, Debug, clap::Args)]
pub struct FetchArg {
    /// URL to download [default: fetch.url from config]
    pub url: Option<String>,

    /// Destination file; its directory must exist [default: fetch.output from config]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip TLS certificate validation
    #[arg(long)]
    pub insecure: bool,
}

impl FetchArg {
    /// Download failures are reported on `out` and still return `Ok`.
    pub fn run(self, config: &FetchSection, out: &mut impl Write) -> anyhow::Result<()> {
        let url = self.url.unwrap_or_else(|| config.url.clone());
        let output = self.output.unwrap_or_else(|| config.output.clone());
        let options = config
            .fetch_options()
            .accept_invalid_certs(self.insecure || config.accept_invalid_certs);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")?;

        let result = ReqwestClient::new(&options).and_then(|client| {
            let fetcher = Fetcher::new(client).write_options(options.write);
            runtime.block_on(fetcher.fetch(&url, &output))
        });

        report(result, out)
    }
}

fn report(result: chore_fetch::Result<FetchOutcome>, out: &mut impl Write) -> anyhow::Result<()> {
    match result {
        Ok(outcome) => writeln!(out, "{outcome}")?,
        Err(err) => {
            tracing::debug!(error = %err, "download failed");
            writeln!(out, "Error: {err}")?;
        }
    }
    Ok(())
}
