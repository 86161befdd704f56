use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::fetch::FetchArg;
use super::strip::StripArg;
use crate::config::Config;

#[derive(Clone, Debug, Parser)]
#[command(name = "chore", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Config file [default: ./chore.toml if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(name = "strip", about = "Remove an inclusive 1-based line range from a file")]
    Strip(StripArg),
    #[command(alias = "get", name = "fetch", about = "Download one URL to one file")]
    Fetch(FetchArg),
}

impl App {
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        let result = match self.cmd {
            Commands::Strip(arg) => arg.run(&mut out),
            Commands::Fetch(arg) => arg.run(&config.fetch, &mut out),
        };
        out.flush()?;
        result
    }
}
