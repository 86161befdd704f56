//! `chore.toml` loading.
//!
//! Unknown keys are ignored and missing keys fall back to defaults, so an
//! empty or partial file is always valid.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chore_fetch::{FetchOptions, ProxySetting};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "chore.toml";
pub const DEFAULT_FETCH_URL: &str = "https://img2.pic.in.th/pic/logo-neo.png";
pub const DEFAULT_FETCH_OUTPUT: &str = "public/logo.png";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingSection,
    pub fetch:   FetchSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// An `EnvFilter` directive such as `"info"` or `"chore_fetch=debug"`.
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchSection {
    pub url:                  String,
    pub output:               PathBuf,
    pub accept_invalid_certs: bool,
    pub user_agent:           Option<String>,
    /// `"system"`, `"none"`, or a proxy URL.
    pub proxy:                Option<String>,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            url:                  DEFAULT_FETCH_URL.to_owned(),
            output:               PathBuf::from(DEFAULT_FETCH_OUTPUT),
            accept_invalid_certs: false,
            user_agent:           None,
            proxy:                None,
        }
    }
}

impl FetchSection {
    pub fn fetch_options(&self) -> FetchOptions {
        let mut options = FetchOptions::new()
            .accept_invalid_certs(self.accept_invalid_certs)
            .proxy(self.proxy_setting());
        if let Some(user_agent) = &self.user_agent {
            options = options.user_agent(user_agent.clone());
        }
        options
    }

    fn proxy_setting(&self) -> ProxySetting {
        match self.proxy.as_deref().map(str::trim) {
            None | Some("") | Some("system") => ProxySetting::System,
            Some("none") => ProxySetting::Disabled,
            Some(url) => ProxySetting::Url(url.to_owned()),
        }
    }
}

impl Config {
    /// Loads `explicit` if given, else `chore.toml` in the working directory
    /// if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            bail!("config file {} does not exist", path.display());
        }
        let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> { Ok(toml::from_str(text)?) }
}
