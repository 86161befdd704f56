use chore_fs::AtomicWriteOptions;

/// How the HTTP client picks a proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProxySetting {
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    #[default]
    System,

    /// Connect directly, ignoring the environment.
    Disabled,

    /// Route every request through this proxy URL.
    Url(String),
}

/// Configuration for a single fetch.
///
/// # Examples
///
/// ```
/// use chore_fetch::FetchOptions;
///
/// let options = FetchOptions::default()
///     .accept_invalid_certs(true)
///     .user_agent("chore/0.1");
/// assert!(options.accept_invalid_certs);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Skip TLS certificate validation.
    ///
    /// Off by default. Turning it on trades transport security for
    /// compatibility with hosts serving broken or self-signed chains.
    pub accept_invalid_certs: bool,

    /// `User-Agent` header; reqwest sends none when unset.
    pub user_agent: Option<String>,

    pub proxy: ProxySetting,

    /// How the body is placed on disk.
    pub write: AtomicWriteOptions,
}

impl FetchOptions {
    pub fn new() -> Self { Self::default() }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn proxy(mut self, proxy: ProxySetting) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn write(mut self, write: AtomicWriteOptions) -> Self {
        self.write = write;
        self
    }
}
