use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Priority: `RUST_LOG` > `--debug` > config level > [`DEFAULT_LOG_LEVEL`].
pub fn filter(debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Diagnostics go to stderr; stdout carries only the report lines.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug_flag, config_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}
