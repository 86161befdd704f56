use std::fmt;
use std::path::PathBuf;

/// What a completed request led to.
///
/// Transport failures are not outcomes; they surface as
/// [`FetchError`](crate::FetchError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// `200 OK`; the body now sits at `path`.
    Saved {
        url:   String,
        path:  PathBuf,
        bytes: u64,
    },

    /// Any other status; nothing was written.
    Rejected { url: String, status: u16 },
}

impl FetchOutcome {
    pub fn is_saved(&self) -> bool { matches!(self, FetchOutcome::Saved { .. }) }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Saved { url, path, .. } => {
                write!(f, "Successfully downloaded {url} to {}", path.display())
            }
            FetchOutcome::Rejected { status, .. } => write!(f, "Failed to download. Status: {status}"),
        }
    }
}
