//! Plain data passed into and out of a fetch.

pub mod options;
pub mod outcome;

pub use options::{FetchOptions, ProxySetting};
pub use outcome::FetchOutcome;
