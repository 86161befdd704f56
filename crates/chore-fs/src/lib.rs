//! Line-range stripping over atomically replaced text files.
//!
//! A file is read whole into a [`LineBuffer`], a [`StripPlan`] validates the
//! 1-based inclusive [`LineRange`] and captures its boundary lines, and the
//! remainder is written back through [`atomic_write`] so the target is never
//! left half-written.

mod error;
pub mod primitives;
mod strip;

pub use error::{Error, Result};
pub use primitives::{AtomicWriteOptions, atomic_read, atomic_write};
pub use strip::{
    BoundaryExpectations, LineBuffer, LineRange, StripOptions, StripPlan, StripReport, commit_strip,
    plan_strip, strip_lines,
};
