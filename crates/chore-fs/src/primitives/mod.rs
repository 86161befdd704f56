pub mod atomic_write;

pub use atomic_write::{AtomicWriteOptions, atomic_read, atomic_write};
