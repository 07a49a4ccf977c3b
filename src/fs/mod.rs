//! Filesystem helpers for writing output files.

mod atomic;

pub use atomic::write_atomic;
