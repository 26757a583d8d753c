//! Bounded-history directory-state tracking.
//!
//! dirscope scans a single directory level into immutable snapshots of file
//! metadata and retains a capacity-limited, newest-first history of them.
//! Callers select snapshots by index and look entries up by name; dropping
//! the history releases everything it retained.

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod report;
pub mod scan;
pub mod snapshot;

pub use error::{Error, Result};
