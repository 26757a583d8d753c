use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library.
///
/// Everything here is recoverable from the library's point of view; the
/// binary decides what is fatal (an unreadable directory at startup, a
/// broken `--config` file) and what gets reported and retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The tracked directory could not be opened for enumeration.
    #[error("cannot read directory {}: {source}", path.display())]
    ScanUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A snapshot index outside `0..len` was requested.
    #[error("snapshot index {index} is out of range, history holds {len} snapshot(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No entry with the given name exists in the selected snapshot.
    #[error("no entry named \"{name}\" in the selected snapshot")]
    EntryNotFound { name: String },

    /// The config file could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("config file {} is invalid: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
