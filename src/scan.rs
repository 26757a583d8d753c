//! Single-level directory scanning.
//!
//! Walks exactly one directory level and captures per-entry metadata.
//! Entries whose metadata cannot be retrieved are skipped, never fatal;
//! only the directory itself becoming unreadable is reported.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::Error;

/// Maximum captured name length in bytes; longer names are truncated.
pub const NAME_MAX: usize = 255;

/// Captured metadata for one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    /// Entry name, at most [`NAME_MAX`] bytes.
    pub name: String,
    /// Creation timestamp in unix seconds (`st_ctime` on unix).
    pub created_at: i64,
    /// Filesystem-stable identifier (inode on unix).
    pub id: u64,
}

/// Everything one scan round produced.
#[derive(Debug)]
pub struct ScanOutcome {
    pub entries: Vec<EntryRecord>,
    /// Entries dropped because their metadata could not be retrieved.
    pub skipped: usize,
    pub diagnostics: Vec<String>,
    pub duration_ms: u128,
    pub peak_memory_bytes: Option<usize>,
}

/// Enumerates every entry of `root` without recursing into subdirectories.
///
/// Metadata retrieval failures (broken symlinks, permission errors, entries
/// removed mid-scan) skip the affected entry and continue. Failing to open
/// `root` itself yields [`Error::ScanUnavailable`].
pub fn scan(root: &Path, skip_hidden: bool) -> Result<ScanOutcome, Error> {
    let start = Instant::now();

    // walkdir yields no error when the root exists but is not a directory;
    // open it directly so that state is signaled too
    if let Err(source) = fs::read_dir(root) {
        return Err(Error::ScanUnavailable {
            path: root.to_path_buf(),
            source,
        });
    }

    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();
    let mut skipped = 0usize;

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for item in walker {
        let item = match item {
            Ok(item) => item,
            Err(e) if e.depth() == 0 || e.path() == Some(root) => {
                let msg = e.to_string();
                let source = e.into_io_error().unwrap_or_else(|| io::Error::other(msg));
                return Err(Error::ScanUnavailable {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                skipped += 1;
                let what = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "one entry".to_string());
                diagnostics.push(format!("skipped {what}: {e}"));
                continue;
            }
        };

        let name = truncate_name(&item.file_name().to_string_lossy());
        if skip_hidden && name.starts_with('.') {
            continue;
        }

        log::debug!("scanning {name}");

        // follows symlinks like stat(2); a broken link fails here and is skipped
        match fs::metadata(item.path()) {
            Ok(metadata) => entries.push(EntryRecord {
                name,
                created_at: created_timestamp(&metadata),
                id: entry_id(&metadata),
            }),
            Err(e) => {
                skipped += 1;
                diagnostics.push(format!("skipped {name}: {e}"));
                log::debug!("skipped {}: {e}", item.path().display());
            }
        }
    }

    // most recently enumerated entry first
    entries.reverse();

    Ok(ScanOutcome {
        entries,
        skipped,
        diagnostics,
        duration_ms: start.elapsed().as_millis(),
        peak_memory_bytes: memory_stats::memory_stats().map(|usage| usage.physical_mem),
    })
}

/// Truncates to at most [`NAME_MAX`] bytes without splitting a character.
fn truncate_name(name: &str) -> String {
    if name.len() <= NAME_MAX {
        return name.to_string();
    }

    let mut end = NAME_MAX;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}

#[cfg(unix)]
fn entry_id(metadata: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    metadata.ino()
}

#[cfg(not(unix))]
fn entry_id(_metadata: &fs::Metadata) -> u64 {
    0
}

#[cfg(unix)]
fn created_timestamp(metadata: &fs::Metadata) -> i64 {
    use std::os::unix::fs::MetadataExt;
    metadata.ctime()
}

#[cfg(not(unix))]
fn created_timestamp(metadata: &fs::Metadata) -> i64 {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
