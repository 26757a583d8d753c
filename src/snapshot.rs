//! Point-in-time snapshots of directory state.

use std::path::Path;

use chrono::Local;

use crate::scan::{self, EntryRecord};

/// An immutable capture of one directory's entries.
///
/// Entries sit in reverse enumeration order (most recently enumerated
/// first); the order is not guaranteed stable across scans. Fields are
/// private so a snapshot cannot change once constructed.
#[derive(Debug)]
pub struct Snapshot {
    entries: Vec<EntryRecord>,
    captured_at: i64,
    captured_label: String,
}

impl Snapshot {
    /// Wraps scanned entries and stamps the current wall-clock time.
    pub fn from_entries(entries: Vec<EntryRecord>) -> Self {
        let now = Local::now();
        Snapshot {
            entries,
            captured_at: now.timestamp(),
            captured_label: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn entries(&self) -> &[EntryRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capture time in unix seconds, for comparison.
    pub fn captured_at(&self) -> i64 {
        self.captured_at
    }

    /// Capture time formatted for display only.
    pub fn captured_label(&self) -> &str {
        &self.captured_label
    }

    /// Finds the first entry whose name matches exactly.
    ///
    /// Case-sensitive, no globbing. Duplicate names are legal within one
    /// snapshot; the first match wins.
    pub fn find_entry(&self, name: &str) -> Option<&EntryRecord> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

/// The result of one capture round: the snapshot plus scan observability.
#[derive(Debug)]
pub struct Capture {
    pub snapshot: Snapshot,
    /// Entries silently skipped because their metadata was unavailable.
    pub skipped: usize,
    pub diagnostics: Vec<String>,
    /// Set when the directory itself could not be read; the snapshot is
    /// then empty.
    pub unavailable: bool,
    pub duration_ms: u128,
    pub peak_memory_bytes: Option<usize>,
}

/// Scans `root` once and wraps the result in a timestamped [`Snapshot`].
///
/// A directory that has become unreadable since startup still produces a
/// zero-entry snapshot; the condition is reported through
/// [`Capture::unavailable`] instead of aborting the round, so the history
/// records "nothing seen this round" rather than skipping a beat.
pub fn capture(root: &Path, skip_hidden: bool) -> Capture {
    match scan::scan(root, skip_hidden) {
        Ok(outcome) => Capture {
            snapshot: Snapshot::from_entries(outcome.entries),
            skipped: outcome.skipped,
            diagnostics: outcome.diagnostics,
            unavailable: false,
            duration_ms: outcome.duration_ms,
            peak_memory_bytes: outcome.peak_memory_bytes,
        },
        Err(e) => {
            log::warn!("{e}");
            Capture {
                snapshot: Snapshot::from_entries(Vec::new()),
                skipped: 0,
                diagnostics: vec![e.to_string()],
                unavailable: true,
                duration_ms: 0,
                peak_memory_bytes: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, id: u64) -> EntryRecord {
        EntryRecord {
            name: name.to_string(),
            created_at: 1_700_000_000,
            id,
        }
    }

    #[test]
    fn find_entry_matches_exact_name() {
        let snapshot = Snapshot::from_entries(vec![entry("foo.txt", 1), entry("bar.txt", 2)]);

        assert_eq!(snapshot.find_entry("foo.txt").map(|e| e.id), Some(1));
        assert_eq!(snapshot.find_entry("bar.txt").map(|e| e.id), Some(2));
        assert!(snapshot.find_entry("missing.txt").is_none());
    }

    #[test]
    fn find_entry_is_case_sensitive() {
        let snapshot = Snapshot::from_entries(vec![entry("Readme", 1)]);

        assert!(snapshot.find_entry("readme").is_none());
        assert!(snapshot.find_entry("Readme").is_some());
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_match() {
        let snapshot = Snapshot::from_entries(vec![entry("twin", 10), entry("twin", 20)]);

        assert_eq!(snapshot.find_entry("twin").map(|e| e.id), Some(10));
    }

    #[test]
    fn empty_snapshot_is_still_stamped() {
        let snapshot = Snapshot::from_entries(Vec::new());

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert!(snapshot.captured_at() > 0);
        assert!(!snapshot.captured_label().is_empty());
    }

    #[test]
    fn capture_of_missing_directory_yields_empty_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let gone = dir.path().join("vanished");

        let capture = capture(&gone, false);
        assert!(capture.unavailable);
        assert!(capture.snapshot.is_empty());
        assert_eq!(capture.diagnostics.len(), 1);
    }
}
