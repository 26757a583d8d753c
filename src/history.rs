//! Bounded, newest-first history of snapshots.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

/// How many snapshots a history retains unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// A capacity-bounded run of snapshots for one directory.
///
/// The newest snapshot sits at index 0 and the oldest retained one at
/// `len() - 1`. Once the bound is reached, recording a new snapshot evicts
/// the oldest. The history owns its snapshots outright, so dropping it
/// releases every retained capture.
#[derive(Debug)]
pub struct History {
    root: PathBuf,
    capacity: usize,
    snapshots: VecDeque<Snapshot>,
}

impl History {
    /// Creates an empty history with [`DEFAULT_CAPACITY`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_capacity(root, DEFAULT_CAPACITY)
    }

    /// Creates an empty history bounded at `capacity` snapshots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a history that can hold nothing is a
    /// configuration bug, not a runtime condition.
    pub fn with_capacity(root: impl Into<PathBuf>, capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be at least 1");
        // no upfront allocation: `record` keeps the length bounded, and the
        // configured capacity may be far larger than ever gets used
        History {
            root: root.into(),
            capacity,
            snapshots: VecDeque::new(),
        }
    }

    /// The directory this history tracks.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Records a snapshot as the new front of the history.
    ///
    /// When the history is already full the oldest snapshot is evicted
    /// first and handed back to the caller; dropping the returned value
    /// releases it. The relative order of the retained snapshots never
    /// changes.
    pub fn record(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        let evicted = if self.snapshots.len() == self.capacity {
            self.snapshots.pop_back()
        } else {
            None
        };
        self.snapshots.push_front(snapshot);
        evicted
    }

    /// Borrows the snapshot at `index`, where 0 is the most recent.
    pub fn select(&self, index: usize) -> Result<&Snapshot> {
        self.snapshots.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.snapshots.len(),
        })
    }

    /// Iterates snapshots newest first, paired with their selectable index.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Snapshot)> {
        self.snapshots.iter().enumerate()
    }
}
