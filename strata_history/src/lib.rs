// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata History: bounded undo/redo over whole-state snapshots.
//!
//! [`History`] stores complete copies of some state `T` rather than
//! individual edits. Before each undoable change the caller pushes the
//! current state; undo and redo then swap the current state with a stored
//! snapshot. Snapshots are cheap when `T` shares unchanged data between
//! clones (for example through copy-on-write buffers).
//!
//! ## Example
//!
//! ```rust
//! use strata_history::History;
//!
//! let mut history = History::new(2);
//! let mut doc = 1;
//!
//! history.push(&doc);
//! doc = 2;
//! history.push(&doc);
//! doc = 3;
//!
//! doc = history.undo(&doc).unwrap();
//! assert_eq!(doc, 2);
//! doc = history.redo(&doc).unwrap();
//! assert_eq!(doc, 3);
//!
//! // Capacity 2: the oldest snapshot is evicted.
//! history.push(&doc);
//! assert_eq!(history.undo_len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;

/// Default number of undo snapshots kept.
pub const DEFAULT_CAPACITY: usize = 20;

/// Bounded undo/redo stacks of full snapshots.
///
/// Both stacks keep the most recent snapshot at the front. The undo stack
/// never holds more than [`capacity`](Self::capacity) entries; pushing past
/// it silently drops the oldest one. Any push clears the redo stack.
#[derive(Clone, Debug)]
pub struct History<T> {
    capacity: usize,
    undo: VecDeque<T>,
    redo: VecDeque<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> History<T> {
    /// Creates an empty history keeping at most `capacity` undo snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            undo: VecDeque::new(),
            redo: VecDeque::new(),
        }
    }

    /// Maximum number of undo snapshots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, dropping the oldest undo snapshots if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.undo.truncate(capacity);
        self.redo.truncate(capacity);
    }

    /// Returns `true` if [`undo`](Self::undo) would succeed.
    #[must_use]
    pub fn has_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if [`redo`](Self::redo) would succeed.
    #[must_use]
    pub fn has_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo snapshots.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo snapshots.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl<T: Clone> History<T> {
    /// Records `current` as the state to return to, and clears redo.
    pub fn push(&mut self, current: &T) {
        self.redo.clear();
        self.push_undo(current.clone());
    }

    /// Steps back one snapshot.
    ///
    /// `current` is saved for [`redo`](Self::redo) and the previous snapshot
    /// is returned for the caller to install. Returns `None`, leaving both
    /// stacks unchanged, when there is nothing to undo.
    pub fn undo(&mut self, current: &T) -> Option<T> {
        let previous = self.undo.pop_front()?;
        self.redo.push_front(current.clone());
        Some(previous)
    }

    /// Steps forward one snapshot; the inverse of [`undo`](Self::undo).
    pub fn redo(&mut self, current: &T) -> Option<T> {
        let next = self.redo.pop_front()?;
        self.push_undo(current.clone());
        Some(next)
    }

    fn push_undo(&mut self, snapshot: T) {
        if self.capacity == 0 {
            return;
        }
        self.undo.push_front(snapshot);
        self.undo.truncate(self.capacity);
    }
}
