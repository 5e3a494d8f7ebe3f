//! Linear undo/redo over full-surface snapshots.

use crate::draw::Snapshot;
use std::collections::VecDeque;

/// Two stacks of immutable snapshots implementing single-branch undo/redo.
///
/// `past` is ordered oldest → newest and its last entry is what the surface
/// currently shows. `future` is ordered nearest-undo → farthest. Once the
/// surface has been initialized `past` always holds at least the initial state.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<Snapshot>,
    future: VecDeque<Snapshot>,
    /// Maximum entries kept in `past` (0 = unlimited)
    capacity: usize,
}

impl History {
    /// Creates an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `capacity` past snapshots.
    ///
    /// When a commit would exceed the bound the oldest snapshot is dropped.
    /// A capacity of 0 means unlimited; 1 is raised to 2 so that at least one
    /// undo step remains possible.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: if capacity == 1 { 2 } else { capacity },
            ..Self::default()
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// The snapshot currently on display (newest committed state).
    pub fn current(&self) -> Option<&Snapshot> {
        self.past.back()
    }

    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Records a new state. Any redo entries are discarded.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        self.future.clear();

        if self.capacity > 0 {
            while self.past.len() > self.capacity {
                self.past.pop_front();
                log::debug!("History capacity {} reached; evicted oldest snapshot", self.capacity);
            }
        }
    }

    /// Steps back one state and returns the snapshot to display.
    ///
    /// Returns `None` without changing anything when only the initial state remains.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        let undone = self.past.pop_back()?;
        self.future.push_front(undone);
        self.past.back()
    }

    /// Re-applies the nearest undone state and returns it.
    ///
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let redone = self.future.pop_front()?;
        self.past.push_back(redone);
        self.past.back()
    }

    /// Drops all history and starts over from `initial`.
    pub fn reset(&mut self, initial: Snapshot) {
        self.past.clear();
        self.future.clear();
        self.past.push_back(initial);
    }
}
