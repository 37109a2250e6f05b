// src/core/history.rs

use crate::constants::{HISTORY_CAPACITY, HISTORY_STORAGE_KEY};
use crate::system::KeyValueStorage;
use std::collections::VecDeque;

/// Recall position within the history buffer.
///
/// `Fresh` is the uncommitted input line; `Viewing(i)` points into the
/// buffer and is always within `[0, len - 1]`. The only transition back to
/// `Fresh` (other than a submit) is recalling next past the most recent
/// entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallCursor {
    Fresh,
    Viewing(usize),
}

/// What a forward recall produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallNext {
    /// Nothing to do: empty history or no recall in progress.
    Inactive,
    /// The draft should become this entry.
    Entry(String),
    /// Recall walked past the most recent entry: clear the draft.
    Cleared,
}

/// A bounded, ordered log of submitted command lines, oldest first.
///
/// Length never exceeds [`HISTORY_CAPACITY`]; insertion beyond capacity
/// evicts the oldest entry. Only submission mutates the entries, so recall
/// never observes the buffer changing under it.
#[derive(Debug, Default)]
pub struct HistoryBuffer {
    entries: VecDeque<String>,
    cursor: RecallCursor,
}

impl Default for RecallCursor {
    fn default() -> Self {
        Self::Fresh
    }
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the buffer from the persisted storage key. A missing key
    /// yields an empty buffer; an unreadable value is logged and discarded
    /// rather than failing session construction. Oversized persisted lists
    /// are truncated keeping the most recent entries.
    pub fn restore(storage: &dyn KeyValueStorage) -> Self {
        let mut buffer = Self::new();
        let Some(raw) = storage.get(HISTORY_STORAGE_KEY) else {
            return buffer;
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(lines) => {
                let skip = lines.len().saturating_sub(HISTORY_CAPACITY);
                buffer.entries = lines.into_iter().skip(skip).collect();
            }
            Err(e) => {
                log::warn!("Discarding unreadable command history: {e}");
            }
        }
        buffer
    }

    /// Writes the current entries back to storage. Persistence failures are
    /// logged and swallowed: losing history must never fail a submission.
    pub fn persist(&self, storage: &mut dyn KeyValueStorage) {
        let lines: Vec<&String> = self.entries.iter().collect();
        let encoded =
            serde_json::to_string(&lines).expect("a list of strings always serializes");
        if let Err(e) = storage.set(HISTORY_STORAGE_KEY, &encoded) {
            log::warn!("Failed to persist command history: {e}");
        }
    }

    /// Appends a submitted line, evicting the oldest entry beyond capacity,
    /// and resets the recall cursor to the fresh line.
    pub fn push(&mut self, line: &str) {
        self.entries.push_back(line.to_string());
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.cursor = RecallCursor::Fresh;
    }

    /// Steps the cursor toward older entries and returns the entry the draft
    /// should show. At the oldest entry the cursor stays put (no wraparound);
    /// with an empty history this is a no-op.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            RecallCursor::Fresh => self.entries.len() - 1,
            RecallCursor::Viewing(i) => i.saturating_sub(1),
        };
        self.cursor = RecallCursor::Viewing(index);
        self.entries.get(index).cloned()
    }

    /// Steps the cursor toward newer entries. Walking past the most recent
    /// entry returns [`RecallNext::Cleared`] and resets the cursor — the
    /// only transition back to the fresh line.
    pub fn recall_next(&mut self) -> RecallNext {
        let RecallCursor::Viewing(index) = self.cursor else {
            return RecallNext::Inactive;
        };
        if self.entries.is_empty() {
            return RecallNext::Inactive;
        }
        if index + 1 < self.entries.len() {
            self.cursor = RecallCursor::Viewing(index + 1);
            match self.entries.get(index + 1) {
                Some(entry) => RecallNext::Entry(entry.clone()),
                None => RecallNext::Inactive,
            }
        } else {
            self.cursor = RecallCursor::Fresh;
            RecallNext::Cleared
        }
    }

    pub fn cursor(&self) -> RecallCursor {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored lines, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
