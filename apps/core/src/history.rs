//! Rolling conversation history.
//!
//! Keeps the most recent turns of one chat session in memory. Once the cap is
//! exceeded the oldest entries are dropped. Nothing is persisted.

use chrono::Utc;
use std::collections::VecDeque;

use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::models::{ConversationEntry, HistoryStats, Role};

/// FIFO buffer of conversation turns with a fixed capacity.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: VecDeque<ConversationEntry>,
    capacity: usize,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ConversationHistory {
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends a turn stamped with the current time, evicting the oldest
    /// entries while over capacity.
    pub fn push(&mut self, role: Role, message: impl Into<String>) {
        self.entries.push_back(ConversationEntry {
            role,
            message: message.into(),
            timestamp: Utc::now(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats {
            count: self.entries.len(),
            last_timestamp: self.entries.back().map(|e| e.timestamp),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ConversationEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The last `n` turns, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &ConversationEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }
}
