// src/session/history.rs
// Bounded, most-recent-first record of successful generations

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

use crate::category::Category;

/// Entries retained per session
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: String,
    pub topic: String,
    pub category: Category,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    last_id: i64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation at the current time
    pub fn push(&mut self, topic: &str, category: Category, prompt: &str) -> &HistoryEntry {
        self.push_at(topic, category, prompt, Utc::now())
    }

    /// Record a generation at `timestamp`. Ids are epoch millis, bumped to stay unique.
    pub fn push_at(
        &mut self,
        topic: &str,
        category: Category,
        prompt: &str,
        timestamp: DateTime<Utc>,
    ) -> &HistoryEntry {
        let id = timestamp.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;

        self.entries.push_front(HistoryEntry {
            id: id.to_string(),
            topic: topic.to_string(),
            category,
            prompt: prompt.to_string(),
            timestamp,
        });
        self.entries.truncate(HISTORY_LIMIT);
        &self.entries[0]
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// 1-based position, most recent first
    pub fn nth(&self, position: usize) -> Option<&HistoryEntry> {
        position.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
