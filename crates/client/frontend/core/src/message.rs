//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages produced from game events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    /// Gold, loot and victory.
    Success,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Action nonce the message belongs to, when known.
    pub nonce: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, nonce: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            nonce,
            level,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Error)
    }

    pub fn at(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::info(message));
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = MessageEntry>) {
        for entry in entries {
            self.push(entry);
        }
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_fall_off() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.recent(1).next().map(|e| e.text.as_str()), Some("three"));
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut log = MessageLog::new(0);
        log.extend([MessageEntry::warning("a"), MessageEntry::error("b")]);

        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().map(|e| e.level), Some(MessageLevel::Error));
    }
}
