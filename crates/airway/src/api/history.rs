// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Session history of completed queries.
//!
//! Append-only within a session: entries are pushed as queries succeed and
//! listed newest-first. The only removal is wholesale clearing.

/// Append-only record of completed queries.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn record(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// Iterate entries newest-first. The iterator is lazy and a fresh one
    /// can be taken any number of times; listing never consumes entries.
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_listing() {
        let mut history = History::new();
        history.record("first".to_string());
        history.record("second".to_string());
        history.record("third".to_string());

        let listed: Vec<&str> = history.newest_first().collect();
        assert_eq!(listed, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_listing_is_restartable() {
        let mut history = History::new();
        history.record("only".to_string());

        assert_eq!(history.newest_first().count(), 1);
        // A second pass sees the same entries; nothing was consumed
        assert_eq!(history.newest_first().count(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record("one".to_string());
        history.record("two".to_string());
        assert_eq!(history.len(), 2);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.newest_first().count(), 0);

        // The history stays usable after clearing
        history.record("fresh".to_string());
        assert_eq!(history.newest_first().collect::<Vec<_>>(), vec!["fresh"]);
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.newest_first().next(), None);
    }
}
