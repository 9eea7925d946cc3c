//! Browsing history
//!
//! History is an append-only list of visited URLs in visit order. It is
//! never deduplicated or trimmed; a private-mode switch suppresses
//! recording for the rest of the session.

use serde::{Deserialize, Serialize};

/// Ordered log of visited URLs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    /// Visited URLs, oldest first
    #[serde(rename = "history")]
    entries: Vec<String>,
    /// Session-only switch, never written to disk
    #[serde(skip)]
    private_mode: bool,
}

impl HistoryLog {
    /// Create a history log from existing entries
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self {
            entries,
            private_mode: false,
        }
    }

    /// Record a visit.
    ///
    /// Returns false without touching the log while private mode is on.
    pub fn append(&mut self, url: impl Into<String>) -> bool {
        if self.private_mode {
            return false;
        }
        self.entries.push(url.into());
        true
    }

    /// Drop the most recent entry
    pub(crate) fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// All entries, most recent last
    pub fn list(&self) -> &[String] {
        &self.entries
    }

    /// All entries, most recent first
    pub fn recent_first(&self) -> Vec<String> {
        self.entries.iter().rev().cloned().collect()
    }

    /// Turn history suppression on or off
    pub fn set_private_mode(&mut self, enabled: bool) {
        self.private_mode = enabled;
    }

    /// Check whether history suppression is on
    pub fn is_private(&self) -> bool {
        self.private_mode
    }

    /// Get total number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The private-mode switch is session state, not part of the document.
impl PartialEq for HistoryLog {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut log = HistoryLog::default();
        for i in 0..50 {
            assert!(log.append(format!("http://www.site{}.com", i)));
        }

        assert_eq!(log.len(), 50);
        assert_eq!(log.list()[0], "http://www.site0.com");
        assert_eq!(log.list()[49], "http://www.site49.com");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut log = HistoryLog::default();
        log.append("http://www.a.com");
        log.append("http://www.a.com");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_private_mode_suppresses_append() {
        let mut log = HistoryLog::from_entries(vec!["http://www.a.com".into()]);
        log.set_private_mode(true);

        assert!(!log.append("http://www.secret.com"));
        assert_eq!(log.list(), ["http://www.a.com".to_string()]);

        log.set_private_mode(false);
        assert!(log.append("http://www.b.com"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_recent_first() {
        let log = HistoryLog::from_entries(vec!["first".into(), "second".into()]);
        assert_eq!(log.recent_first(), vec!["second".to_string(), "first".to_string()]);
    }

    #[test]
    fn test_private_flag_not_serialized() {
        let mut log = HistoryLog::from_entries(vec!["http://www.a.com".into()]);
        log.set_private_mode(true);

        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"{"history":["http://www.a.com"]}"#);

        let restored: HistoryLog = serde_json::from_str(&json).unwrap();
        assert!(!restored.is_private());
        assert_eq!(restored, log);
    }
}
