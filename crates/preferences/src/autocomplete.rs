//! Address-bar completion candidates
//!
//! The candidate pool is derived from history and bookmarks. Every stored
//! URL contributes three forms so that typing any of `http://www.a.com`,
//! `www.a.com` or `a.com` finds it:
//!
//! * the URL as stored
//! * the URL without its scheme (everything after the first `//`)
//! * the scheme-less form with every `www.` removed

use std::collections::BTreeSet;

use crate::bookmarks::BookmarkSet;
use crate::error::{PreferenceError, PreferenceResult};
use crate::history::HistoryLog;

/// Everything after the first `//` of a URL
pub fn strip_scheme(url: &str) -> PreferenceResult<&str> {
    url.split_once("//")
        .map(|(_, rest)| rest)
        .ok_or_else(|| PreferenceError::Format {
            url: url.to_string(),
        })
}

/// Build the candidate pool from history entries and bookmarked URLs.
///
/// URLs without a scheme separator are kept in their stored form but
/// contribute no derived forms.
pub fn candidates<'a, H, B>(history: H, bookmarks: B) -> BTreeSet<String>
where
    H: IntoIterator<Item = &'a str>,
    B: IntoIterator<Item = &'a str>,
{
    let urls: BTreeSet<&str> = history.into_iter().chain(bookmarks).collect();
    let mut pool = BTreeSet::new();

    for url in urls {
        pool.insert(url.to_string());

        let without_scheme = match strip_scheme(url) {
            Ok(rest) => rest,
            Err(e) => {
                log::warn!("Skipping completion forms: {}", e);
                continue;
            }
        };

        pool.insert(without_scheme.replace("www.", ""));
        pool.insert(without_scheme.to_string());
    }

    pool
}

/// Completion pool backing the address bar
#[derive(Debug, Clone, Default)]
pub struct AutocompleteIndex {
    candidates: BTreeSet<String>,
}

impl AutocompleteIndex {
    /// Create an index already built from history and bookmarks
    pub fn new(history: &HistoryLog, bookmarks: &BookmarkSet) -> Self {
        let mut index = Self::default();
        index.rebuild(history, bookmarks);
        index
    }

    /// Recompute the pool after history or bookmarks changed
    pub fn rebuild(&mut self, history: &HistoryLog, bookmarks: &BookmarkSet) -> &BTreeSet<String> {
        self.candidates = candidates(
            history.list().iter().map(String::as_str),
            bookmarks.urls(),
        );
        log::debug!("Rebuilt completion pool with {} candidates", self.candidates.len());
        &self.candidates
    }

    /// Current candidate pool
    pub fn candidates(&self) -> &BTreeSet<String> {
        &self.candidates
    }

    /// Candidates starting with `prefix`, ignoring case
    pub fn complete(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.candidates
            .iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&prefix))
            .map(String::as_str)
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pool(history: &[&str], bookmarks: &[&str]) -> BTreeSet<String> {
        candidates(history.iter().copied(), bookmarks.iter().copied())
    }

    #[test]
    fn test_derived_forms() {
        let result = pool(&["http://www.a.com"], &["http://b.com"]);
        let expected: BTreeSet<String> = [
            "http://www.a.com",
            "www.a.com",
            "a.com",
            "http://b.com",
            "b.com",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_every_www_is_removed() {
        let result = pool(&["https://www.a.com/www.b/page"], &[]);
        assert!(result.contains("www.a.com/www.b/page"));
        assert!(result.contains("a.com/b/page"));
    }

    #[test]
    fn test_overlapping_sources_deduplicate() {
        let result = pool(
            &["http://www.a.com", "http://www.a.com"],
            &["http://www.a.com"],
        );
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_malformed_entry_is_skipped() {
        let result = pool(&["about:blank", "http://www.a.com"], &["b.com"]);

        assert!(result.contains("about:blank"));
        assert!(result.contains("b.com"));
        assert!(result.contains("www.a.com"));
        assert!(result.contains("a.com"));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://x.com//y").unwrap(), "x.com//y");
        assert!(matches!(
            strip_scheme("x.com"),
            Err(PreferenceError::Format { .. })
        ));
    }

    #[test]
    fn test_index_complete() {
        let history = HistoryLog::from_entries(vec![
            "http://www.rust-lang.org".into(),
            "https://docs.rs".into(),
        ]);
        let mut bookmarks = BookmarkSet::default();
        bookmarks.add("http://www.Rustacean.net");

        let index = AutocompleteIndex::new(&history, &bookmarks);
        assert_eq!(index.complete("rust", 10), vec!["Rustacean.net", "rust-lang.org"]);
        assert_eq!(index.complete("www.rust-", 1), vec!["www.rust-lang.org"]);
        assert!(index.complete("gopher", 10).is_empty());
    }
}
