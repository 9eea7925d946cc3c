//! Bookmarks
//!
//! Bookmarks map a URL to a marker value. The marker is always
//! [`BOOKMARK_MARKER`] today; the slot is kept so later versions can store
//! metadata without changing the document shape.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Marker stored against every bookmarked URL
pub const BOOKMARK_MARKER: &str = "bm";

/// Set of bookmarked URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkSet {
    #[serde(rename = "bookmarks")]
    entries: BTreeMap<String, String>,
}

impl BookmarkSet {
    /// Bookmark a URL. Adding an existing URL leaves the set unchanged.
    ///
    /// Returns true if the URL was not bookmarked before.
    pub fn add(&mut self, url: impl Into<String>) -> bool {
        self.entries
            .insert(url.into(), BOOKMARK_MARKER.to_string())
            .is_none()
    }

    pub(crate) fn remove(&mut self, url: &str) -> bool {
        self.entries.remove(url).is_some()
    }

    /// Check if a URL is bookmarked
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// All bookmarked URLs
    pub fn keys(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate bookmarked URLs without cloning
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Marker stored for a URL
    pub fn marker(&self, url: &str) -> Option<&str> {
        self.entries.get(url).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
