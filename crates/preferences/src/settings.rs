//! The persisted preferences document
//!
//! The document keeps the shape of the original `preference.json` file:
//! a `settings` section holding the home page and zoom factor, a
//! `bookmarks` section and a `history` section.

use serde::{Deserialize, Serialize};

use crate::bookmarks::BookmarkSet;
use crate::history::HistoryLog;

/// Home page written into a freshly created document
pub const DEFAULT_HOME: &str = "https://www.google.com";

/// Zoom factor written into a freshly created document
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Smallest zoom factor the store accepts
pub const MIN_ZOOM: f64 = 0.25;

/// Largest zoom factor the store accepts
pub const MAX_ZOOM: f64 = 5.0;

/// Amount a single zoom-in or zoom-out step changes the factor by
pub const ZOOM_STEP: f64 = 0.1;

/// Root preferences document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// General browser settings
    pub settings: Settings,
    /// Bookmarked URLs
    pub bookmarks: BookmarkSet,
    /// Visited URLs, oldest first
    pub history: HistoryLog,
}

impl Preferences {
    /// Clamp values that are out of range after a hand edit of the file.
    ///
    /// Returns true if anything changed.
    pub fn sanitize(&mut self) -> bool {
        let clamped = clamp_zoom(self.settings.zoom_factor);
        if clamped != self.settings.zoom_factor {
            log::warn!(
                "Zoom factor {} out of range, using {}",
                self.settings.zoom_factor,
                clamped
            );
            self.settings.zoom_factor = clamped;
            return true;
        }
        false
    }
}

/// General settings section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Page opened by the home button and by new tabs
    pub home: String,
    /// Page zoom applied to every view
    pub zoom_factor: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME.to_string(),
            zoom_factor: DEFAULT_ZOOM,
        }
    }
}

/// Clamp a zoom factor into `[MIN_ZOOM, MAX_ZOOM]`.
///
/// NaN falls back to the default factor.
pub fn clamp_zoom(factor: f64) -> f64 {
    if factor.is_nan() {
        return DEFAULT_ZOOM;
    }
    factor.clamp(MIN_ZOOM, MAX_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_zoom_bounds() {
        assert_eq!(clamp_zoom(0.0), MIN_ZOOM);
        assert_eq!(clamp_zoom(-3.0), MIN_ZOOM);
        assert_eq!(clamp_zoom(12.0), MAX_ZOOM);
        assert_eq!(clamp_zoom(1.5), 1.5);
        assert_eq!(clamp_zoom(f64::NAN), DEFAULT_ZOOM);
    }

    #[test]
    fn test_sanitize_reports_changes() {
        let mut prefs = Preferences::default();
        assert!(!prefs.sanitize());

        prefs.settings.zoom_factor = -0.2;
        assert!(prefs.sanitize());
        assert_eq!(prefs.settings.zoom_factor, MIN_ZOOM);
    }

    #[test]
    fn test_document_shape() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(json["settings"]["home"], DEFAULT_HOME);
        assert_eq!(json["settings"]["zoom_factor"], 1.0);
        assert!(json["bookmarks"]["bookmarks"].as_object().unwrap().is_empty());
        assert!(json["history"]["history"].as_array().unwrap().is_empty());
    }
}
