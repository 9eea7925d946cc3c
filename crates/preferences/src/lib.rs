//! Surf Preferences Crate
//!
//! Persistence and derived data for the Surf browser shell: the preferences
//! document (home page, zoom factor, bookmarks, history), address-bar input
//! normalisation and the completion pool built from history and bookmarks.

pub mod autocomplete;
pub mod bookmarks;
pub mod error;
pub mod history;
pub mod normalize;
pub mod settings;
pub mod store;

pub use autocomplete::{candidates, strip_scheme, AutocompleteIndex};
pub use bookmarks::{BookmarkSet, BOOKMARK_MARKER};
pub use error::{PreferenceError, PreferenceResult};
pub use history::HistoryLog;
pub use normalize::{has_scheme, normalize};
pub use settings::{
    clamp_zoom, Preferences, Settings, DEFAULT_HOME, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
pub use store::{
    load_preferences, save_preferences, temp_path, to_pretty_json, PreferenceStore,
    DEFAULT_PREFERENCES_FILE,
};
