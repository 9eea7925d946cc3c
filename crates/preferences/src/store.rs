//! Loading and saving the preferences document
//!
//! [`PreferenceStore`] owns the loaded document and its file location.
//! Every mutating call rewrites the whole file before returning, so the
//! document on disk always matches memory once a call succeeds.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::bookmarks::BookmarkSet;
use crate::error::{PreferenceError, PreferenceResult};
use crate::history::HistoryLog;
use crate::settings::{clamp_zoom, Preferences, ZOOM_STEP};

/// Default file name, relative to the working directory
pub const DEFAULT_PREFERENCES_FILE: &str = "preference.json";

/// Read and parse a preferences document.
///
/// A missing, unreadable or malformed file is a
/// [`PreferenceError::Config`].
pub fn load_preferences(path: &Path) -> PreferenceResult<Preferences> {
    let content = fs::read_to_string(path).map_err(|e| PreferenceError::config(path, e))?;
    serde_json::from_str(&content).map_err(|e| PreferenceError::config(path, e))
}

/// Serialize a preferences document as indented JSON
pub fn to_pretty_json(prefs: &Preferences) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    prefs.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write a preferences document over `path`.
///
/// The document goes to a sibling `<name>.tmp` file first and is renamed
/// into place once synced. A failed write removes the temporary file.
pub fn save_preferences(path: &Path, prefs: &Preferences) -> PreferenceResult<()> {
    let content = to_pretty_json(prefs)
        .map_err(|e| PreferenceError::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PreferenceError::io(parent, e))?;
    }

    let tmp = temp_path(path);
    if let Err(e) = write_synced(&tmp, &content) {
        discard_temp(&tmp);
        return Err(PreferenceError::io(&tmp, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        discard_temp(&tmp);
        return Err(PreferenceError::io(path, e));
    }

    log::debug!("Saved preferences to {}", path.display());
    Ok(())
}

/// Temporary file for `path`: the full file name with `.tmp` appended
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

fn discard_temp(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            log::warn!("Failed to remove {}: {}", path.display(), e);
        }
    }
}

/// Preferences document bound to its file
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PreferenceStore {
    /// Load an existing preferences file.
    ///
    /// Fails with [`PreferenceError::Config`] if the file is missing.
    pub fn load(path: impl Into<PathBuf>) -> PreferenceResult<Self> {
        let path = path.into();
        let mut prefs = load_preferences(&path)?;
        prefs.sanitize();
        log::info!(
            "Loaded preferences from {} ({} history entries, {} bookmarks)",
            path.display(),
            prefs.history.len(),
            prefs.bookmarks.len()
        );
        Ok(Self { path, prefs })
    }

    /// Load the preferences file, creating a default one on first run.
    ///
    /// Only a missing file is replaced; a file that exists but cannot be
    /// parsed is still an error.
    pub fn open(path: impl Into<PathBuf>) -> PreferenceResult<Self> {
        let path = path.into();
        if path.exists() {
            return Self::load(path);
        }

        log::info!("No preferences at {}, creating defaults", path.display());
        let store = Self {
            path,
            prefs: Preferences::default(),
        };
        store.save()?;
        Ok(store)
    }

    /// Wrap an in-memory document without touching disk
    pub fn with_preferences(path: impl Into<PathBuf>, mut prefs: Preferences) -> Self {
        prefs.sanitize();
        Self {
            path: path.into(),
            prefs,
        }
    }

    /// Write the current document to disk
    pub fn save(&self) -> PreferenceResult<()> {
        save_preferences(&self.path, &self.prefs)
    }

    /// Location of the preferences file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current document
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn home(&self) -> &str {
        &self.prefs.settings.home
    }

    pub fn zoom_factor(&self) -> f64 {
        self.prefs.settings.zoom_factor
    }

    pub fn history(&self) -> &HistoryLog {
        &self.prefs.history
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.prefs.bookmarks
    }

    /// Apply a change to the document and save it
    pub fn update<F>(&mut self, updater: F) -> PreferenceResult<()>
    where
        F: FnOnce(&mut Preferences),
    {
        updater(&mut self.prefs);
        self.prefs.sanitize();
        self.save()
    }

    /// Record a visit and save.
    ///
    /// In private mode nothing is recorded and nothing is written; the
    /// return value tells whether the visit was recorded. If the save
    /// fails the visit is dropped again so memory matches the file.
    pub fn append_history(&mut self, url: &str) -> PreferenceResult<bool> {
        if !self.prefs.history.append(url) {
            log::debug!("Private mode, not recording {}", url);
            return Ok(false);
        }
        if let Err(e) = self.save() {
            self.prefs.history.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Bookmark a URL and save. A new bookmark is dropped again if the save fails.
    pub fn add_bookmark(&mut self, url: &str) -> PreferenceResult<()> {
        let added = self.prefs.bookmarks.add(url);
        if let Err(e) = self.save() {
            if added {
                self.prefs.bookmarks.remove(url);
            }
            return Err(e);
        }
        if added {
            log::info!("Bookmarked {}", url);
        }
        Ok(())
    }

    /// Turn history suppression on or off for this session
    pub fn set_private_mode(&mut self, enabled: bool) {
        self.prefs.history.set_private_mode(enabled);
        log::info!("Private mode: {}", if enabled { "On" } else { "Off" });
    }

    pub fn is_private(&self) -> bool {
        self.prefs.history.is_private()
    }

    /// Change the home page and save
    pub fn set_home(&mut self, url: &str) -> PreferenceResult<()> {
        self.prefs.settings.home = url.to_string();
        self.save()
    }

    /// Set the zoom factor, clamped, and save. Returns the stored factor.
    pub fn set_zoom_factor(&mut self, factor: f64) -> PreferenceResult<f64> {
        let clamped = clamp_zoom(factor);
        self.prefs.settings.zoom_factor = clamped;
        self.save()?;
        Ok(clamped)
    }

    /// Increase the zoom factor by one step
    pub fn zoom_in(&mut self) -> PreferenceResult<f64> {
        self.set_zoom_factor(round_step(self.zoom_factor() + ZOOM_STEP))
    }

    /// Decrease the zoom factor by one step
    pub fn zoom_out(&mut self) -> PreferenceResult<f64> {
        self.set_zoom_factor(round_step(self.zoom_factor() - ZOOM_STEP))
    }
}

// Keeps repeated 0.1 steps from accumulating float noise in the file.
fn round_step(factor: f64) -> f64 {
    (factor * 100.0).round() / 100.0
}
