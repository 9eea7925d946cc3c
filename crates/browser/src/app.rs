//! Browser shell state and intent dispatch
//!
//! [`Browser`] owns everything a session needs: the preference store, the
//! tabs with their engine views, the completion pool and the appearance.
//! User intents go through [`Browser::dispatch`]; engine notifications go
//! through [`Browser::handle_event`] or [`Browser::pump_events`].

use std::collections::BTreeSet;

use surf_preferences::{normalize, AutocompleteIndex, PreferenceStore};

use crate::engine::{Engine, ProfilePolicy, ViewEvent, WebView};
use crate::error::{BrowserError, BrowserResult};
use crate::tabs::{tab_label, TabSet, NEW_TAB_LABEL};
use crate::theme::{Appearance, ChromePalette};
use crate::ui::Intent;

/// Label of the tab opened at startup
const HOME_TAB_LABEL: &str = "Homepage";

/// Result of a dispatched intent the front end may need to show
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing to display
    Done,
    /// History for the viewer, most recent first
    History(Vec<String>),
    /// New zoom factor after a zoom step
    Zoom(f64),
    /// URL that was bookmarked
    Bookmarked(String),
    /// Index of a newly opened tab
    TabOpened(usize),
}

/// Main Surf browser shell
pub struct Browser<E: Engine> {
    engine: E,
    store: PreferenceStore,
    tabs: TabSet<E::View>,
    completer: AutocompleteIndex,
    address_bar: String,
    appearance: Appearance,
}

impl<E: Engine> Browser<E> {
    /// Create the shell with the default engine profile
    pub fn new(engine: E, store: PreferenceStore) -> Self {
        Self::with_profile(engine, store, &ProfilePolicy::default())
    }

    /// Create the shell, apply `profile` and open the home page
    pub fn with_profile(mut engine: E, store: PreferenceStore, profile: &ProfilePolicy) -> Self {
        log::info!("Starting Surf v{}", env!("CARGO_PKG_VERSION"));
        engine.apply_profile(profile);

        let completer = AutocompleteIndex::new(store.history(), store.bookmarks());
        let mut browser = Self {
            engine,
            store,
            tabs: TabSet::new(),
            completer,
            address_bar: String::new(),
            appearance: Appearance::Light,
        };

        let home = browser.store.home().to_string();
        browser.open_tab(&home, HOME_TAB_LABEL);
        browser
    }

    /// Handle a user intent
    pub fn dispatch(&mut self, intent: Intent) -> BrowserResult<Outcome> {
        log::debug!("Dispatching {:?}", intent);
        match intent {
            Intent::Navigate(text) => {
                let url = normalize(&text);
                self.current_view_mut()?.set_url(&url);
            }
            Intent::Home => {
                let home = self.store.home().to_string();
                self.current_view_mut()?.set_url(&home);
            }
            Intent::Back => self.current_view_mut()?.back(),
            Intent::Forward => self.current_view_mut()?.forward(),
            Intent::Reload => self.current_view_mut()?.reload(),
            Intent::NewTab(url) => {
                let url = match url {
                    Some(text) => normalize(&text),
                    None => self.store.home().to_string(),
                };
                let index = self.open_tab(&url, NEW_TAB_LABEL);
                return Ok(Outcome::TabOpened(index));
            }
            Intent::CloseTab(index) => {
                self.tabs.close(index)?;
                self.sync_address_bar();
            }
            Intent::SwitchTab(index) => {
                self.tabs.switch_to(index)?;
                self.sync_address_bar();
            }
            Intent::Bookmark => {
                let url = self.current_view_mut()?.current_url();
                if url.is_empty() {
                    log::warn!("Nothing to bookmark, current tab has no page");
                    return Ok(Outcome::Done);
                }
                self.store.add_bookmark(&url)?;
                self.rebuild_completions();
                return Ok(Outcome::Bookmarked(url));
            }
            Intent::ShowHistory => return Ok(Outcome::History(self.history_view())),
            Intent::OpenHistoryItem(index) => {
                let url = self
                    .history_view()
                    .into_iter()
                    .nth(index)
                    .ok_or(BrowserError::HistoryIndex(index))?;
                self.current_view_mut()?.set_url(&url);
            }
            Intent::ZoomIn => {
                let factor = self.store.zoom_in()?;
                self.current_view_mut()?.set_zoom_factor(factor);
                return Ok(Outcome::Zoom(factor));
            }
            Intent::ZoomOut => {
                let factor = self.store.zoom_out()?;
                self.current_view_mut()?.set_zoom_factor(factor);
                return Ok(Outcome::Zoom(factor));
            }
            Intent::SetPrivateMode(enabled) => self.store.set_private_mode(enabled),
            Intent::SetDarkMode(enabled) => {
                self.appearance = Appearance::from_dark(enabled);
                let script = self.appearance.page_script();
                self.current_view_mut()?.run_script(&script);
            }
        }
        Ok(Outcome::Done)
    }

    /// React to a notification from the view in tab `index`
    pub fn handle_event(&mut self, index: usize, event: ViewEvent) -> BrowserResult<()> {
        match event {
            ViewEvent::UrlChanged(url) => {
                if index == self.tabs.current_index() {
                    self.address_bar = url.clone();
                }
                let tab = self
                    .tabs
                    .get_mut(index)
                    .ok_or(BrowserError::TabNotFound(index))?;
                tab.set_label(tab_label(&url));

                if self.store.append_history(&url)? {
                    self.rebuild_completions();
                }
            }
            ViewEvent::LoadFinished => {
                let factor = self.store.zoom_factor();
                self.tabs
                    .get_mut(index)
                    .ok_or(BrowserError::TabNotFound(index))?
                    .view_mut()
                    .set_zoom_factor(factor);
            }
        }
        Ok(())
    }

    /// Drain queued notifications from every view. Returns how many were handled.
    ///
    /// Every drained event is handled even when an earlier one fails; the
    /// first failure is returned once the queue is empty.
    pub fn pump_events(&mut self) -> BrowserResult<usize> {
        let mut pending = Vec::new();
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            while let Some(event) = tab.view_mut().poll_event() {
                pending.push((index, event));
            }
        }

        let handled = pending.len();
        let mut first_error = None;
        for (index, event) in pending {
            if let Err(e) = self.handle_event(index, event) {
                log::warn!("Failed to handle event for tab {}: {}", index, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(handled),
        }
    }

    /// Completion candidates for the address bar
    pub fn completions(&self) -> &BTreeSet<String> {
        self.completer.candidates()
    }

    /// Candidates matching what the user has typed so far
    pub fn complete(&self, prefix: &str, limit: usize) -> Vec<&str> {
        self.completer.complete(prefix, limit)
    }

    /// History for the viewer, most recent first
    pub fn history_view(&self) -> Vec<String> {
        self.store.history().recent_first()
    }

    /// Text shown in the address bar
    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn tabs(&self) -> &TabSet<E::View> {
        &self.tabs
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Colours for the toolkit to apply to the chrome
    pub fn chrome_palette(&self) -> Option<ChromePalette> {
        self.appearance.chrome_palette()
    }

    pub fn is_private(&self) -> bool {
        self.store.is_private()
    }

    fn open_tab(&mut self, url: &str, label: &str) -> usize {
        let mut view = self.engine.create_view();
        view.set_url(url);
        let index = self.tabs.add(view, label);
        self.sync_address_bar();
        index
    }

    fn current_view_mut(&mut self) -> BrowserResult<&mut E::View> {
        let index = self.tabs.current_index();
        self.tabs
            .current_mut()
            .map(|tab| tab.view_mut())
            .ok_or(BrowserError::TabNotFound(index))
    }

    fn sync_address_bar(&mut self) {
        if let Some(tab) = self.tabs.current() {
            self.address_bar = tab.view().current_url();
        }
    }

    fn rebuild_completions(&mut self) {
        self.completer
            .rebuild(self.store.history(), self.store.bookmarks());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessEngine;
    use surf_preferences::Preferences;
    use tempfile::tempdir;

    fn browser(dir: &std::path::Path) -> Browser<HeadlessEngine> {
        let store = PreferenceStore::open(dir.join("preference.json")).unwrap();
        let mut browser = Browser::new(HeadlessEngine::new(), store);
        browser.pump_events().unwrap();
        browser
    }

    #[test]
    fn test_startup_opens_home() {
        let dir = tempdir().unwrap();
        let browser = browser(dir.path());

        assert_eq!(browser.tabs().len(), 1);
        assert_eq!(browser.address_bar(), surf_preferences::DEFAULT_HOME);
        assert_eq!(browser.tabs().current().unwrap().label(), "google");
        assert!(browser.engine().profile().is_some());
        assert_eq!(browser.history_view(), vec![surf_preferences::DEFAULT_HOME.to_string()]);
    }

    #[test]
    fn test_navigate_normalizes_once() {
        let dir = tempdir().unwrap();
        let mut browser = browser(dir.path());

        browser.dispatch(Intent::Navigate("example.com".into())).unwrap();
        assert_eq!(browser.pump_events().unwrap(), 2);

        assert_eq!(browser.address_bar(), "http://www.example.com");
        assert_eq!(browser.store().history().len(), 2);
        assert!(browser.completions().contains("example.com"));
    }

    #[test]
    fn test_private_session_writes_nothing() {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::with_preferences(dir.path().join("p.json"), Preferences::default());
        let mut browser = Browser::new(HeadlessEngine::new(), store);
        browser.dispatch(Intent::SetPrivateMode(true)).unwrap();
        browser.pump_events().unwrap();

        assert!(browser.is_private());
        assert!(browser.store().history().is_empty());
        assert!(!dir.path().join("p.json").exists());
    }

    #[test]
    fn test_failed_save_still_handles_every_event() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let mut prefs = Preferences::default();
        prefs.settings.zoom_factor = 2.0;
        let store = PreferenceStore::with_preferences(blocker.join("p.json"), prefs);
        let mut browser = Browser::new(HeadlessEngine::new(), store);
        browser.dispatch(Intent::NewTab(Some("a.com".into()))).unwrap();

        let err = browser.pump_events().unwrap_err();
        assert!(matches!(err, BrowserError::Preferences(_)));
        assert_eq!(browser.pump_events().unwrap(), 0);

        let zooms: Vec<f64> = browser.tabs().iter().map(|t| t.view().zoom_factor()).collect();
        assert_eq!(zooms, vec![2.0, 2.0]);
        let labels: Vec<&str> = browser.tabs().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["google", "a"]);

        // Memory, disk and completions agree that nothing was recorded
        assert!(browser.store().history().is_empty());
        assert!(browser.completions().is_empty());
        assert!(!blocker.join("p.json").exists());
    }
}
