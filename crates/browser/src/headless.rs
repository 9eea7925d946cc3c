//! In-memory engine for running the shell without a GUI toolkit
//!
//! Navigation is simulated: every URL "loads" instantly and the view
//! queues the same notifications a real engine would emit.

use std::collections::VecDeque;

use crate::engine::{Engine, ProfilePolicy, ViewEvent, WebView};

/// Engine whose views only track state
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    profile: Option<ProfilePolicy>,
    views_created: usize,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile applied by the shell, if any
    pub fn profile(&self) -> Option<&ProfilePolicy> {
        self.profile.as_ref()
    }

    pub fn views_created(&self) -> usize {
        self.views_created
    }
}

impl Engine for HeadlessEngine {
    type View = HeadlessView;

    fn apply_profile(&mut self, profile: &ProfilePolicy) {
        log::debug!("Headless profile: {:?}", profile);
        self.profile = Some(profile.clone());
    }

    fn create_view(&mut self) -> HeadlessView {
        self.views_created += 1;
        HeadlessView::default()
    }
}

/// View with its own back/forward stack
#[derive(Debug, Clone)]
pub struct HeadlessView {
    stack: Vec<String>,
    position: usize,
    zoom_factor: f64,
    scripts: Vec<String>,
    pending: VecDeque<ViewEvent>,
}

impl Default for HeadlessView {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            position: 0,
            zoom_factor: 1.0,
            scripts: Vec::new(),
            pending: VecDeque::new(),
        }
    }
}

impl HeadlessView {
    /// Zoom factor last applied by the shell
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Scripts run in this view, oldest first
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    fn arrive(&mut self) {
        let url = self.current_url();
        self.pending.push_back(ViewEvent::UrlChanged(url));
        self.pending.push_back(ViewEvent::LoadFinished);
    }
}

impl WebView for HeadlessView {
    fn set_url(&mut self, url: &str) {
        if !self.stack.is_empty() {
            self.stack.truncate(self.position + 1);
        }
        self.stack.push(url.to_string());
        self.position = self.stack.len() - 1;
        self.arrive();
    }

    fn back(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.arrive();
        }
    }

    fn forward(&mut self) {
        if self.position + 1 < self.stack.len() {
            self.position += 1;
            self.arrive();
        }
    }

    fn reload(&mut self) {
        if !self.stack.is_empty() {
            self.pending.push_back(ViewEvent::LoadFinished);
        }
    }

    fn set_zoom_factor(&mut self, factor: f64) {
        self.zoom_factor = factor;
    }

    fn current_url(&self) -> String {
        self.stack.get(self.position).cloned().unwrap_or_default()
    }

    fn run_script(&mut self, source: &str) {
        self.scripts.push(source.to_string());
    }

    fn poll_event(&mut self) -> Option<ViewEvent> {
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(view: &mut HeadlessView) -> Vec<ViewEvent> {
        std::iter::from_fn(|| view.poll_event()).collect()
    }

    #[test]
    fn test_navigation_stack() {
        let mut view = HeadlessView::default();
        assert_eq!(view.current_url(), "");

        view.set_url("http://www.a.com");
        view.set_url("http://www.b.com");
        view.back();
        assert_eq!(view.current_url(), "http://www.a.com");

        view.forward();
        assert_eq!(view.current_url(), "http://www.b.com");

        view.back();
        view.set_url("http://www.c.com");
        view.forward();
        assert_eq!(view.current_url(), "http://www.c.com");
    }

    #[test]
    fn test_events_queued() {
        let mut view = HeadlessView::default();
        view.back();
        view.reload();
        assert!(drain(&mut view).is_empty());

        view.set_url("http://www.a.com");
        view.reload();
        assert_eq!(
            drain(&mut view),
            vec![
                ViewEvent::UrlChanged("http://www.a.com".into()),
                ViewEvent::LoadFinished,
                ViewEvent::LoadFinished,
            ]
        );
    }

    #[test]
    fn test_engine_records_profile() {
        let mut engine = HeadlessEngine::new();
        engine.apply_profile(&ProfilePolicy::default());
        let _view = engine.create_view();

        assert_eq!(engine.views_created(), 1);
        assert!(!engine.profile().unwrap().persistent_cookies);
    }
}
