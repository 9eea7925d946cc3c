//! Rendering engine collaborator
//!
//! The shell never renders, fetches or runs scripts itself. It drives an
//! embedded engine through these traits and reacts to the notifications
//! the engine hands back.

/// Notification raised by a view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The view's URL changed (navigation, redirect, back/forward)
    UrlChanged(String),
    /// The current page finished loading
    LoadFinished,
}

/// A single embedded web view
pub trait WebView {
    /// Start loading a URL
    fn set_url(&mut self, url: &str);

    /// Go back in the view's own navigation stack
    fn back(&mut self);

    /// Go forward in the view's own navigation stack
    fn forward(&mut self);

    /// Reload the current page
    fn reload(&mut self);

    /// Scale page content
    fn set_zoom_factor(&mut self, factor: f64);

    /// URL of the page currently shown
    fn current_url(&self) -> String;

    /// Run JavaScript in the current page
    fn run_script(&mut self, source: &str);

    /// Next pending notification, if the engine queues them
    fn poll_event(&mut self) -> Option<ViewEvent> {
        None
    }
}

/// HTTP cache behaviour requested from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    /// Nothing is cached
    Disabled,
    /// Cache kept in memory for the session
    Memory,
}

/// Engine-wide profile applied once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePolicy {
    /// User agent sent with every request
    pub user_agent: String,
    /// HTTP cache behaviour
    pub cache: CacheMode,
    /// Whether cookies outlive the session
    pub persistent_cookies: bool,
}

impl Default for ProfilePolicy {
    fn default() -> Self {
        Self {
            user_agent: format!("Surf/{}", env!("CARGO_PKG_VERSION")),
            cache: CacheMode::Disabled,
            persistent_cookies: false,
        }
    }
}

/// Factory for views sharing one profile
pub trait Engine {
    type View: WebView;

    /// Apply cookie, cache and user-agent policy
    fn apply_profile(&mut self, profile: &ProfilePolicy);

    /// Create a new, empty view
    fn create_view(&mut self) -> Self::View;
}
