//! Surf Browser - minimal browser shell
//!
//! Maps toolbar and address-bar intents onto an embedded web engine and
//! keeps home page, zoom, bookmarks and history in a preferences file.
//! The engine is reached only through the [`Engine`] and [`WebView`]
//! traits; [`HeadlessEngine`] runs the shell without a GUI toolkit.

pub mod app;
pub mod engine;
pub mod error;
pub mod headless;
pub mod tabs;
pub mod theme;
pub mod ui;

// Re-export the main application
pub use app::{Browser, Outcome};

// Re-export common types
pub use engine::{CacheMode, Engine, ProfilePolicy, ViewEvent, WebView};
pub use error::{BrowserError, BrowserResult};
pub use headless::{HeadlessEngine, HeadlessView};
pub use tabs::{tab_label, Tab, TabSet};
pub use theme::{Appearance, ChromePalette};
pub use ui::Intent;
