//! Tabs hosting one view each

use url::Url;
use uuid::Uuid;

use crate::error::{BrowserError, BrowserResult};

/// Label shown on a freshly opened tab
pub const NEW_TAB_LABEL: &str = "New Tab";

/// A tab and the view it hosts
#[derive(Debug)]
pub struct Tab<V> {
    id: Uuid,
    label: String,
    view: V,
}

impl<V> Tab<V> {
    fn new(view: V, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            view,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

/// Ordered tabs with one current tab
#[derive(Debug)]
pub struct TabSet<V> {
    tabs: Vec<Tab<V>>,
    current: usize,
}

impl<V> Default for TabSet<V> {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            current: 0,
        }
    }
}

impl<V> TabSet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab and make it current. Returns its index.
    pub fn add(&mut self, view: V, label: impl Into<String>) -> usize {
        self.tabs.push(Tab::new(view, label));
        self.current = self.tabs.len() - 1;
        self.current
    }

    /// Close a tab. The last remaining tab cannot be closed.
    pub fn close(&mut self, index: usize) -> BrowserResult<Tab<V>> {
        if index >= self.tabs.len() {
            return Err(BrowserError::TabNotFound(index));
        }
        if self.tabs.len() == 1 {
            return Err(BrowserError::LastTab);
        }

        let tab = self.tabs.remove(index);
        if self.current > index || self.current >= self.tabs.len() {
            self.current -= 1;
        }
        Ok(tab)
    }

    /// Make another tab current
    pub fn switch_to(&mut self, index: usize) -> BrowserResult<()> {
        if index >= self.tabs.len() {
            return Err(BrowserError::TabNotFound(index));
        }
        self.current = index;
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Tab<V>> {
        self.tabs.get(self.current)
    }

    pub fn current_mut(&mut self) -> Option<&mut Tab<V>> {
        self.tabs.get_mut(self.current)
    }

    pub fn get(&self, index: usize) -> Option<&Tab<V>> {
        self.tabs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tab<V>> {
        self.tabs.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab<V>> {
        self.tabs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tab<V>> {
        self.tabs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// Short tab label for a URL: the first domain label after any `www.`
///
/// `http://www.example.com/a` becomes `example`. IP hosts are shown whole
/// and URLs without a host keep their full text.
pub fn tab_label(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return url.to_string(),
    };

    if let Some(domain) = parsed.domain() {
        let trimmed = domain.strip_prefix("www.").unwrap_or(domain);
        if let Some(label) = trimmed.split('.').next().filter(|l| !l.is_empty()) {
            return label.to_string();
        }
        return domain.to_string();
    }

    parsed
        .host_str()
        .map(str::to_string)
        .unwrap_or_else(|| url.to_string())
}
