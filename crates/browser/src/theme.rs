//! Light and dark appearance
//!
//! Dark mode has two halves: a palette the toolkit applies to the browser
//! chrome, and a stylesheet injected into the page through the engine's
//! script hook.

/// Stylesheet injected into pages in dark mode
pub const DARK_PAGE_CSS: &str = "html, body { background-color: #333; color: #fff; }\na { color: #c7f0db; }";

/// Id of the injected `<style>` element, so removal only touches ours
pub const DARK_STYLE_ID: &str = "surf-dark-mode";

/// Browser appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }

    /// Script switching the current page to this appearance
    pub fn page_script(self) -> String {
        match self {
            Appearance::Dark => inject_style_script(DARK_STYLE_ID, DARK_PAGE_CSS),
            Appearance::Light => remove_style_script(DARK_STYLE_ID),
        }
    }

    /// Chrome colours, `None` meaning the toolkit default
    pub fn chrome_palette(self) -> Option<ChromePalette> {
        match self {
            Appearance::Dark => Some(ChromePalette::DARK),
            Appearance::Light => None,
        }
    }
}

/// Colours for toolbar, tab strip, address bar and lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromePalette {
    pub toolbar: &'static str,
    pub surface: &'static str,
    pub control: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub text: &'static str,
}

impl ChromePalette {
    pub const DARK: ChromePalette = ChromePalette {
        toolbar: "#555",
        surface: "#666",
        control: "#777",
        border: "#888",
        hover: "#999",
        text: "white",
    };
}

/// Script appending a `<style>` element with the given id and CSS
pub fn inject_style_script(id: &str, css: &str) -> String {
    // JSON string literals are valid JavaScript string literals
    let id = js_string(id);
    let css = js_string(css);
    format!(
        "(function() {{\n\
         var old = document.getElementById({id});\n\
         if (old) {{ old.remove(); }}\n\
         var style = document.createElement('style');\n\
         style.id = {id};\n\
         style.textContent = {css};\n\
         document.head.append(style);\n\
         }})();"
    )
}

/// Script removing the `<style>` element with the given id
pub fn remove_style_script(id: &str) -> String {
    let id = js_string(id);
    format!(
        "(function() {{\n\
         var style = document.getElementById({id});\n\
         if (style) {{ style.remove(); }}\n\
         }})();"
    )
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_script_carries_css() {
        let script = Appearance::Dark.page_script();
        assert!(script.contains("document.createElement('style')"));
        assert!(script.contains(r#"style.id = "surf-dark-mode";"#));
        assert!(script.contains(r#"background-color: #333; color: #fff; }\na { color: #c7f0db; }"#));
    }

    #[test]
    fn test_light_script_removes_only_ours() {
        let script = Appearance::Light.page_script();
        assert!(script.contains(r#"getElementById("surf-dark-mode")"#));
        assert!(!script.contains("getElementsByTagName"));
    }

    #[test]
    fn test_css_is_escaped() {
        let script = inject_style_script("x", "a::after { content: \"`'\"; }");
        assert!(script.contains(r#"style.textContent = "a::after { content: \"`'\"; }";"#));
    }

    #[test]
    fn test_palette() {
        assert_eq!(Appearance::from_dark(true).chrome_palette(), Some(ChromePalette::DARK));
        assert_eq!(Appearance::default().chrome_palette(), None);
        assert!(!Appearance::default().is_dark());
    }
}
