//! User intents coming from the browser chrome
//!
//! Toolbar buttons, the address bar and the history viewer all map onto an
//! [`Intent`]. A toolkit front end constructs intents directly; the headless
//! driver parses them from text commands.

use std::str::FromStr;

use crate::error::BrowserError;

/// Something the user asked the shell to do
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Address bar submitted with the given text
    Navigate(String),
    /// Home button
    Home,
    Back,
    Forward,
    Reload,
    /// Open a tab, on the home page when no URL is given
    NewTab(Option<String>),
    CloseTab(usize),
    SwitchTab(usize),
    /// Bookmark the current page
    Bookmark,
    /// Open the history viewer
    ShowHistory,
    /// Pick an entry from the history viewer (most recent first)
    OpenHistoryItem(usize),
    ZoomIn,
    ZoomOut,
    SetPrivateMode(bool),
    SetDarkMode(bool),
}

impl FromStr for Intent {
    type Err = BrowserError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };

        let unknown = || BrowserError::UnknownCommand(line.to_string());
        let index = |arg: Option<&str>| -> Result<usize, BrowserError> {
            arg.and_then(|a| a.parse().ok()).ok_or_else(unknown)
        };
        let switch = |arg: Option<&str>| -> Result<bool, BrowserError> {
            match arg {
                Some("on") | None => Ok(true),
                Some("off") => Ok(false),
                _ => Err(unknown()),
            }
        };

        let intent = match command.to_ascii_lowercase().as_str() {
            "go" | "open" => Intent::Navigate(arg.ok_or_else(unknown)?.to_string()),
            "home" => Intent::Home,
            "back" => Intent::Back,
            "forward" => Intent::Forward,
            "reload" => Intent::Reload,
            "new" => Intent::NewTab(arg.map(str::to_string)),
            "close" => Intent::CloseTab(index(arg)?),
            "tab" => Intent::SwitchTab(index(arg)?),
            "bookmark" => Intent::Bookmark,
            "history" => match arg {
                None => Intent::ShowHistory,
                Some(_) => Intent::OpenHistoryItem(index(arg)?),
            },
            "zoom+" | "zoom-in" => Intent::ZoomIn,
            "zoom-" | "zoom-out" => Intent::ZoomOut,
            "private" => Intent::SetPrivateMode(switch(arg)?),
            "dark" => Intent::SetDarkMode(switch(arg)?),
            _ => return Err(unknown()),
        };
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Intent {
        line.parse().unwrap()
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse("go example.com"), Intent::Navigate("example.com".into()));
        assert_eq!(parse("  OPEN   https://x.com  "), Intent::Navigate("https://x.com".into()));
        assert_eq!(parse("home"), Intent::Home);
        assert_eq!(parse("back"), Intent::Back);
        assert_eq!(parse("forward"), Intent::Forward);
        assert_eq!(parse("reload"), Intent::Reload);
    }

    #[test]
    fn test_parse_tabs() {
        assert_eq!(parse("new"), Intent::NewTab(None));
        assert_eq!(parse("new docs.rs"), Intent::NewTab(Some("docs.rs".into())));
        assert_eq!(parse("close 2"), Intent::CloseTab(2));
        assert_eq!(parse("tab 0"), Intent::SwitchTab(0));
    }

    #[test]
    fn test_parse_toggles_and_history() {
        assert_eq!(parse("private"), Intent::SetPrivateMode(true));
        assert_eq!(parse("private off"), Intent::SetPrivateMode(false));
        assert_eq!(parse("dark on"), Intent::SetDarkMode(true));
        assert_eq!(parse("history"), Intent::ShowHistory);
        assert_eq!(parse("history 3"), Intent::OpenHistoryItem(3));
        assert_eq!(parse("zoom+"), Intent::ZoomIn);
        assert_eq!(parse("zoom-out"), Intent::ZoomOut);
        assert_eq!(parse("bookmark"), Intent::Bookmark);
    }

    #[test]
    fn test_parse_errors() {
        for line in ["", "go", "close x", "tab", "dark maybe", "launch"] {
            assert!(
                matches!(line.parse::<Intent>(), Err(BrowserError::UnknownCommand(_))),
                "{:?} should not parse",
                line
            );
        }
    }
}
