use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use surf_browser::{Browser, HeadlessEngine, Intent, Outcome};
use surf_preferences::{PreferenceStore, DEFAULT_PREFERENCES_FILE};

/// Environment variable overriding the preferences location
const PREFERENCES_ENV: &str = "SURF_PREFERENCES";

/// Number of completions printed for `complete`
const COMPLETION_LIMIT: usize = 10;

fn preferences_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(PREFERENCES_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_FILE))
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let path = preferences_path();
    let store = PreferenceStore::open(&path)
        .with_context(|| format!("Failed to open preferences at {}", path.display()))?;

    let mut browser = Browser::new(HeadlessEngine::new(), store);
    if let Err(e) = browser.pump_events() {
        log::warn!("{}", e);
    }

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", browser.address_bar())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(' ').map_or((line, ""), |(c, a)| (c, a.trim())) {
            ("quit", _) | ("exit", _) => break,
            ("complete", prefix) => {
                for candidate in browser.complete(prefix, COMPLETION_LIMIT) {
                    writeln!(out, "  {}", candidate)?;
                }
                continue;
            }
            ("tabs", _) => {
                let current = browser.tabs().current_index();
                for (index, tab) in browser.tabs().iter().enumerate() {
                    let marker = if index == current { '*' } else { ' ' };
                    writeln!(out, "{} {} {}", marker, index, tab.label())?;
                }
                continue;
            }
            _ => {}
        }

        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match browser.dispatch(intent) {
            Ok(Outcome::History(entries)) => {
                for (index, url) in entries.iter().enumerate() {
                    writeln!(out, "{:>4} {}", index, url)?;
                }
            }
            Ok(Outcome::Zoom(factor)) => writeln!(out, "zoom {:.2}", factor)?,
            Ok(Outcome::Bookmarked(url)) => writeln!(out, "Bookmarked {}", url)?,
            Ok(Outcome::TabOpened(index)) => writeln!(out, "tab {}", index)?,
            Ok(Outcome::Done) => {}
            Err(e) => {
                log::warn!("{}", e);
                writeln!(out, "{}", e)?;
            }
        }

        if let Err(e) = browser.pump_events() {
            log::warn!("{}", e);
            writeln!(out, "{}", e)?;
        }
        writeln!(out, "{}", browser.address_bar())?;
    }

    Ok(())
}
