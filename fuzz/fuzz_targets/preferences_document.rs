#![no_main]

use libfuzzer_sys::fuzz_target;
use surf_preferences::{to_pretty_json, Preferences};

fuzz_target!(|data: &[u8]| {
    // Any document that parses must survive a save/load cycle
    if let Ok(prefs) = serde_json::from_slice::<Preferences>(data) {
        let Ok(bytes) = to_pretty_json(&prefs) else {
            return;
        };
        let reloaded: Preferences =
            serde_json::from_slice(&bytes).expect("saved document must parse");
        assert_eq!(reloaded, prefs);
    }
});
