#![no_main]

use libfuzzer_sys::fuzz_target;
use surf_preferences::{has_scheme, normalize};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Limit input size to prevent excessive resource usage
        if input.len() > 10_000 {
            return;
        }

        let url = normalize(input);
        assert!(has_scheme(&url) || url.starts_with("http://"));
        // Normalising twice changes nothing
        assert_eq!(normalize(&url), url);
    }
});
