#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use surf_preferences::candidates;

#[derive(Debug, Arbitrary)]
struct PoolInput {
    history: Vec<String>,
    bookmarks: Vec<String>,
}

fuzz_target!(|input: PoolInput| {
    let pool = candidates(
        input.history.iter().map(String::as_str),
        input.bookmarks.iter().map(String::as_str),
    );

    // Every stored URL is offered as typed
    for url in input.history.iter().chain(&input.bookmarks) {
        assert!(pool.contains(url));
    }
});
