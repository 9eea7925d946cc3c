//! Address-bar input normalisation

/// Schemes that are passed through untouched
const KNOWN_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Turn typed address-bar text into a fully qualified URL.
///
/// Text that already carries an `http://` or `https://` scheme is returned
/// as typed. Anything else gets a `www.` prefix (unless present) and an
/// `http://` scheme. The result is not validated further.
pub fn normalize(input: &str) -> String {
    let input = input.trim();

    if has_scheme(input) {
        return input.to_string();
    }

    if input.starts_with("www.") {
        format!("http://{}", input)
    } else {
        format!("http://www.{}", input)
    }
}

/// Check for an explicit `http://` or `https://` prefix, ignoring case
pub fn has_scheme(input: &str) -> bool {
    KNOWN_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .map(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .unwrap_or(false)
    })
}
