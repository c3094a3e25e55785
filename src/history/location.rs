//! Token extraction from visible locations.

use url::Url;

/// Extract the routing token from a location.
///
/// Accepts an absolute URL (`https://app/#pages/5/`), a bare fragment
/// (`#pages/5/`) or a token as-is. Everything after the first `#` is the
/// token; an absolute URL without a fragment yields the empty token.
pub fn token_from_location(location: &str) -> String {
    let location = location.trim();

    if location.contains("://") {
        if let Ok(url) = Url::parse(location) {
            return url.fragment().unwrap_or_default().to_string();
        }
    }

    match location.split_once('#') {
        Some((_, fragment)) => fragment.to_string(),
        None => location.to_string(),
    }
}
