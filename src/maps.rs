use once_cell::sync::Lazy;
use reqwest::Url;

static MAPS_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("https://maps.apple.com/").expect("Failed to parse maps base URL"));

/// Deep-link for directions to a venue, with the location
/// percent-encoded into the `q` query parameter. Opening the URL is
/// the caller's best-effort concern.
pub fn directions_url(location: &str) -> Url {
    let mut url = MAPS_BASE.clone();
    url.query_pairs_mut().append_pair("q", location);
    url
}
