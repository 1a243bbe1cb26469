use cocoa_ranks::maps::directions_url;

#[test]
fn test_location_lands_in_query_parameter() {
    let url = directions_url("Angelina");

    assert_eq!(url.as_str(), "https://maps.apple.com/?q=Angelina");
    assert_eq!(url.host_str(), Some("maps.apple.com"));
}

#[test]
fn test_location_is_percent_encoded() {
    let url = directions_url("Café & Co");

    // Spaces, ampersands and non-ASCII all survive encoding
    assert_eq!(url.as_str(), "https://maps.apple.com/?q=Caf%C3%A9+%26+Co");

    let (key, value) = url.query_pairs().next().expect("one query pair");
    assert_eq!(key, "q");
    assert_eq!(value, "Café & Co");
}

#[test]
fn test_empty_location_still_builds() {
    let url = directions_url("");
    assert_eq!(url.as_str(), "https://maps.apple.com/?q=");
}
