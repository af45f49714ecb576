use super::*;

#[test]
fn fragment_link_yields_id_selector() {
    assert_eq!(fragment_selector("#catalog"), Some("#catalog"));
}

#[test]
fn bare_hash_is_not_a_target() {
    assert_eq!(fragment_selector("#"), None);
    assert_eq!(fragment_selector("#  "), None);
}

#[test]
fn non_fragment_links_are_ignored() {
    assert_eq!(fragment_selector("/cart"), None);
    assert_eq!(fragment_selector("https://example.com/#top"), None);
    assert_eq!(fragment_selector(""), None);
}
