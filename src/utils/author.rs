use url::Url;

/// Placeholder identity scheme: the author display fields are computed
/// deterministically from the opaque author id instead of being looked up
/// from a user registry. A real deployment would call an identity service
/// here.

const AVATAR_ENDPOINT: &str = "https://ui-avatars.com/api/";

pub fn derive_username(author_id: &str) -> String {
    format!("user_{}", last_chars(author_id, 8))
}

pub fn derive_display_name(author_id: &str) -> String {
    format!("Usuario {}", last_chars(author_id, 4))
}

pub fn derive_avatar_url(author_id: &str) -> String {
    let mut url = Url::parse(AVATAR_ENDPOINT).expect("avatar endpoint is a valid URL");
    url.query_pairs_mut()
        .append_pair("name", &derive_display_name(author_id))
        .append_pair("background", "random");
    url.to_string()
}

/// Last `n` characters of `s`, or the whole string when it is shorter.
fn last_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n - 1) {
        Some((index, _)) => &s[index..],
        None => s,
    }
}
