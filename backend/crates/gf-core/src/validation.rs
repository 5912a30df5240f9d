//! Helpers for registration front ends.
//!
//! Ids end up in lookups and folder-style keys, so they are reduced to ASCII
//! alphanumerics. Names keep letters only, with whitespace runs turned into `_`.

/// Case-insensitive id equality (both sides uppercased).
pub fn ids_match(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

pub fn sanitize_id(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

pub fn sanitize_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("_")
}
