use crate::{ids_match, sanitize_id, sanitize_name};

use proptest::prelude::*;

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #[test]
    fn given_alphanumeric_id_when_sanitized_then_preserved(input in "[a-zA-Z0-9]{1,40}") {
        prop_assert_eq!(sanitize_id(&input), input);
    }

    #[test]
    fn given_any_id_when_sanitized_then_only_ascii_alphanumerics_remain(input in ".{0,40}") {
        let sanitized = sanitize_id(&input);
        prop_assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn given_id_when_compared_with_its_lowercase_then_matches(input in "[a-zA-Z0-9]{1,20}") {
        prop_assert!(ids_match(&input, &input.to_lowercase()));
    }
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn given_id_with_punctuation_when_sanitized_then_stripped() {
    assert_eq!(sanitize_id("AB-12 / x"), "AB12x");
}

#[test]
fn given_name_with_digits_and_spaces_when_sanitized_then_letters_joined_by_underscore() {
    assert_eq!(sanitize_name("  Ada  Lovelace 3rd "), "Ada_Lovelace_rd");
}

#[test]
fn given_whitespace_only_name_when_sanitized_then_empty() {
    assert_eq!(sanitize_name("   \t "), "");
}

#[test]
fn given_different_ids_when_compared_then_no_match() {
    assert!(!ids_match("AB12", "AB1"));
}
