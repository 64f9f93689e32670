//! Short identifier generation.
//!
//! Identifiers are drawn from the OS random source and encoded as URL-safe
//! base64 without padding, so every identifier uses the `[A-Za-z0-9_-]`
//! alphabet.

use base64::Engine as _;

/// Number of random bytes behind one identifier (48 bits of entropy).
const SHORT_ID_BYTES: usize = 6;

/// Length of a generated identifier in characters.
pub const SHORT_ID_LENGTH: usize = SHORT_ID_BYTES * 4 / 3;

/// Generates a random 8-character short identifier.
///
/// Uniqueness is not checked here; callers claim the identifier in the store
/// and retry on collision.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_short_id();
/// assert_eq!(id.len(), 8);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_short_id() -> String {
    let mut buffer = [0u8; SHORT_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns true if `value` has the shape of a generated identifier.
pub fn is_short_id(value: &str) -> bool {
    value.len() == SHORT_ID_LENGTH
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_short_id_has_correct_length() {
        let id = generate_short_id();
        assert_eq!(id.len(), 8);
        assert_eq!(SHORT_ID_LENGTH, 8);
    }

    #[test]
    fn test_generate_short_id_url_safe_characters() {
        for _ in 0..200 {
            let id = generate_short_id();
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in {id}"
            );
        }
    }

    #[test]
    fn test_generate_short_id_no_padding() {
        let id = generate_short_id();
        assert!(!id.contains('='));
    }

    #[test]
    fn test_generate_short_id_produces_unique_ids() {
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            ids.insert(generate_short_id());
        }

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_ids_match_shape() {
        assert!(is_short_id(&generate_short_id()));
    }

    #[test]
    fn test_is_short_id_rejects_other_shapes() {
        assert!(!is_short_id(""));
        assert!(!is_short_id("abc"));
        assert!(!is_short_id("doesnotexist"));
        assert!(!is_short_id("abc/defg"));
        assert!(!is_short_id("abcd efg"));
    }
}
