//! Shape of the document URIs the store accepts.
//!
//! Every farm, plot and event URI is `/` followed by a bare identifier, so the
//! bare id a client sends to `DELETE` maps back to exactly one stored farm.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::StoreError;

fn bare_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("valid bare id pattern"))
}

pub fn is_bare_id(id: &str) -> bool {
    bare_id_pattern().is_match(id)
}

/// The stored URI for the bare id `id`.
pub fn from_bare_id(id: &str) -> String {
    format!("/{}", id)
}

pub fn validate(uri: &str) -> Result<(), StoreError> {
    match uri.strip_prefix('/') {
        Some(id) if is_bare_id(id) => Ok(()),
        _ => Err(StoreError::InvalidDocumentUri(uri.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slash_and_bare_id_only() {
        assert!(validate("/abc123").is_ok());
        assert!(validate("/0b6c1f0e-4c1d-4bb8-9c5e-2a0f3b1d9e77").is_ok());
        assert!(validate("/a_b.c-d").is_ok());

        for uri in ["", "/", "abc", "/a/b", "//ab", "/campo norte", "https://pod/farm", "\\ab", "/a?b"] {
            assert!(
                matches!(validate(uri), Err(StoreError::InvalidDocumentUri(_))),
                "{uri:?} should be rejected"
            );
        }
    }

    #[test]
    fn bare_ids_round_trip_to_uris() {
        assert!(is_bare_id("abc123"));
        assert!(!is_bare_id("a b"));
        assert!(!is_bare_id(""));
        assert_eq!(from_bare_id("abc123"), "/abc123");
    }
}
