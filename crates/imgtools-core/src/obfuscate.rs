//! One-way hashing of identifiers before they leave the host.
//!
//! The collector receives project names only in obfuscated form alongside
//! the raw value, so dashboards can group by project without exposing it.
//! This is an obfuscation step, not a security boundary.

use sha2::{Digest, Sha256};

/// Hash `value` into its obfuscated form: lowercase hex SHA-256 of the UTF-8 bytes.
///
/// Deterministic: the same input always yields the same 64-character output.
pub fn obfuscate(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            obfuscate("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_input_still_hashes() {
        assert_eq!(
            obfuscate(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn does_not_contain_input() {
        let hashed = obfuscate("my-secret-project");
        assert!(!hashed.contains("my-secret-project"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn deterministic(s in ".*") {
                prop_assert_eq!(obfuscate(&s), obfuscate(&s));
            }

            #[test]
            fn fixed_width_hex(s in ".*") {
                let hashed = obfuscate(&s);
                prop_assert_eq!(hashed.len(), 64);
                prop_assert!(hashed.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            }
        }
    }
}
