//! Secret text normalization and Base32 decoding.
//!
//! Authenticator apps hand out secrets in wildly inconsistent shapes:
//! lowercase, grouped with spaces, with or without `=` padding. Everything
//! cryptographic in this crate goes through [`decode`], so normalization
//! happens in exactly one place, at use time — the store keeps whatever
//! text the user originally provided.

use data_encoding::BASE32;

use crate::errors::{MfaError, Result};

/// Normalize user-supplied secret text into canonical Base32.
///
/// Strips all whitespace, uppercases, and right-pads with `=` until the
/// length is a multiple of 8 (RFC 4648 requires group-aligned input).
/// Idempotent: normalizing an already-normalized secret is a no-op.
pub fn normalize(secret: &str) -> String {
    let mut s: String = secret
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    let rem = s.len() % 8;
    if rem != 0 {
        s.extend(std::iter::repeat('=').take(8 - rem));
    }
    s
}

/// Decode secret text into the raw bytes used as the HMAC key.
///
/// Applies [`normalize`] first, then Base32-decodes with the standard
/// RFC 4648 alphabet. Any decode failure (illegal character, malformed
/// padding) is reported as [`MfaError::InvalidSecretFormat`].
///
/// An empty decoded key is accepted here; no minimum key length is
/// enforced by the codec.
pub fn decode(secret: &str) -> Result<Vec<u8>> {
    let normalized = normalize(secret);
    BASE32
        .decode(normalized.as_bytes())
        .map_err(|_| MfaError::InvalidSecretFormat)
}

/// Check whether secret text is well-formed Base32.
///
/// Used to gate input before persisting or generating — a format check,
/// not a secret comparison.
pub fn is_valid(secret: &str) -> bool {
    decode(secret).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_whitespace_and_uppercases() {
        assert_eq!(normalize("jbsw y3dp ehpk 3pxp"), "JBSWY3DPEHPK3PXP");
        assert_eq!(normalize("  jbswy3dp\tehpk3pxp\n"), "JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn normalize_pads_to_multiple_of_eight() {
        assert_eq!(normalize("JBSWY3DP"), "JBSWY3DP");
        assert_eq!(normalize("JBSWY3DPEH"), "JBSWY3DPEH======");
        for input in ["", "A", "AB", "ABCDEFG", "ABCDEFGH", "ABCDEFGHI"] {
            assert_eq!(normalize(input).len() % 8, 0, "input: {input:?}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["jbswy3dp ehpk3pxp", "JBSWY3DPEH", "", "abc"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn decode_known_secret() {
        // "JBSWY3DP" is Base32 for "Hello!" minus the trailing bytes;
        // the full 16-char secret decodes to "Hello!" + 0xDEADBEEF.
        let key = decode("JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(key, b"Hello!\xde\xad\xbe\xef");
    }

    #[test]
    fn decode_accepts_lowercase_and_spaces() {
        assert_eq!(
            decode("jbsw y3dp ehpk 3pxp").unwrap(),
            decode("JBSWY3DPEHPK3PXP").unwrap()
        );
    }

    #[test]
    fn decode_accepts_empty_secret() {
        // No minimum key length is enforced at this layer.
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decode_rejects_illegal_characters() {
        assert!(matches!(decode("1@@@"), Err(MfaError::InvalidSecretFormat)));
        // '1' is not in the RFC 4648 Base32 alphabet (A-Z, 2-7).
        assert!(matches!(decode("123"), Err(MfaError::InvalidSecretFormat)));
    }

    #[test]
    fn is_valid_matches_decode() {
        assert!(is_valid("JBSWY3DPEHPK3PXP"));
        assert!(is_valid("jbsw y3dp ehpk 3pxp"));
        assert!(!is_valid("1@@@"));
        assert!(!is_valid("not base32!"));
    }
}
