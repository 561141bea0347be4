//! TOTP generation and validation (RFC 6238 atop RFC 4226).
//!
//! Every operation here is a pure function of (secret text, step length,
//! instant) — no state, safe to call from anywhere. The secret text is
//! decoded through [`codec`](super::codec) before every cryptographic
//! operation.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::codec;
use crate::errors::{MfaError, Result};

type HmacSha1 = Hmac<Sha1>;

/// The step length used by virtually every authenticator app.
pub const DEFAULT_STEP_SECONDS: i64 = 30;

/// Number of digits in a generated code.
const CODE_DIGITS: u32 = 6;

/// Generate the code for the current wall-clock instant.
///
/// Convenience wrapper around [`generate_at`].
pub fn generate(secret: &str, step_seconds: i64) -> Result<String> {
    generate_at(secret, step_seconds, Utc::now())
}

/// Generate the 6-digit code for `instant`.
///
/// The counter is `unix_seconds / step_seconds`, encoded as an 8-byte
/// big-endian integer and fed through HMAC-SHA1 with the decoded secret
/// as the key. The standard dynamic truncation then folds the digest
/// into a zero-padded 6-digit decimal string.
///
/// Fails with [`MfaError::InvalidSecretFormat`] if the secret is not
/// valid Base32, and [`MfaError::InvalidTimeStep`] if `step_seconds`
/// is not positive.
pub fn generate_at(secret: &str, step_seconds: i64, instant: DateTime<Utc>) -> Result<String> {
    if step_seconds <= 0 {
        return Err(MfaError::InvalidTimeStep(step_seconds));
    }

    let key = codec::decode(secret)?;
    let counter = instant.timestamp() / step_seconds;
    hotp(&key, counter as u64)
}

/// Check a user-supplied code against the window around the current
/// wall-clock instant.
///
/// Accepts the code for the current step and one step on either side,
/// tolerating modest clock skew between us and the code's issuer.
/// Never errors: a malformed secret simply fails to match.
pub fn validate(secret: &str, code: &str, step_seconds: i64) -> bool {
    validate_at(secret, code, step_seconds, Utc::now())
}

/// Check a code against the window centered on `instant`.
pub fn validate_at(secret: &str, code: &str, step_seconds: i64, instant: DateTime<Utc>) -> bool {
    for offset in -1i64..=1 {
        let shifted = instant + chrono::Duration::seconds(offset * step_seconds);
        if let Ok(expected) = generate_at(secret, step_seconds, shifted) {
            if expected == code {
                return true;
            }
        }
    }
    false
}

/// HOTP (RFC 4226): HMAC-SHA1 the counter, dynamically truncate.
fn hotp(key: &[u8], counter: u64) -> Result<String> {
    let mut mac =
        HmacSha1::new_from_slice(key).map_err(|_| MfaError::InvalidSecretFormat)?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation: the low nibble of the last byte selects a
    // 4-byte window; masking the top bit keeps the value at 31 bits.
    let offset = (digest[digest.len() - 1] & 0x0F) as usize;
    let bin_code = (u32::from(digest[offset] & 0x7F) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]);

    let code = bin_code % 10u32.pow(CODE_DIGITS);
    Ok(format!("{code:06}"))
}
