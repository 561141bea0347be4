//! One-time password primitives.
//!
//! This module provides:
//! - Base32 secret normalization and decoding (`codec`)
//! - TOTP generation and window validation (`totp`)

pub mod codec;
pub mod totp;

// Re-export the most commonly used items so callers can write:
//   use mfa::otp::{generate, validate, ...};
pub use codec::{decode, is_valid, normalize};
pub use totp::{generate, generate_at, validate, validate_at, DEFAULT_STEP_SECONDS};
