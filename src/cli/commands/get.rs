//! `mfa get` — print the current code for a named secret.
//!
//! When the name is unknown and a terminal is attached, offers to
//! enroll the secret on the spot — the store reports not-found, and
//! this command decides what to do about it.

use std::io::{self, IsTerminal};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{prompt_secret, validate_name};
use crate::config::Settings;
use crate::errors::{MfaError, Result};
use crate::otp;
use crate::store::SecretStore;

/// Execute the `get` command.
pub fn execute(settings: &Settings, store: &mut dyn SecretStore, name: &str) -> Result<()> {
    validate_name(name)?;

    let secret: Zeroizing<String> = match store.get(name) {
        Ok(s) => Zeroizing::new(s),
        Err(MfaError::SecretNotFound(_)) if io::stdin().is_terminal() => {
            output::info(&format!("No secret stored for '{name}' yet."));
            let secret = prompt_secret(name)?;

            if !otp::is_valid(&secret) {
                return Err(MfaError::InvalidSecretFormat);
            }

            store.upsert(name, &secret)?;
            output::success(&format!("Secret '{name}' added"));
            secret
        }
        Err(e) => return Err(e),
    };

    // A secret that predates format-gating could still be bad; say so
    // instead of failing with a bare decode error.
    if !otp::is_valid(&secret) {
        return Err(MfaError::CommandFailed(format!(
            "stored secret for '{name}' is not valid Base32"
        )));
    }

    let code = otp::generate(&secret, settings.step_seconds)?;
    output::code(name, &code);

    Ok(())
}
