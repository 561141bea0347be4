//! `mfa add` — store (or replace) a secret and print its current code.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{confirm, prompt_secret, validate_name};
use crate::config::Settings;
use crate::errors::{MfaError, Result};
use crate::otp;
use crate::store::{SecretStore, UpsertOutcome};

/// Execute the `add` command.
pub fn execute(
    settings: &Settings,
    store: &mut dyn SecretStore,
    name: &str,
    secret: Option<&str>,
    force: bool,
) -> Result<()> {
    validate_name(name)?;

    let secret: Zeroizing<String> = match secret {
        Some(s) => {
            output::warning("Secret provided on command line — it may appear in shell history.");
            Zeroizing::new(s.to_string())
        }
        None => prompt_secret(name)?,
    };

    // Reject malformed Base32 before it ever reaches the store.
    if !otp::is_valid(&secret) {
        return Err(MfaError::InvalidSecretFormat);
    }

    // Replacing an existing secret is destructive; ask first.
    match store.get(name) {
        Ok(_) if !force => {
            if !confirm(&format!("Secret '{name}' already exists. Replace it?"))? {
                output::info("Cancelled.");
                return Ok(());
            }
        }
        Ok(_) => {}
        Err(MfaError::SecretNotFound(_)) => {}
        Err(e) => return Err(e),
    }

    match store.upsert(name, &secret)? {
        UpsertOutcome::Created => output::success(&format!("Secret '{name}' added")),
        UpsertOutcome::Replaced => output::success(&format!("Secret '{name}' replaced")),
    }

    // Show the current code right away so the user can finish enrollment
    // on the other side.
    let code = otp::generate(&secret, settings.step_seconds)?;
    output::code(name, &code);

    Ok(())
}
