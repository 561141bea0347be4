//! `mfa verify` — check a user-supplied code against a stored secret.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::validate_name;
use crate::config::Settings;
use crate::errors::Result;
use crate::otp;
use crate::store::SecretStore;

/// Execute the `verify` command.
///
/// A code that fails to match is a normal outcome, not an error — the
/// process still exits zero. Only a missing name or a store failure
/// is reported as an error.
pub fn execute(settings: &Settings, store: &dyn SecretStore, name: &str, code: &str) -> Result<()> {
    validate_name(name)?;

    let secret = Zeroizing::new(store.get(name)?);

    if otp::validate(&secret, code, settings.step_seconds) {
        output::success(&format!("Code {code} is valid for '{name}'"));
    } else {
        output::warning(&format!("Code {code} is not valid for '{name}'"));
    }

    Ok(())
}
