//! `mfa list` — display all stored secrets in a table.

use crate::cli::output;
use crate::errors::Result;
use crate::store::SecretStore;

/// Execute the `list` command.
pub fn execute(store: &dyn SecretStore) -> Result<()> {
    let entries = store.list()?;

    output::info(&format!("{} secret(s) stored", entries.len()));
    output::print_secrets_table(&entries);

    Ok(())
}
