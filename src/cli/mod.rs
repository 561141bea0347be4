//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{MfaError, Result};

/// Longest accepted secret name; the schema stores names as TEXT but
/// anything past this is almost certainly a paste accident.
const MAX_NAME_LEN: usize = 255;

/// mfa CLI: local TOTP authenticator.
#[derive(Parser)]
#[command(name = "mfa", about = "Local TOTP authenticator", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding config.toml and the database (default: data)
    #[arg(long, default_value = "data", global = true, env = "MFA_DATA_DIR")]
    pub data_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add or replace a named secret, then print its current code
    Add {
        /// Secret name (e.g. github)
        name: String,
        /// Base32-encoded secret (omit for interactive prompt)
        secret: Option<String>,
        /// Replace an existing secret without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Print the current code for a named secret
    Get {
        /// Secret name
        name: String,
    },

    /// Check a user-supplied code against a named secret
    Verify {
        /// Secret name
        name: String,
        /// The 6-digit code to check
        code: String,
    },

    /// List all stored secrets
    List,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Read a secret from one of three sources, in order:
/// 1. Piped input (stdin is not a terminal)
/// 2. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn prompt_secret(name: &str) -> Result<Zeroizing<String>> {
    let secret = if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim().to_string()
    } else {
        dialoguer::Password::new()
            .with_prompt(format!("Enter Base32 secret for '{name}'"))
            .interact()
            .map_err(|e| MfaError::CommandFailed(format!("secret prompt: {e}")))?
    };

    if secret.is_empty() {
        return Err(MfaError::CommandFailed("secret cannot be empty".into()));
    }

    Ok(Zeroizing::new(secret))
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| MfaError::CommandFailed(format!("confirm prompt: {e}")))
}

/// Validate that a secret name is sensible before touching the store.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MfaError::CommandFailed("name cannot be empty".into()));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(MfaError::CommandFailed(format!(
            "name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }

    Ok(())
}
