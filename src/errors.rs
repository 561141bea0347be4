use thiserror::Error;

/// All errors that can occur in mfa.
#[derive(Debug, Error)]
pub enum MfaError {
    // --- OTP errors ---
    #[error("Invalid secret format — expected a Base32-encoded key")]
    InvalidSecretFormat,

    #[error("Invalid time step: {0} (must be a positive number of seconds)")]
    InvalidTimeStep(i64),

    // --- Store errors ---
    #[error("Secret '{0}' not found")]
    SecretNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for mfa results.
pub type Result<T> = std::result::Result<T, MfaError>;
