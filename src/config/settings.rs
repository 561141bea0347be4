use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{MfaError, Result};
use crate::otp::DEFAULT_STEP_SECONDS;

/// Tool configuration, loaded from `<data_dir>/config.toml`.
///
/// Every field has a sensible default so mfa works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File name of the SQLite database inside the data directory.
    #[serde(default = "default_db_file")]
    pub db_file: String,

    /// TOTP step length in seconds (default: 30).
    #[serde(default = "default_step_seconds")]
    pub step_seconds: i64,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_db_file() -> String {
    "mfa.db".to_string()
}

fn default_step_seconds() -> i64 {
    DEFAULT_STEP_SECONDS
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            step_seconds: default_step_seconds(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the data directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from `<data_dir>/config.toml`.
    ///
    /// If the file does not exist, defaults are returned. If it exists
    /// but cannot be parsed, an error is returned — a broken config
    /// should never be silently ignored.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            MfaError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.step_seconds <= 0 {
            return Err(MfaError::ConfigError(format!(
                "step_seconds must be positive, got {}",
                settings.step_seconds
            )));
        }

        Ok(settings)
    }

    /// Build the full path to the database file.
    ///
    /// Example: `data/mfa.db`
    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.db_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.db_file, "mfa.db");
        assert_eq!(s.step_seconds, 30);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.db_file, "mfa.db");
        assert_eq!(settings.step_seconds, 30);
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = "db_file = \"secrets.db\"\nstep_seconds = 60\n";
        fs::write(tmp.path().join("config.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.db_file, "secrets.db");
        assert_eq!(settings.step_seconds, 60);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "db_file = \"other.db\"\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.db_file, "other.db");
        assert_eq!(settings.step_seconds, 30);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not valid {{toml").unwrap();

        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn load_rejects_non_positive_step() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "step_seconds = 0\n").unwrap();

        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn db_path_builds_correct_path() {
        let s = Settings::default();
        assert_eq!(s.db_path(Path::new("data")), PathBuf::from("data/mfa.db"));
    }

    #[test]
    fn db_path_respects_custom_db_file() {
        let s = Settings {
            db_file: "secrets.db".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            s.db_path(Path::new("/home/user/.mfa")),
            PathBuf::from("/home/user/.mfa/secrets.db")
        );
    }
}
