//! User settings for the IOU ledger
//!
//! Display preferences and how the ledger file is located and loaded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Refuse to start when the ledger file is unreadable instead of
    /// treating it as empty
    #[serde(default)]
    pub strict_load: bool,

    /// Use this ledger file instead of the one in the data directory,
    /// e.g. an existing `money_tracker_data.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            strict_load: false,
            ledger_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or the defaults if the file doesn't exist
    pub fn load_or_default(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The ledger file to use, honouring the override
    ///
    /// Relative overrides are resolved against the base directory.
    pub fn resolve_ledger_file(&self, paths: &LedgerPaths) -> PathBuf {
        match &self.ledger_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => paths.base_dir().join(file),
            None => paths.ledger_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(!settings.strict_load);
        assert!(settings.ledger_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            strict_load: true,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(loaded.strict_load);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_resolve_ledger_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.resolve_ledger_file(&paths), paths.ledger_file());

        settings.ledger_file = Some(PathBuf::from("money_tracker_data.json"));
        assert_eq!(
            settings.resolve_ledger_file(&paths),
            temp_dir.path().join("money_tracker_data.json")
        );

        let absolute = temp_dir.path().join("elsewhere.json");
        settings.ledger_file = Some(absolute.clone());
        assert_eq!(settings.resolve_ledger_file(&paths), absolute);
    }

    #[test]
    fn test_missing_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "nope").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
