//! Host configuration capability.
//!
//! The ledger path comes from the host editor's settings storage,
//! which this crate cannot see. [`LedgerSettings`] models that lookup
//! as an injected capability so the cache stays testable in isolation.

use serde::Deserialize;
use std::path::PathBuf;

/// Capability for resolving the ledger file being tracked.
///
/// An absent or invalid path is a normal state, not an error: the
/// cache answers it with empty suggestions.
pub trait LedgerSettings {
    /// The path of the ledger file, if one is configured.
    fn ledger_file(&self) -> Option<PathBuf>;
}

/// Settings holding a fixed, in-memory ledger path.
#[derive(Debug, Clone, Default)]
pub struct FixedSettings {
    path: Option<PathBuf>,
}

impl FixedSettings {
    /// Settings that always resolve to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Settings with no ledger configured.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { path: None }
    }
}

impl LedgerSettings for FixedSettings {
    fn ledger_file(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}

/// The on-disk settings document.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    beancount_file: Option<PathBuf>,
}

/// Settings backed by a JSON file with a `beancount_file` key.
///
/// The file is re-read on every lookup so edits to the settings take
/// effect without restarting the host. A missing or malformed settings
/// file resolves to "unconfigured".
#[derive(Debug, Clone)]
pub struct JsonSettings {
    settings_path: PathBuf,
}

impl JsonSettings {
    /// Settings read from the JSON document at `settings_path`.
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }
}

impl LedgerSettings for JsonSettings {
    fn ledger_file(&self) -> Option<PathBuf> {
        let text = std::fs::read_to_string(&self.settings_path).ok()?;
        match serde_json::from_str::<SettingsFile>(&text) {
            Ok(file) => file.beancount_file,
            Err(e) => {
                tracing::debug!(
                    "malformed settings file {}: {e}",
                    self.settings_path.display()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_fixed_settings() {
        let settings = FixedSettings::new("/tmp/ledger.beancount");
        assert_eq!(
            settings.ledger_file(),
            Some(PathBuf::from("/tmp/ledger.beancount"))
        );

        assert_eq!(FixedSettings::unconfigured().ledger_file(), None);
    }

    #[test]
    fn test_json_settings_resolves_key() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        fs::write(
            &settings_path,
            r#"{ "beancount_file": "/home/user/main.beancount" }"#,
        )
        .unwrap();

        let settings = JsonSettings::new(&settings_path);
        assert_eq!(
            settings.ledger_file(),
            Some(PathBuf::from("/home/user/main.beancount"))
        );
    }

    #[test]
    fn test_json_settings_missing_file_is_unconfigured() {
        let settings = JsonSettings::new("/nonexistent/settings.json");
        assert_eq!(settings.ledger_file(), None);
    }

    #[test]
    fn test_json_settings_malformed_is_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        fs::write(&settings_path, "not json at all {").unwrap();

        let settings = JsonSettings::new(&settings_path);
        assert_eq!(settings.ledger_file(), None);
    }

    #[test]
    fn test_json_settings_missing_key_is_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        fs::write(&settings_path, r#"{ "other_key": 1 }"#).unwrap();

        let settings = JsonSettings::new(&settings_path);
        assert_eq!(settings.ledger_file(), None);
    }
}
