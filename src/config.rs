//! Persisted UI preferences
//!
//! Only presentation choices are stored (theme, which tab and cable category
//! the form opens on). Generated names and reports are never written to disk.

use crate::core::Generator;
use crate::core::cable::CableCategory;
use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme_choice: crate::theme::ThemeChoice,
    /// Tab shown when the window opens
    #[serde(default)]
    pub initial_tab: Generator,
    /// Category preselected on the cable generator tab
    #[serde(default)]
    pub initial_category: CableCategory,
}

pub fn config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Saves the app config to `path` using an atomic write pattern.
/// 1. Writes to a temporary file next to the target.
/// 2. Sets restrictive permissions (0o600) before any data is written.
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` so the GUI can run it as a `Task` without blocking the event loop.
pub async fn save_config_to(path: &Path, config: &AppConfig) -> std::io::Result<()> {
    use tokio::io::AsyncWriteExt;

    let json = serde_json::to_string_pretty(config)?;
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    #[cfg(unix)]
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .mode(0o600)
        .open(&temp_path)
        .await?;

    #[cfg(not(unix))]
    let mut file = tokio::fs::File::create(&temp_path).await?;

    file.write_all(json.as_bytes()).await?;
    file.sync_all().await?;

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save configuration. Free up space and try again.",
            )
        } else {
            e
        }
    })
}

/// Saves the app config to the XDG data directory.
pub async fn save_config(config: AppConfig) -> Result<(), String> {
    let Some(path) = config_path() else {
        return Ok(());
    };
    save_config_to(&path, &config)
        .await
        .map_err(|e| format!("Failed to save configuration: {e}"))
}

/// Loads config from `path`, falling back to defaults if missing or unreadable.
pub fn load_config_from(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt config at {}: {e}", path.display());
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Loads the app config from disk, or returns default if not found.
///
/// Synchronous: only called once during startup, before the event loop runs.
pub fn load_config() -> AppConfig {
    config_path().map_or_else(AppConfig::default, |path| load_config_from(&path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeChoice;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "initial_category": "feeder" }"#).unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.initial_category, CableCategory::Feeder);
        assert_eq!(config.initial_tab, Generator::CableName);
        assert_eq!(config.theme_choice, ThemeChoice::Slate);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = AppConfig {
            theme_choice: ThemeChoice::OxideLight,
            initial_tab: Generator::FeederLength,
            initial_category: CableCategory::Feeder,
        };

        save_config_to(&path, &config).await.unwrap();

        assert_eq!(load_config_from(&path), config);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        save_config_to(&path, &AppConfig::default()).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
