//! Utility functions for directory management
//!
//! Follows the XDG Base Directory specification:
//!
//! - Data: `~/.local/share/cablegen/` - UI preferences (`config.json`)
//! - State: `~/.local/state/cablegen/` - GUI log file

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "cablegen", "cablegen")
}

pub fn get_data_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.data_dir().to_path_buf())
}

pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

pub fn ensure_dirs() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // User read/write/execute only
        builder.recursive(true);

        if let Some(dir) = get_data_dir() {
            builder.create(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        if let Some(dir) = get_data_dir() {
            std::fs::create_dir_all(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}

/// Placeholder shown in an empty result panel
pub const OUTPUT_PLACEHOLDER: &str = "Result will be displayed here...";

/// Returns the text to copy from a result panel, if there is any.
///
/// Empty output and the placeholder are never copied.
pub fn copyable_output(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed == OUTPUT_PLACEHOLDER {
        None
    } else {
        Some(trimmed.to_string())
    }
}
