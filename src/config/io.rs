//! Configuration file I/O operations

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.studybuddy/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".studybuddy")
    }

    /// Get the global config file path (~/.studybuddy/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }
}

/// `path` with `suffix` appended to its file name (`config.toml` -> `config.toml.lock`)
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}

/// Replace `path` with `content` so readers see either the old or the new file.
///
/// Writers are serialized through an fs2 lock on `<file>.lock`. Missing parent
/// directories are created.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let lock = File::create(sibling(path, ".lock"))
        .with_context(|| format!("Failed to open lock for {}", path.display()))?;
    lock.lock_exclusive()
        .with_context(|| format!("Failed to lock {}", path.display()))?;

    let staged = sibling(path, ".tmp");
    let written = File::create(&staged).and_then(|mut file| {
        file.write_all(content.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = std::fs::remove_file(&staged);
        return Err(e).with_context(|| format!("Failed to stage {}", staged.display()));
    }

    std::fs::rename(&staged, path)
        .with_context(|| format!("Failed to replace {}", path.display()))
}
