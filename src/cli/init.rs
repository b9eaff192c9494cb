//! Init command implementation

use anyhow::{bail, Result};
use std::path::PathBuf;

use studybuddy::config::{write_atomic, Config};

/// Default configuration content for studybuddy init
pub const DEFAULT_CONFIG: &str = r#"# StudyBuddy Configuration
# ========================
#
# Notes go in, flashcards come out. Practice them to earn XP, level up and
# unlock badges.

# ============================================================================
# SETTINGS
# ============================================================================
#
# Available options:
#   data_dir - Directory holding studybuddy.db (default: ~/.studybuddy)

[settings]
# data_dir = "/path/to/studybuddy-data"

# ============================================================================
# GENERATOR - Turning notes into flashcards
# ============================================================================
#
# Available options:
#   max_cards          - Maximum number of sentences turned into cards (default: 10)
#   min_sentence_chars - Sentences must be longer than this (default: 20)
#   min_words          - Sentences must have more words than this (default: 5)
#   simulate_delay     - Show staged progress messages while generating (default: true)
#   stage_delay_ms     - Base pause per stage in milliseconds (default: 1000)

[settings.generator]
max_cards = 10
min_sentence_chars = 20
min_words = 5
simulate_delay = true
stage_delay_ms = 1000
"#;

/// Write a fresh config file.
/// By default creates the global config at ~/.studybuddy/config.toml
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_atomic(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
