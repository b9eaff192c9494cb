//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::flashcards::GeneratorOptions;

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding `studybuddy.db` (defaults to ~/.studybuddy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Flashcard generator settings
    #[serde(default)]
    pub generator: GeneratorSettings,
}

/// Flashcard generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Maximum number of sentences turned into cards
    #[serde(default = "default_max_cards")]
    pub max_cards: usize,

    /// Sentences must be longer than this many characters
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,

    /// Sentences must contain more than this many words
    #[serde(default = "default_min_words")]
    pub min_words: usize,

    /// Show staged progress messages with pauses while generating
    #[serde(default = "default_simulate_delay")]
    pub simulate_delay: bool,

    /// Base pause per stage in milliseconds
    #[serde(default = "default_stage_delay_ms")]
    pub stage_delay_ms: u64,
}

fn default_max_cards() -> usize {
    10
}

fn default_min_sentence_chars() -> usize {
    20
}

fn default_min_words() -> usize {
    5
}

fn default_simulate_delay() -> bool {
    true
}

fn default_stage_delay_ms() -> u64 {
    1000
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_cards: default_max_cards(),
            min_sentence_chars: default_min_sentence_chars(),
            min_words: default_min_words(),
            simulate_delay: default_simulate_delay(),
            stage_delay_ms: default_stage_delay_ms(),
        }
    }
}

impl GeneratorSettings {
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            max_cards: self.max_cards,
            min_sentence_chars: self.min_sentence_chars,
            min_words: self.min_words,
        }
    }
}
