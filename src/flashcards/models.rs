//! Data models for generated flashcards

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rough difficulty derived from answer length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Classify a sentence by its character count
    pub fn for_text(text: &str) -> Self {
        match text.chars().count() {
            0..50 => Self::Easy,
            50..100 => Self::Medium,
            _ => Self::Hard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question/answer card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_boundaries() {
        assert_eq!(Difficulty::for_text(&"a".repeat(49)), Difficulty::Easy);
        assert_eq!(Difficulty::for_text(&"a".repeat(50)), Difficulty::Medium);
        assert_eq!(Difficulty::for_text(&"a".repeat(99)), Difficulty::Medium);
        assert_eq!(Difficulty::for_text(&"a".repeat(100)), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
