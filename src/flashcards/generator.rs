//! Flashcard generation from free-form notes
//!
//! A deterministic heuristic: notes are split into sentences, each usable
//! sentence becomes the answer of one card, and the question is built from a
//! rotating template around the sentence's first meaningful word.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::models::{Difficulty, Flashcard};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("No study notes given")]
    EmptyNotes,
}

/// Tunables for the sentence heuristic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Only the first this-many usable sentences are considered
    pub max_cards: usize,
    /// Sentences must be longer than this (in chars, after trimming)
    pub min_sentence_chars: usize,
    /// Sentences must have more than this many words
    pub min_words: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_cards: 10,
            min_sentence_chars: 20,
            min_words: 5,
        }
    }
}

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

const STOP_WORDS: &[&str] = &[
    "the", "is", "are", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "a", "an",
];

/// Question templates, picked by sentence index
const QUESTION_TEMPLATES: &[&str] = &[
    "What is {}?",
    "What is the function of {}?",
    "How does {} work?",
    "What is the difference between {} and related concepts?",
    "Give an example of {}.",
];

/// Subject keyword groups, checked in order
const SUBJECT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Biology",
        &["cell", "dna", "photosynthesis", "mitochondria", "organism", "evolution"],
    ),
    (
        "Chemistry",
        &["molecule", "atom", "reaction", "compound", "element", "bond"],
    ),
    (
        "Physics",
        &["energy", "force", "motion", "wave", "particle", "gravity"],
    ),
    (
        "Mathematics",
        &["equation", "formula", "calculate", "solve", "theorem", "proof"],
    ),
    (
        "History",
        &["war", "empire", "revolution", "century", "ancient", "civilization"],
    ),
];

/// Subject used when no keyword matches
pub const GENERAL_SUBJECT: &str = "General";

const FALLBACK_TERM: &str = "this concept";

/// Turn notes into flashcards.
///
/// Falls back to two generic sample cards when no sentence qualifies.
pub fn generate_flashcards(
    notes: &str,
    options: &GeneratorOptions,
) -> Result<Vec<Flashcard>, GenerateError> {
    let notes = notes.trim();
    if notes.is_empty() {
        return Err(GenerateError::EmptyNotes);
    }

    let sentences = SENTENCE_BREAK
        .split(notes)
        .map(str::trim)
        .filter(|s| s.chars().count() > options.min_sentence_chars);

    let mut cards = Vec::new();
    for (index, sentence) in sentences.take(options.max_cards).enumerate() {
        if sentence.split_whitespace().count() <= options.min_words {
            continue;
        }
        cards.push(build_card(index, sentence));
    }

    if cards.is_empty() {
        debug!("No usable sentences in notes, returning sample cards");
        return Ok(sample_cards(notes));
    }

    debug!(count = cards.len(), "Generated flashcards");
    Ok(cards)
}

fn build_card(index: usize, sentence: &str) -> Flashcard {
    let key_term = extract_key_term(sentence);
    let lower = sentence.to_lowercase();

    let question = if lower.contains("process") {
        format!("Explain the process mentioned: {key_term}")
    } else if lower.contains("function") || lower.contains("role") {
        format!("What is the function or role of {key_term}?")
    } else if lower.contains("equation") || lower.contains("formula") {
        format!("What is the equation or formula for {key_term}?")
    } else {
        QUESTION_TEMPLATES[index % QUESTION_TEMPLATES.len()].replacen("{}", key_term, 1)
    };

    Flashcard {
        id: format!("card-{index}"),
        question,
        answer: sentence.to_string(),
        difficulty: Difficulty::for_text(sentence),
        subject: detect_subject(&lower).to_string(),
    }
}

/// First word longer than three ASCII letters that is not a stop word
pub fn extract_key_term(sentence: &str) -> &str {
    sentence
        .split_whitespace()
        .find(|word| {
            word.len() > 3
                && word.chars().all(|c| c.is_ascii_alphabetic())
                && !STOP_WORDS.contains(&word.to_lowercase().as_str())
        })
        .unwrap_or(FALLBACK_TERM)
}

/// Subject of a lowercased sentence
pub fn detect_subject(lower: &str) -> &'static str {
    SUBJECT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(subject, _)| *subject)
        .unwrap_or(GENERAL_SUBJECT)
}

fn sample_cards(notes: &str) -> Vec<Flashcard> {
    let excerpt: String = notes.chars().take(100).collect();
    vec![
        Flashcard {
            id: "sample-1".to_string(),
            question: "What is the main topic of your notes?".to_string(),
            answer: format!("Based on your notes: {excerpt}..."),
            difficulty: Difficulty::Medium,
            subject: GENERAL_SUBJECT.to_string(),
        },
        Flashcard {
            id: "sample-2".to_string(),
            question: "What key concept should you remember?".to_string(),
            answer: "The key concepts from your study material that you should focus on reviewing."
                .to_string(),
            difficulty: Difficulty::Easy,
            subject: GENERAL_SUBJECT.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "Photosynthesis is the process by which plants convert sunlight into energy. \
        It occurs in the chloroplasts and involves two main stages. \
        The mitochondria is known as the powerhouse of the cell because it produces ATP.";

    #[test]
    fn test_generates_one_card_per_sentence() {
        let cards = generate_flashcards(NOTES, &GeneratorOptions::default()).unwrap();
        assert_eq!(cards.len(), 3);

        assert_eq!(cards[0].id, "card-0");
        assert_eq!(
            cards[0].question,
            "Explain the process mentioned: Photosynthesis"
        );
        assert_eq!(
            cards[0].answer,
            "Photosynthesis is the process by which plants convert sunlight into energy"
        );
        assert_eq!(cards[0].difficulty, Difficulty::Medium);
        assert_eq!(cards[0].subject, "Biology");

        assert_eq!(cards[1].question, "What is the function of occurs?");
        assert_eq!(cards[1].subject, "General");

        assert_eq!(cards[2].question, "How does mitochondria work?");
        assert_eq!(cards[2].subject, "Biology");
    }

    #[test]
    fn test_empty_notes_rejected() {
        assert_eq!(
            generate_flashcards("   \n ", &GeneratorOptions::default()),
            Err(GenerateError::EmptyNotes)
        );
    }

    #[test]
    fn test_short_notes_fall_back_to_samples() {
        let cards = generate_flashcards("Cells divide. Atoms bond!", &GeneratorOptions::default())
            .unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "sample-1");
        assert_eq!(
            cards[0].answer,
            "Based on your notes: Cells divide. Atoms bond!..."
        );
        assert_eq!(cards[1].id, "sample-2");
    }

    #[test]
    fn test_few_words_skipped_but_index_consumed() {
        let notes = "Extraordinarily complicated sentences happen. \
            Gravity pulls every object toward the center of the earth.";
        let cards = generate_flashcards(notes, &GeneratorOptions::default()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "card-1");
        assert_eq!(cards[0].subject, "Physics");
    }

    #[test]
    fn test_max_cards_limits_sentences() {
        let notes = "Evolution shapes every living organism over time. ".repeat(15);
        let options = GeneratorOptions {
            max_cards: 4,
            ..GeneratorOptions::default()
        };
        let cards = generate_flashcards(&notes, &options).unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[3].id, "card-3");
    }

    #[test]
    fn test_question_overrides() {
        let cards = generate_flashcards(
            "Enzymes play a central role in digestion of food. \
             Students solve the quadratic equation using a known formula.",
            &GeneratorOptions::default(),
        )
        .unwrap();
        assert_eq!(cards[0].question, "What is the function or role of Enzymes?");
        assert_eq!(
            cards[1].question,
            "What is the equation or formula for Students?"
        );
        assert_eq!(cards[1].subject, "Mathematics");
    }

    #[test]
    fn test_extract_key_term() {
        assert_eq!(extract_key_term("The cat sat on a mat"), FALLBACK_TERM);
        assert_eq!(extract_key_term("With enough practice"), "enough");
        assert_eq!(extract_key_term("ATP-rich cells store energy"), "cells");
        assert_eq!(extract_key_term("the DNA of every organism"), "every");
    }

    #[test]
    fn test_detect_subject_is_case_insensitive_on_keywords() {
        assert_eq!(detect_subject("the dna helix"), "Biology");
        assert_eq!(detect_subject("the roman empire fell"), "History");
        assert_eq!(detect_subject("nothing matches here"), GENERAL_SUBJECT);
    }
}
