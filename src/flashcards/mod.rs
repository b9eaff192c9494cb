//! Flashcards: generation from notes and practice sessions

mod generator;
mod models;
mod practice;

pub use generator::{
    detect_subject, extract_key_term, generate_flashcards, GenerateError, GeneratorOptions,
    GENERAL_SUBJECT,
};
pub use models::{Difficulty, Flashcard};
pub use practice::{PracticeError, PracticeSession, PracticeSummary, Step};
