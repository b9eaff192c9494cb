//! Practice session state machine
//!
//! Cards are shown one at a time. A card must be flipped before it can be
//! scored; scoring the last card completes the session.

use std::time::{Duration, Instant};

use thiserror::Error;

use super::models::Flashcard;
use crate::progression::PracticeResult;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PracticeError {
    #[error("No flashcards to practice")]
    NoCards,

    #[error("Flip the card before answering")]
    NotFlipped,

    #[error("Practice session already finished")]
    Finished,
}

/// Final numbers of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSummary {
    pub correct: u32,
    pub total: u32,
    /// Rounded percentage
    pub accuracy: u32,
    /// XP the progression engine awards for this result
    pub xp_earned: u64,
    /// Whole seconds since the session started, rounded
    pub elapsed_secs: u64,
}

impl PracticeSummary {
    pub fn result(&self) -> PracticeResult {
        PracticeResult::new(self.correct, self.total)
    }
}

/// What happened after scoring a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Another card is up
    Next,
    /// That was the last card
    Complete(PracticeSummary),
}

pub struct PracticeSession {
    cards: Vec<Flashcard>,
    index: usize,
    flipped: bool,
    correct: u32,
    total: u32,
    finished: bool,
    started: Instant,
}

impl PracticeSession {
    pub fn new(cards: Vec<Flashcard>) -> Result<Self, PracticeError> {
        Self::started_at(cards, Instant::now())
    }

    /// Session whose clock started at `started`
    pub fn started_at(cards: Vec<Flashcard>, started: Instant) -> Result<Self, PracticeError> {
        if cards.is_empty() {
            return Err(PracticeError::NoCards);
        }
        Ok(Self {
            cards,
            index: 0,
            flipped: false,
            correct: 0,
            total: 0,
            finished: false,
            started,
        })
    }

    /// Card currently shown, `None` once finished
    pub fn current(&self) -> Option<&Flashcard> {
        if self.finished {
            return None;
        }
        self.cards.get(self.index)
    }

    /// 1-based position and deck size, for "card 3 of 10" displays
    pub fn position(&self) -> (usize, usize) {
        ((self.index + 1).min(self.cards.len()), self.cards.len())
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Reveal the answer of the current card
    pub fn flip(&mut self) -> Result<(), PracticeError> {
        if self.finished {
            return Err(PracticeError::Finished);
        }
        self.flipped = true;
        Ok(())
    }

    /// Score the current card and move on
    pub fn answer(&mut self, correct: bool) -> Result<Step, PracticeError> {
        if self.finished {
            return Err(PracticeError::Finished);
        }
        if !self.flipped {
            return Err(PracticeError::NotFlipped);
        }

        self.total += 1;
        if correct {
            self.correct += 1;
        }

        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.flipped = false;
            Ok(Step::Next)
        } else {
            self.finished = true;
            Ok(Step::Complete(self.summary()))
        }
    }

    /// Time since the session started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Score so far
    pub fn summary(&self) -> PracticeSummary {
        let result = PracticeResult::new(self.correct, self.total);
        PracticeSummary {
            correct: self.correct,
            total: self.total,
            accuracy: result.accuracy(),
            xp_earned: result.xp(),
            elapsed_secs: round_secs(self.elapsed()),
        }
    }
}

fn round_secs(elapsed: Duration) -> u64 {
    (elapsed.as_millis() as u64 + 500) / 1000
}
