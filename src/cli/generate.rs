//! Generate command implementation

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use studybuddy::config::{Config, GeneratorSettings};
use studybuddy::flashcards::{generate_flashcards, Flashcard};
use studybuddy::Command;

use super::open_app;

/// Progress messages shown while generating, with their pause factor
/// relative to `stage_delay_ms` (numerator, denominator)
const STAGES: [(&str, u64, u64); 3] = [
    ("Analyzing your notes...", 1, 1),
    ("Extracting key concepts...", 3, 2),
    ("Creating flashcards...", 1, 1),
];

/// Turn notes into a deck, remember it and print it
pub async fn generate_command(
    config: &Config,
    data_dir: Option<PathBuf>,
    file: Option<PathBuf>,
    no_delay: bool,
) -> Result<()> {
    let notes = read_notes(file.as_deref())?;
    let generator = &config.settings.generator;

    if generator.simulate_delay && !no_delay {
        show_stages(generator).await;
    }

    let cards = generate_flashcards(&notes, &generator.options())?;
    tracing::info!(count = cards.len(), "Generated flashcards");

    let mut app = open_app(config, data_dir)?;
    app.handle(Command::RecordDeck(cards.clone()))?;

    print_deck(&cards);
    println!("\nSaved {} cards. Run `studybuddy practice` to start.", cards.len());

    Ok(())
}

fn read_notes(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read notes: {}", path.display())),
        None => {
            let mut notes = String::new();
            std::io::stdin()
                .read_to_string(&mut notes)
                .context("Failed to read notes from stdin")?;
            Ok(notes)
        }
    }
}

async fn show_stages(generator: &GeneratorSettings) {
    for (message, num, den) in STAGES {
        println!("{}", message);
        tokio::time::sleep(Duration::from_millis(generator.stage_delay_ms * num / den)).await;
    }
}

fn print_deck(cards: &[Flashcard]) {
    println!("Flashcards ({}):\n", cards.len());

    for (i, card) in cards.iter().enumerate() {
        println!("  {}. [{} / {}] {}", i + 1, card.subject, card.difficulty, card.question);
        println!("     {}", card.answer);
    }
}
