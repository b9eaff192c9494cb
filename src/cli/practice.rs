//! Practice command implementation
//!
//! Interactive loop over the saved deck: Enter flips the card, then `y` or
//! `n` scores it. The finished score goes to the study app worker.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::thread::JoinHandle;

use anyhow::{bail, Context, Result};

use studybuddy::app::{spawn, AppHandle};
use studybuddy::config::Config;
use studybuddy::flashcards::{PracticeSession, PracticeSummary, Step};
use studybuddy::progression::SessionOutcome;
use studybuddy::store::KeyValueStore;
use studybuddy::{AppError, Command, PracticeResult, Reply, StudyApp};

use super::{describe_outcome, open_app};

pub async fn practice_command(config: &Config, data_dir: Option<PathBuf>) -> Result<()> {
    let app = open_app(config, data_dir)?;
    let (handle, worker) = spawn(app);

    let cards = match handle.send(Command::LoadDeck)? {
        Reply::Deck(cards) => cards,
        other => bail!("Unexpected reply to deck request: {:?}", other),
    };
    if cards.is_empty() {
        println!("No flashcards yet. Run `studybuddy generate` first.");
        return Ok(());
    }

    let session = PracticeSession::new(cards)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let Some(summary) = run_practice(session, stdin.lock(), stdout.lock())? else {
        println!("\nPractice aborted, nothing recorded.");
        return Ok(());
    };

    println!(
        "\nSession complete: {}/{} correct ({}%), {} XP earned in {}s",
        summary.correct, summary.total, summary.accuracy, summary.xp_earned, summary.elapsed_secs
    );

    let (outcome, saved) = submit_result(handle, worker, summary.result())?;
    if let Some(outcome) = outcome {
        for line in describe_outcome(&outcome) {
            println!("{}", line);
        }
    }
    if !saved {
        eprintln!("Warning: progress could not be saved");
    }

    Ok(())
}

/// Send a finished score to the worker and wait for it to stop.
///
/// A failed save is retried once with `Command::Flush`. Returns the applied
/// outcome and whether it reached the store.
pub fn submit_result<S: KeyValueStore>(
    handle: AppHandle,
    worker: JoinHandle<StudyApp<S>>,
    result: PracticeResult,
) -> Result<(Option<SessionOutcome>, bool)> {
    let saved = match handle.send(Command::PracticeComplete(result)) {
        Ok(Reply::Progress(_)) => true,
        Ok(other) => bail!("Unexpected reply to practice result: {:?}", other),
        Err(AppError::Persistence(e)) => {
            tracing::warn!("Progress applied but not saved, retrying: {}", e);
            match handle.send(Command::Flush) {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!("Retry failed: {}", e);
                    false
                }
            }
        }
        Err(e) => return Err(e.into()),
    };
    drop(handle);

    let app = worker
        .join()
        .map_err(|_| anyhow::anyhow!("Study app worker panicked"))?;
    Ok((app.last_outcome().cloned(), saved && !app.is_dirty()))
}

/// Drive a session from `input`, echoing to `output`.
///
/// Returns `None` when input ends before the last card is scored.
pub fn run_practice<R: BufRead, W: Write>(
    mut session: PracticeSession,
    mut input: R,
    mut output: W,
) -> Result<Option<PracticeSummary>> {
    let mut line = String::new();

    loop {
        let Some(card) = session.current() else {
            return Ok(Some(session.summary()));
        };
        let (position, total) = session.position();

        writeln!(output, "\nCard {} of {} [{} / {}]", position, total, card.subject, card.difficulty)?;
        writeln!(output, "Q: {}", card.question)?;
        write!(output, "(press Enter to flip) ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            return Ok(None);
        }
        writeln!(output, "A: {}", card.answer)?;
        session.flip()?;

        let correct = loop {
            write!(output, "Did you get it right? [y/n] ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line).context("Failed to read input")? == 0 {
                return Ok(None);
            }
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => break true,
                "n" | "no" => break false,
                _ => continue,
            }
        };

        if let Step::Complete(summary) = session.answer(correct)? {
            return Ok(Some(summary));
        }
    }
}
