//! Record command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};

use studybuddy::config::Config;
use studybuddy::{Command, PracticeResult, Reply};

use super::{describe_outcome, open_app};

/// Apply a practice score without running the interactive session
pub fn record_command(
    config: &Config,
    data_dir: Option<PathBuf>,
    correct: u32,
    total: u32,
) -> Result<()> {
    let mut app = open_app(config, data_dir)?;

    match app.handle(Command::PracticeComplete(PracticeResult::new(correct, total)))? {
        Reply::Progress(outcome) => {
            for line in describe_outcome(&outcome) {
                println!("{}", line);
            }
        }
        other => bail!("Unexpected reply to practice result: {:?}", other),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_record_persists_progress() {
        let dir = tempdir().unwrap();
        let config = Config::default();

        record_command(&config, Some(dir.path().to_path_buf()), 10, 10).unwrap();

        let app = open_app(&config, Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(app.snapshot().stats.total_xp, 1850);
    }

    #[test]
    fn test_record_rejects_invalid_score() {
        let dir = tempdir().unwrap();
        let config = Config::default();

        assert!(record_command(&config, Some(dir.path().to_path_buf()), 3, 2).is_err());

        let app = open_app(&config, Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(app.snapshot().stats.total_xp, 1750);
    }
}
