//! Reset command implementation

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Result;

use studybuddy::config::Config;
use studybuddy::Command;

use super::open_app;

/// Wipe all progress back to the starting profile
pub fn reset_command(config: &Config, data_dir: Option<PathBuf>, yes: bool) -> Result<()> {
    if !yes {
        print!("This erases all XP, levels and badges. Continue? [y/N] ");
        std::io::Write::flush(&mut std::io::stdout())?;
        if !confirm(std::io::stdin().lock())? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let mut app = open_app(config, data_dir)?;
    app.handle(Command::Reset)?;
    println!("Progress reset.");

    Ok(())
}

fn confirm<R: BufRead>(mut input: R) -> Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
