use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use studybuddy::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "studybuddy")]
#[command(about = "StudyBuddy - turn notes into flashcards and level up while you practice")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.studybuddy/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding studybuddy.db (overrides the config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate flashcards from notes (reads stdin when no file is given)
    Generate {
        /// Notes file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Skip the staged progress pauses
        #[arg(long)]
        no_delay: bool,
    },

    /// Practice the saved flashcards
    Practice,

    /// Record a practice score directly
    Record {
        /// Cards answered correctly
        #[arg(long)]
        correct: u32,

        /// Cards answered in total
        #[arg(long)]
        total: u32,
    },

    /// Show level, stats, badges and the leaderboard
    Dashboard {
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reset all progress to the starting profile
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr keeps --json output clean)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = || Config::load(cli.config.as_deref());
    let data_dir = cli.data_dir.clone();

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config.clone(), force)?;
        }
        Some(Commands::Generate { file, no_delay }) => {
            cli::generate::generate_command(&config()?, data_dir, file, no_delay).await?;
        }
        Some(Commands::Practice) => {
            cli::practice::practice_command(&config()?, data_dir).await?;
        }
        Some(Commands::Record { correct, total }) => {
            cli::record::record_command(&config()?, data_dir, correct, total)?;
        }
        Some(Commands::Dashboard { json }) => {
            cli::dashboard::dashboard_command(&config()?, data_dir, json)?;
        }
        Some(Commands::Reset { yes }) => {
            cli::reset::reset_command(&config()?, data_dir, yes)?;
        }
        None => {
            // Default: show the dashboard
            cli::dashboard::dashboard_command(&config()?, data_dir, false)?;
        }
    }

    Ok(())
}
