//! quizgame CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "quizgame",
    version,
    about = "Interactive command-line trivia quiz",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz (the default when no command is given)
    Play(PlayArgs),

    /// Check a question file for errors and likely mistakes
    Validate {
        /// Path to the JSON question file
        #[arg(long, default_value = "questions.json")]
        questions: PathBuf,
    },

    /// List the categories in a question file
    Categories {
        /// Path to the JSON question file
        #[arg(long, default_value = "questions.json")]
        questions: PathBuf,
    },

    /// Create a sample question file and config
    Init,
}

#[derive(Args, Clone)]
pub(crate) struct PlayArgs {
    /// Path to the JSON question file (created with sample questions if missing)
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pause after each answer, in milliseconds
    #[arg(long)]
    pause_ms: Option<u64>,

    /// Ask questions in file order
    #[arg(long)]
    no_shuffle: bool,

    /// Seed for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,
}

/// Quiet by default so log lines do not interleave with the game.
const DEFAULT_LOG_FILTER: &str = "quizgame=warn,quizgame_core=warn";

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Play(args)) => commands::play::execute(args),
        None => commands::play::execute(cli.play),
        Some(Commands::Validate { questions }) => commands::validate::execute(questions),
        Some(Commands::Categories { questions }) => commands::categories::execute(questions),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
