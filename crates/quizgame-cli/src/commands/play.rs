//! The `quizgame play` command.

use anyhow::Result;

use quizgame_core::config::load_config_from;
use quizgame_core::engine::{QuizEngine, QuizEngineConfig};
use quizgame_core::error::QuizError;
use quizgame_core::parser::load_or_create_questions;

use crate::console::StdConsole;
use crate::PlayArgs;

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = load_config_from(args.config.as_deref())?;

    // Command-line flags win over config file and environment
    if let Some(questions) = args.questions {
        config.questions_file = questions;
    }
    if let Some(pause_ms) = args.pause_ms {
        config.pause_ms = pause_ms;
    }
    if args.no_shuffle {
        config.shuffle = false;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let questions = load_or_create_questions(&config.questions_file)?;
    let mut engine = QuizEngine::new(questions, QuizEngineConfig::from(&config))?;
    let mut console = StdConsole::new();

    match engine.run(&mut console) {
        Ok(_) => Ok(()),
        Err(e) if e
            .downcast_ref::<QuizError>()
            .is_some_and(QuizError::is_input_closed) =>
        {
            // Player closed stdin mid-game
            tracing::info!("input closed, ending game");
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}
