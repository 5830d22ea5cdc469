//! The `quizgame init` command.

use std::path::Path;

use anyhow::Result;

use quizgame_core::model::default_questions;
use quizgame_core::parser::save_questions;

pub fn execute() -> Result<()> {
    // Create quizgame.toml
    if Path::new("quizgame.toml").exists() {
        println!("quizgame.toml already exists, skipping.");
    } else {
        std::fs::write("quizgame.toml", SAMPLE_CONFIG)?;
        println!("Created quizgame.toml");
    }

    // Create sample question file
    let questions_path = Path::new("questions.json");
    if questions_path.exists() {
        println!("questions.json already exists, skipping.");
    } else {
        save_questions(questions_path, &default_questions())?;
        println!("Created questions.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own questions to questions.json");
    println!("  2. Run: quizgame validate --questions questions.json");
    println!("  3. Run: quizgame play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizgame configuration

# JSON file with the quiz questions
questions_file = "questions.json"

# Pause after each answer, in milliseconds (0 disables)
pause_ms = 1000

# Shuffle questions before each round
shuffle = true

# Fixed seed for a reproducible question order
# seed = 42
"#;
