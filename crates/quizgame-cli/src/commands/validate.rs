//! The `quizgame validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizgame_core::model::categories;
use quizgame_core::parser::{load_questions, validate_questions};

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let questions = load_questions(&questions_path)?;

    println!(
        "Question file: {} ({} questions, {} categories)",
        questions_path.display(),
        questions.len(),
        categories(&questions).len()
    );

    let warnings = validate_questions(&questions);
    for w in &warnings {
        println!("  [Q{}] WARNING: {}", w.number, w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
