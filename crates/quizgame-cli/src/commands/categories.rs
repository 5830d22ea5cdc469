//! The `quizgame categories` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizgame_core::model::{categories, filter_questions};
use quizgame_core::parser::load_questions;

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let questions = load_questions(&questions_path)?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Category", "Questions"]);

    for (i, category) in categories(&questions).iter().enumerate() {
        let count = filter_questions(&questions, Some(category)).len();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(category),
            Cell::new(count),
        ]);
    }

    println!("{table}");
    println!("{} questions in total", questions.len());

    Ok(())
}
