//! JSON question file loader.
//!
//! Loads question files, writes the sample set when none exists, and
//! validates questions.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::error::QuizError;
use crate::model::{default_questions, Question};

/// Read and check a question file.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    parse_questions_str(&content, path)
}

/// Parse a JSON string into questions (useful for testing).
pub fn parse_questions_str(content: &str, source_path: &Path) -> Result<Vec<Question>> {
    let questions: Vec<Question> = serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;

    check_structure(&questions)
        .with_context(|| format!("invalid question file: {}", source_path.display()))?;

    Ok(questions)
}

/// Load `path`, or create it from the sample set if it does not exist.
///
/// Failing to write the sample file is logged and otherwise ignored; the
/// sample questions are still returned.
pub fn load_or_create_questions(path: &Path) -> Result<Vec<Question>> {
    match std::fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let questions = default_questions();
            match save_questions(path, &questions) {
                Ok(()) => tracing::info!("created sample question file {}", path.display()),
                Err(e) => tracing::warn!("could not save sample questions: {e:#}"),
            }
            return Ok(questions);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read question file: {}", path.display()));
        }
    }

    let questions = load_questions(path)?;
    tracing::info!(
        "loaded {} questions from {}",
        questions.len(),
        path.display()
    );
    Ok(questions)
}

/// Write questions as JSON indented by four spaces.
pub fn save_questions(path: &Path, questions: &[Question]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    questions
        .serialize(&mut ser)
        .context("failed to serialize questions")?;

    std::fs::write(path, buf)
        .with_context(|| format!("failed to write question file: {}", path.display()))?;
    Ok(())
}

/// Rules every playable question set must follow.
fn check_structure(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::NoQuestions);
    }

    for (i, q) in questions.iter().enumerate() {
        if q.options.len() < 2 {
            return Err(QuizError::InvalidQuestion {
                number: i + 1,
                reason: format!("needs at least 2 options, found {}", q.options.len()),
            });
        }
        if q.correct_index >= q.options.len() {
            return Err(QuizError::InvalidQuestion {
                number: i + 1,
                reason: format!(
                    "answer index {} is outside its {} options",
                    q.correct_index,
                    q.options.len()
                ),
            });
        }
    }

    Ok(())
}

/// A non-fatal issue found by [`validate_questions`].
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question in the file.
    pub number: usize,
    /// Warning message.
    pub message: String,
}

/// Check a structurally valid question set for likely authoring mistakes.
pub fn validate_questions(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate question text
    let mut seen_text = HashSet::new();
    for (i, q) in questions.iter().enumerate() {
        if !seen_text.insert(q.text.trim()) {
            warnings.push(ValidationWarning {
                number: i + 1,
                message: format!("duplicate question: {}", q.text.trim()),
            });
        }
    }

    for (i, q) in questions.iter().enumerate() {
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                number: i + 1,
                message: "question text is empty".into(),
            });
        }
        if q.category.trim().is_empty() {
            warnings.push(ValidationWarning {
                number: i + 1,
                message: "category is empty".into(),
            });
        }

        let mut seen_options = HashSet::new();
        for option in &q.options {
            if !seen_options.insert(option.trim()) {
                warnings.push(ValidationWarning {
                    number: i + 1,
                    message: format!("option listed twice: {}", option.trim()),
                });
            }
        }
    }

    warnings
}
