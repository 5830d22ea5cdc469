//! Quiz error types.
//!
//! `SelectionError` is recovered locally by reprompting and never leaves the
//! engine. `QuizError` covers the conditions that end a game or reject a
//! question file, so callers can downcast them out of an `anyhow::Error`
//! without string matching.

use thiserror::Error;

/// Why a line of input was not accepted as a menu selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The input is not an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The input is an integer outside `1..=max`.
    #[error("choice out of range (expected 1-{max})")]
    OutOfRange { max: usize },
}

/// Errors that stop a quiz or reject its questions.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The input stream was closed while a prompt was waiting.
    #[error("input closed while waiting for an answer")]
    InputClosed,

    /// The question file holds no questions at all.
    #[error("question file contains no questions")]
    NoQuestions,

    /// A question breaks a structural rule (1-based position in the file).
    #[error("question {number} is invalid: {reason}")]
    InvalidQuestion { number: usize, reason: String },

    /// An answer index does not name one of the question's options.
    #[error("option {index} does not exist (question has {count} options)")]
    OptionOutOfRange { index: usize, count: usize },
}

impl QuizError {
    /// Returns `true` if the player simply stopped providing input.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, QuizError::InputClosed)
    }
}
