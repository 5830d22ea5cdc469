//! Mutable state of one play-through and its transitions.

use crate::error::QuizError;
use crate::model::{AnswerRecord, Question};

/// Snapshot of how far the current round has gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub score: usize,
}

/// The session aggregate.
///
/// `current_question_index == answers.len()` and
/// `score == answers.iter().filter(|a| a.was_correct).count()` hold after
/// every public method returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    username: String,
    score: usize,
    current_question_index: usize,
    answers: Vec<AnswerRecord>,
    selected_category: Option<String>,
}

impl QuizSession {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            score: 0,
            current_question_index: 0,
            answers: Vec::new(),
            selected_category: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    /// Record the player's choice for `question`.
    ///
    /// Fails without touching the session if `chosen_index` (or the
    /// question's own correct index) does not name an option.
    pub fn score_answer(
        &mut self,
        question: &Question,
        chosen_index: usize,
    ) -> Result<AnswerRecord, QuizError> {
        let count = question.options.len();
        let chosen = question
            .options
            .get(chosen_index)
            .ok_or(QuizError::OptionOutOfRange {
                index: chosen_index,
                count,
            })?;
        let correct = question
            .correct_option()
            .ok_or(QuizError::OptionOutOfRange {
                index: question.correct_index,
                count,
            })?;

        let was_correct = chosen_index == question.correct_index;
        if was_correct {
            self.score += 1;
        }
        let record = AnswerRecord {
            question_text: question.text.clone(),
            chosen_option_text: chosen.clone(),
            correct_option_text: correct.to_string(),
            was_correct,
        };
        self.answers.push(record.clone());
        self.current_question_index += 1;

        Ok(record)
    }

    /// Progress against a round of `total` questions.
    pub fn progress(&self, total: usize) -> Progress {
        Progress {
            answered: self.current_question_index,
            total,
            score: self.score,
        }
    }

    /// Clear everything except the player's name.
    pub fn reset_for_replay(&mut self) {
        self.score = 0;
        self.current_question_index = 0;
        self.answers.clear();
        self.selected_category = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_questions;

    fn assert_invariants(session: &QuizSession) {
        assert_eq!(session.current_question_index(), session.answers().len());
        let correct = session.answers().iter().filter(|a| a.was_correct).count();
        assert_eq!(session.score(), correct);
    }

    #[test]
    fn correct_answer_increments_score() {
        let q = &default_questions()[0];
        let mut session = QuizSession::new("ada");

        let record = session.score_answer(q, 1).unwrap();
        assert!(record.was_correct);
        assert_eq!(record.chosen_option_text, "Paris");
        assert_eq!(record.correct_option_text, "Paris");

        assert_eq!(session.score(), 1);
        assert_eq!(session.current_question_index(), 1);
        assert_invariants(&session);
    }

    #[test]
    fn returned_record_matches_stored_answer() {
        let questions = default_questions();
        let mut session = QuizSession::new("ada");
        session.score_answer(&questions[0], 1).unwrap();

        let record = session.score_answer(&questions[1], 3).unwrap();
        assert_eq!(session.answers().last(), Some(&record));
        assert_eq!(record.chosen_option_text, "Saturn");
        assert_eq!(session.answers().len(), 2);
    }

    #[test]
    fn every_option_appends_exactly_one_record() {
        let q = &default_questions()[2];
        for chosen in 0..q.options.len() {
            let mut session = QuizSession::new("ada");
            session.score_answer(q, chosen).unwrap();
            assert_eq!(session.answers().len(), 1);
            assert_eq!(session.current_question_index(), 1);
            assert_eq!(session.score(), usize::from(chosen == q.correct_index));
            assert_invariants(&session);
        }
    }

    #[test]
    fn wrong_answer_records_both_options() {
        let q = &default_questions()[2];
        let mut session = QuizSession::new("ada");

        let record = session.score_answer(q, 2).unwrap();
        assert!(!record.was_correct);
        assert_eq!(record.chosen_option_text, "5");
        assert_eq!(record.correct_option_text, "4");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn out_of_range_choice_leaves_state_alone() {
        let q = &default_questions()[0];
        let mut session = QuizSession::new("ada");

        let err = session.score_answer(q, 4).unwrap_err();
        assert!(matches!(
            err,
            QuizError::OptionOutOfRange { index: 4, count: 4 }
        ));
        assert_eq!(session, QuizSession::new("ada"));
    }

    #[test]
    fn progress_is_a_pure_read() {
        let questions = default_questions();
        let mut session = QuizSession::new("ada");
        session.score_answer(&questions[0], 1).unwrap();

        let first = session.progress(3);
        let second = session.progress(3);
        assert_eq!(first, second);
        assert_eq!(
            first,
            Progress {
                answered: 1,
                total: 3,
                score: 1
            }
        );
    }

    #[test]
    fn replay_reset_keeps_username() {
        let questions = default_questions();
        let mut session = QuizSession::new("ada");
        session.set_category(Some("Math".into()));
        session.score_answer(&questions[2], 1).unwrap();
        session.score_answer(&questions[0], 0).unwrap();

        session.reset_for_replay();

        assert_eq!(session.score(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.current_question_index(), 0);
        assert_eq!(session.selected_category(), None);
        assert_eq!(session.username(), "ada");
    }
}
