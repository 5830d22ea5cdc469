//! End-of-round results: percentage, tier, and answer review.

use std::fmt::Write as _;

use crate::model::AnswerRecord;
use crate::session::QuizSession;

/// Width of the results banner.
const BANNER_WIDTH: usize = 50;

/// Outcome tier for a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    /// 70% or better.
    QuizMaster,
    /// At least 50% but under 70%.
    GoodJob,
    /// Under 50%.
    KeepPracticing,
}

impl ResultTier {
    /// Classify an unrounded percentage.
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 70.0 {
            ResultTier::QuizMaster
        } else if percentage >= 50.0 {
            ResultTier::GoodJob
        } else {
            ResultTier::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ResultTier::QuizMaster => "Excellent! You're a quiz master! 🏆",
            ResultTier::GoodJob => "Good job! You know your stuff! 👍",
            ResultTier::KeepPracticing => "Keep practicing! You'll get better! 💪",
        }
    }
}

/// Percentage of correct answers, or 0 when nothing was answered.
pub fn percentage(score: usize, answered: usize) -> f64 {
    if answered == 0 {
        return 0.0;
    }
    100.0 * score as f64 / answered as f64
}

/// Results of one finished round.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResults {
    pub username: String,
    /// `None` means every category was played.
    pub category: Option<String>,
    pub score: usize,
    pub answered: usize,
    pub percentage: f64,
    pub tier: ResultTier,
    pub review: Vec<AnswerRecord>,
}

impl QuizResults {
    pub fn from_session(session: &QuizSession) -> Self {
        let answered = session.answers().len();
        let percentage = percentage(session.score(), answered);
        Self {
            username: session.username().to_string(),
            category: session.selected_category().map(str::to_string),
            score: session.score(),
            answered,
            percentage,
            tier: ResultTier::classify(percentage),
            review: session.answers().to_vec(),
        }
    }

    /// Category label as shown to the player.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("All Categories")
    }

    /// Render the full results screen.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(BANNER_WIDTH);

        // Writing into a String cannot fail.
        let _ = writeln!(out, "\n{rule}");
        let _ = writeln!(out, "{:=^BANNER_WIDTH$}", " QUIZ RESULTS ");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "\nPlayer: {}", self.username);
        let _ = writeln!(out, "Category: {}", self.category_label());
        let _ = writeln!(
            out,
            "Score: {}/{} ({:.1}%)",
            self.score, self.answered, self.percentage
        );
        let _ = writeln!(out, "\n{}", self.tier.message());

        let _ = writeln!(out, "\n{:-^BANNER_WIDTH$}", " ANSWER REVIEW ");
        for (i, answer) in self.review.iter().enumerate() {
            let marker = if answer.was_correct { "✅" } else { "❌" };
            let _ = writeln!(out, "\nQ{}: {}", i + 1, answer.question_text);
            let _ = writeln!(out, "Your answer: {} {marker}", answer.chosen_option_text);
            if !answer.was_correct {
                let _ = writeln!(out, "Correct answer: {}", answer.correct_option_text);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_questions;

    #[test]
    fn percentage_guards_zero_answers() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 4), 75.0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ResultTier::classify(100.0), ResultTier::QuizMaster);
        assert_eq!(ResultTier::classify(70.0), ResultTier::QuizMaster);
        assert_eq!(ResultTier::classify(69.99), ResultTier::GoodJob);
        assert_eq!(ResultTier::classify(50.0), ResultTier::GoodJob);
        assert_eq!(ResultTier::classify(49.9), ResultTier::KeepPracticing);
        assert_eq!(ResultTier::classify(0.0), ResultTier::KeepPracticing);
    }

    #[test]
    fn two_of_three_is_mid_tier() {
        let questions = default_questions();
        let mut session = QuizSession::new("ada");
        session.score_answer(&questions[0], 1).unwrap();
        session.score_answer(&questions[1], 1).unwrap();
        session.score_answer(&questions[2], 2).unwrap();

        let results = QuizResults::from_session(&session);
        assert_eq!(results.score, 2);
        assert_eq!(results.answered, 3);
        assert_eq!(format!("{:.1}", results.percentage), "66.7");
        assert_eq!(results.tier, ResultTier::GoodJob);

        let text = results.render();
        assert!(text.contains("Score: 2/3 (66.7%)"));
        assert!(text.contains("Category: All Categories"));
        assert!(text.contains("Good job!"));
        assert!(text.contains("Q3: What is 2 + 2?"));
        assert!(text.contains("Your answer: 5 ❌"));
        assert!(text.contains("Correct answer: 4"));
    }

    #[test]
    fn review_only_lists_correct_answer_for_misses() {
        let questions = default_questions();
        let mut session = QuizSession::new("ada");
        session.set_category(Some("Geography".into()));
        session.score_answer(&questions[0], 1).unwrap();

        let text = QuizResults::from_session(&session).render();
        assert!(text.contains("Category: Geography"));
        assert!(text.contains("Your answer: Paris ✅"));
        assert!(!text.contains("Correct answer:"));
    }

    #[test]
    fn empty_round_renders_without_faulting() {
        let results = QuizResults::from_session(&QuizSession::new("ada"));
        assert_eq!(results.percentage, 0.0);
        assert_eq!(results.tier, ResultTier::KeepPracticing);
        assert!(results.render().contains("Score: 0/0 (0.0%)"));
    }

    #[test]
    fn banner_is_centered() {
        let text = QuizResults::from_session(&QuizSession::new("ada")).render();
        let title = text.lines().find(|l| l.contains("QUIZ RESULTS")).unwrap();
        assert_eq!(title.chars().count(), BANNER_WIDTH);
        assert!(title.starts_with("==="));
        assert!(title.ends_with("==="));
    }
}
