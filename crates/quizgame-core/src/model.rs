//! Core data model types for quizgame.
//!
//! Questions are loaded once and never mutated; answer records are the only
//! values created during play.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single multiple-choice quiz item.
///
/// Field names on disk follow the question file format (`question`,
/// `options`, `answer`, `category`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the player.
    #[serde(rename = "question")]
    pub text: String,
    /// Answer options, displayed 1-based.
    pub options: Vec<String>,
    /// 0-based index of the correct option.
    #[serde(rename = "answer")]
    pub correct_index: usize,
    /// Category label used for filtering.
    pub category: String,
}

impl Question {
    pub fn new(text: &str, options: &[&str], correct_index: usize, category: &str) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            category: category.to_string(),
        }
    }

    /// Text of the correct option, if the index is in range.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

/// The retained record of one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_text: String,
    pub chosen_option_text: String,
    pub correct_option_text: String,
    pub was_correct: bool,
}

/// Deduplicated, sorted category labels of `questions`.
pub fn categories(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .map(|q| q.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Questions belonging to `category`, or all of them when no category is set.
///
/// Relative order is preserved. An empty result is the caller's problem.
pub fn filter_questions(all: &[Question], category: Option<&str>) -> Vec<Question> {
    match category {
        Some(category) => all
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect(),
        None => all.to_vec(),
    }
}

/// The sample set written when no question file exists yet.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            &["London", "Paris", "Berlin", "Madrid"],
            1,
            "Geography",
        ),
        Question::new(
            "Which planet is known as the Red Planet?",
            &["Venus", "Mars", "Jupiter", "Saturn"],
            1,
            "Science",
        ),
        Question::new("What is 2 + 2?", &["3", "4", "5", "6"], 1, "Math"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Vec<Question> {
        vec![
            Question::new("q1", &["a", "b"], 0, "Science"),
            Question::new("q2", &["a", "b"], 1, "Art"),
            Question::new("q3", &["a", "b"], 0, "Science"),
            Question::new("q4", &["a", "b"], 1, "History"),
        ]
    }

    #[test]
    fn categories_are_sorted_and_unique() {
        assert_eq!(categories(&mixed()), vec!["Art", "History", "Science"]);
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn filter_without_category_returns_everything() {
        let all = mixed();
        assert_eq!(filter_questions(&all, None), all);
    }

    #[test]
    fn filter_keeps_matching_items_in_order() {
        let filtered = filter_questions(&mixed(), Some("Science"));
        let texts: Vec<&str> = filtered.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["q1", "q3"]);
        assert!(filtered.iter().all(|q| q.category == "Science"));
    }

    #[test]
    fn filter_unknown_category_is_empty() {
        assert!(filter_questions(&mixed(), Some("Sports")).is_empty());
    }

    #[test]
    fn question_uses_file_field_names() {
        let json = r#"{"question": "What is 2 + 2?", "options": ["3", "4"], "answer": 1, "category": "Math"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.text, "What is 2 + 2?");
        assert_eq!(q.correct_index, 1);
        assert_eq!(q.correct_option(), Some("4"));

        let back = serde_json::to_value(&q).unwrap();
        assert_eq!(back["question"], "What is 2 + 2?");
        assert_eq!(back["answer"], 1);
    }

    #[test]
    fn default_set_matches_sample() {
        let defaults = default_questions();
        assert_eq!(defaults.len(), 3);
        assert_eq!(defaults[0].correct_option(), Some("Paris"));
        assert_eq!(defaults[1].correct_option(), Some("Mars"));
        assert_eq!(defaults[2].correct_option(), Some("4"));
        assert_eq!(categories(&defaults), vec!["Geography", "Math", "Science"]);
    }
}
