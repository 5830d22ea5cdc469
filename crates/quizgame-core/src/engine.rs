//! Play loop orchestrator.
//!
//! Drives a [`QuizSession`] through name entry, category selection, the
//! question round, results, and replay, talking to the player only through
//! a [`Console`].

use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use uuid::Uuid;

use crate::config::QuizConfig;
use crate::error::{QuizError, SelectionError};
use crate::model::{categories, filter_questions, Question};
use crate::report::QuizResults;
use crate::selection::{parse_selection, parse_yes_no};
use crate::session::{Progress, QuizSession};
use crate::traits::Console;

const WELCOME_BANNER: &str = r#"
******************************
*       WELCOME TO QUIZ      *
*            GAME            *
******************************
"#;

/// Configuration for the quiz engine.
#[derive(Debug, Clone)]
pub struct QuizEngineConfig {
    /// Pause after each scored answer.
    pub pause: Duration,
    /// Shuffle each round's questions.
    pub shuffle: bool,
    /// Seed for the shuffle; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for QuizEngineConfig {
    fn default() -> Self {
        Self {
            pause: Duration::from_secs(1),
            shuffle: true,
            seed: None,
        }
    }
}

impl From<&QuizConfig> for QuizEngineConfig {
    fn from(config: &QuizConfig) -> Self {
        Self {
            pause: Duration::from_millis(config.pause_ms),
            shuffle: config.shuffle,
            seed: config.seed,
        }
    }
}

/// The quiz engine.
pub struct QuizEngine {
    questions: Vec<Question>,
    categories: Vec<String>,
    config: QuizEngineConfig,
    rng: StdRng,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, config: QuizEngineConfig) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions.into());
        }
        let categories = categories(&questions);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            questions,
            categories,
            config,
            rng,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Play until the player declines a replay.
    ///
    /// Returns the results of every finished round, in order.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<Vec<QuizResults>> {
        let mut session = self.initialize(console)?;
        let mut rounds = Vec::new();

        loop {
            let results = self.play_round(console, &mut session)?;
            rounds.push(results);

            if !self.offer_replay(console, &mut session)? {
                break;
            }
        }

        tracing::info!(
            "{} finished after {} round(s)",
            session.username(),
            rounds.len()
        );
        Ok(rounds)
    }

    /// One pass from category selection to the results screen.
    pub fn play_round(
        &mut self,
        console: &mut dyn Console,
        session: &mut QuizSession,
    ) -> Result<QuizResults> {
        let span = tracing::info_span!("round", id = %Uuid::new_v4());
        let _guard = span.enter();

        let mut round = self.choose_round(console, session, &self.categories)?;
        if self.config.shuffle {
            round.shuffle(&mut self.rng);
        }
        tracing::info!(
            "starting round: {} question(s) in {}",
            round.len(),
            session.selected_category().unwrap_or("all categories")
        );

        for question in &round {
            self.report_progress(console, session, round.len())?;
            let chosen = self.ask_question(console, session, question)?;
            self.score_answer(console, session, question, chosen)?;
        }

        self.report_results(console, session)
    }

    /// Greet the player and ask for a name.
    pub fn initialize(&self, console: &mut dyn Console) -> Result<QuizSession> {
        console.say(WELCOME_BANNER)?;

        let username = loop {
            let name = console.prompt_line("Enter your name: ")?;
            let name = name.trim();
            if name.is_empty() {
                console.say("Please enter your name.")?;
                continue;
            }
            break name.to_string();
        };

        console.say(&format!("\nHello, {username}! Let's get started.\n"))?;
        Ok(QuizSession::new(username))
    }

    /// Pick a category from `categories` and return its questions.
    ///
    /// A category with no questions is announced and the menu shown again.
    /// The engine's own menu is derived from its questions, so every entry
    /// is non-empty; a caller-supplied list need not be.
    pub fn choose_round(
        &self,
        console: &mut dyn Console,
        session: &mut QuizSession,
        categories: &[String],
    ) -> Result<Vec<Question>> {
        loop {
            let category = self.select_category(console, categories)?;
            session.set_category(Some(category));

            let filtered = filter_questions(&self.questions, session.selected_category());
            if filtered.is_empty() {
                console.say("No questions available in this category. Please select another.")?;
                continue;
            }
            return Ok(filtered);
        }
    }

    /// Show the category menu and return the chosen category.
    pub fn select_category(
        &self,
        console: &mut dyn Console,
        categories: &[String],
    ) -> Result<String> {
        if categories.is_empty() {
            return Err(QuizError::NoQuestions.into());
        }
        console.say("Available Categories:")?;
        for (i, category) in categories.iter().enumerate() {
            console.say(&format!("{}. {category}", i + 1))?;
        }

        let index = prompt_choice(console, "\nSelect a category (number): ", categories.len())?;
        let category = categories[index].clone();
        console.say(&format!("\nYou've selected: {category}\n"))?;
        Ok(category)
    }

    /// Show a question and return the 0-based option the player picked.
    pub fn ask_question(
        &self,
        console: &mut dyn Console,
        session: &QuizSession,
        question: &Question,
    ) -> Result<usize> {
        console.say(&format!(
            "Question {}: {}",
            session.current_question_index() + 1,
            question.text
        ))?;
        for (i, option) in question.options.iter().enumerate() {
            console.say(&format!("{}. {option}", i + 1))?;
        }

        prompt_choice(console, "\nYour answer (number): ", question.options.len())
    }

    /// Score the answer, tell the player how it went, then pause.
    pub fn score_answer(
        &self,
        console: &mut dyn Console,
        session: &mut QuizSession,
        question: &Question,
        chosen_index: usize,
    ) -> Result<()> {
        let record = session.score_answer(question, chosen_index)?;
        tracing::debug!(
            question = %record.question_text,
            correct = record.was_correct,
            "answer recorded"
        );

        if record.was_correct {
            console.say("\nCorrect! 🎉")?;
        } else {
            let message = format!(
                "\nWrong! The correct answer was: {}",
                record.correct_option_text
            );
            console.say(&message)?;
        }

        if !self.config.pause.is_zero() {
            std::thread::sleep(self.config.pause);
        }
        Ok(())
    }

    /// Show answered/total and the current score.
    pub fn report_progress(
        &self,
        console: &mut dyn Console,
        session: &QuizSession,
        total: usize,
    ) -> Result<Progress> {
        let progress = session.progress(total);
        console.say(&format!(
            "\nProgress: {}/{} | Score: {}\n",
            progress.answered, progress.total, progress.score
        ))?;
        Ok(progress)
    }

    /// Show the results screen for the finished round.
    pub fn report_results(
        &self,
        console: &mut dyn Console,
        session: &QuizSession,
    ) -> Result<QuizResults> {
        let results = QuizResults::from_session(session);
        tracing::info!(
            "round over: {}/{} ({:.1}%)",
            results.score,
            results.answered,
            results.percentage
        );
        console.say(&results.render())?;
        Ok(results)
    }

    /// Ask whether to play again, resetting the session on yes.
    pub fn offer_replay(
        &self,
        console: &mut dyn Console,
        session: &mut QuizSession,
    ) -> Result<bool> {
        loop {
            let reply = console.prompt_line("\nWould you like to play again? (yes/no): ")?;
            match parse_yes_no(&reply) {
                Some(true) => {
                    session.reset_for_replay();
                    return Ok(true);
                }
                Some(false) => {
                    console.say("\nThanks for playing! Goodbye!")?;
                    return Ok(false);
                }
                None => console.say("Please enter 'yes' or 'no'.")?,
            }
        }
    }
}

/// Prompt until the reply selects one of `count` numbered entries.
fn prompt_choice(console: &mut dyn Console, message: &str, count: usize) -> Result<usize> {
    loop {
        let reply = console.prompt_line(message)?;
        match parse_selection(&reply, count) {
            Ok(index) => return Ok(index),
            Err(SelectionError::NotANumber(_)) => console.say("Please enter a valid number.")?,
            Err(SelectionError::OutOfRange { .. }) => {
                console.say("Invalid choice. Please try again.")?
            }
        }
    }
}
