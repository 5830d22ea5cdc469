//! The console seam between the quiz engine and the player.
//!
//! The engine never touches stdin/stdout directly. The CLI provides a
//! terminal implementation; tests use [`crate::mock::ScriptedConsole`].

use anyhow::Result;

/// Line-oriented, blocking interaction with the player.
pub trait Console {
    /// Show `message` and block until one line of input arrives.
    ///
    /// Implementations return [`crate::error::QuizError::InputClosed`] when no
    /// more input can arrive. The returned line has its line ending stripped.
    fn prompt_line(&mut self, message: &str) -> Result<String>;

    /// Show a line of text.
    fn say(&mut self, text: &str) -> Result<()>;
}
