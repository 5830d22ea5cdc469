//! Scripted console for testing.

use std::collections::VecDeque;

use anyhow::Result;

use crate::error::QuizError;
use crate::traits::Console;

/// A console that replays queued input lines and records everything shown.
///
/// Once the script runs out, prompts fail with [`QuizError::InputClosed`],
/// the same way a closed stdin does.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    /// Lines still to be returned from prompts.
    inputs: VecDeque<String>,
    /// Everything written, prompts included.
    transcript: String,
    /// Number of prompts issued.
    prompt_count: usize,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything shown so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of prompts issued, answered or not.
    pub fn prompt_count(&self) -> usize {
        self.prompt_count
    }

    /// Inputs that were never consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// How many times `needle` appears in the transcript.
    pub fn count(&self, needle: &str) -> usize {
        self.transcript.matches(needle).count()
    }
}

impl Console for ScriptedConsole {
    fn prompt_line(&mut self, message: &str) -> Result<String> {
        self.prompt_count += 1;
        self.transcript.push_str(message);
        let line = self.inputs.pop_front().ok_or(QuizError::InputClosed)?;
        self.transcript.push_str(&line);
        self.transcript.push('\n');
        Ok(line)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_inputs_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.prompt_line("a? ").unwrap(), "first");
        assert_eq!(console.prompt_line("b? ").unwrap(), "second");
        assert_eq!(console.prompt_count(), 2);
        assert_eq!(console.remaining(), 0);
        assert_eq!(console.transcript(), "a? first\nb? second\n");
    }

    #[test]
    fn exhausted_script_reports_closed_input() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = console.prompt_line("name? ").unwrap_err();
        assert!(err.downcast_ref::<QuizError>().unwrap().is_input_closed());
    }

    #[test]
    fn say_is_recorded() {
        let mut console = ScriptedConsole::default();
        console.say("hello").unwrap();
        console.say("hello").unwrap();
        assert_eq!(console.count("hello"), 2);
    }
}
