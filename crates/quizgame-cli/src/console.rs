//! Terminal console backed by stdin/stdout.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use quizgame_core::error::QuizError;
use quizgame_core::traits::Console;

/// Blocking line console on the process's standard streams.
pub struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::StdoutLock<'static>,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout().lock(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn prompt_line(&mut self, message: &str) -> Result<String> {
        write!(self.stdout, "{message}").context("failed to write prompt")?;
        self.stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .stdin
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Err(QuizError::InputClosed.into());
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.stdout, "{text}").context("failed to write to stdout")?;
        Ok(())
    }
}
