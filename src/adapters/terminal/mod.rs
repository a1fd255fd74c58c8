//! Terminal adapter
//!
//! - [`TerminalPrompter`] - Implements `Prompter` over any reader/writer pair
//! - [`LogReporter`] - Implements `Reporter` on top of the `log` facade

mod reporter;

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::Colorize;

use crate::core::ports::Prompter;

pub use reporter::LogReporter;

/// Line-oriented prompter
///
/// Prompts are printed in bold and followed by a blank line once answered.
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Prompter over arbitrary streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message.bold())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_token(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        writeln!(self.output)?;
        Ok(line.split_whitespace().next().unwrap_or_default().to_string())
    }
}
