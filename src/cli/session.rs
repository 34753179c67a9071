//! Interactive read loop

use crate::application::{help_text, Dispatcher, NoteManager};
use crate::cli::output::format_result;
use crate::domain::NoteResult;
use crate::error::Result;
use std::io::{BufRead, Write};

const BANNER: &str = "Simple note manager";

/// Drives a [`Dispatcher`] from line-based input
pub struct Session<M: NoteManager> {
    dispatcher: Dispatcher<M>,
    prompt: String,
}

impl<M: NoteManager> Session<M> {
    pub fn new(manager: M, prompt: impl Into<String>) -> Self {
        Session {
            dispatcher: Dispatcher::new(manager),
            prompt: prompt.into(),
        }
    }

    /// Print the banner, then process lines until quit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", BANNER)?;
        writeln!(output, "\n{}", help_text())?;

        while self.dispatcher.is_running() {
            write!(output, "\n{}", self.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let line = line.trim_end_matches(['\r', '\n']);
            let result = self.dispatcher.process_line(line);
            render(&result, output)?;
        }

        writeln!(output, "Exiting...")?;
        Ok(())
    }

    /// Process each line in order without prompting. Returns the last result;
    /// stops early on quit.
    pub fn run_batch<W: Write>(&mut self, lines: &[String], output: &mut W) -> Result<NoteResult> {
        let mut last = NoteResult::ok_empty();
        for line in lines {
            last = self.dispatcher.process_line(line);
            render(&last, output)?;
            if !self.dispatcher.is_running() {
                break;
            }
        }
        Ok(last)
    }
}

fn render<W: Write>(result: &NoteResult, output: &mut W) -> Result<()> {
    if let Some(text) = format_result(result) {
        writeln!(output, "{}", text)?;
    }
    Ok(())
}
