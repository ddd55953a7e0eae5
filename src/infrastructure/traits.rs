//! I/O boundary traits for testability
//!
//! Commands and the shell talk to the terminal through [`Console`], allowing
//! them to be tested with an in-memory implementation.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use colored::Colorize;

/// Line-oriented terminal abstraction.
pub trait Console: Send + Sync {
    /// Write a line to standard output.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Write an error message to standard error.
    fn write_error(&self, message: &str) -> io::Result<()>;

    /// Show `prompt` and read one line without its line ending.
    /// Returns None at end of input.
    fn read_line(&self, prompt: &str) -> io::Result<Option<String>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Console backed by the process's stdin, stdout and stderr.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)
    }

    fn write_error(&self, message: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{}", message.red())
    }

    fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(&line).to_string()))
    }
}

/// Console with scripted input that records everything written.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    input: Mutex<VecDeque<String>>,
    output: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryConsole {
    /// Console that will answer prompts with `lines`, then report end of input.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Lines written to standard output so far.
    pub fn output(&self) -> Vec<String> {
        lock(&self.output).clone()
    }

    /// Messages written to standard error so far.
    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        lock(&self.output).push(line.to_string());
        Ok(())
    }

    fn write_error(&self, message: &str) -> io::Result<()> {
        lock(&self.errors).push(message.to_string());
        Ok(())
    }

    fn read_line(&self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(lock(&self.input)
            .pop_front()
            .map(|line| trim_line_ending(&line).to_string()))
    }
}

// A poisoned buffer still holds valid lines.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(&['\r', '\n'][..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_scripted_input_when_reading_then_lines_then_eof() {
        let console = MemoryConsole::with_input(["first\n", "second\r\n"]);

        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line("> ").unwrap(), None);
    }

    #[test]
    fn given_writes_when_inspecting_then_recorded_separately() {
        let console = MemoryConsole::default();

        console.write_line("out").unwrap();
        console.write_error("err").unwrap();

        assert_eq!(console.output(), vec!["out"]);
        assert_eq!(console.errors(), vec!["err"]);
    }
}
