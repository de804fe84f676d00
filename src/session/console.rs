//! Line-based player I/O
//!
//! The session only ever reads one line and writes one line at a time. This
//! trait is that boundary; `StdConsole` talks to the terminal and
//! `ScriptedConsole` replays canned input.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// One line in, one line out
pub trait Console {
    /// Read a line without its terminator
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    /// Returns any I/O error from the underlying reader.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Show a line to the player
    ///
    /// # Errors
    /// Returns any I/O error from the underlying writer.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console over any reader/writer pair, normally stdin and stdout
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console attached to the process terminal
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD and the line plays as an ordinary guess
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

/// Console that answers from a fixed script and records what was shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every line written so far
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whether any written line contains `needle`
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    /// Number of written lines containing `needle`
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }

    /// Input lines not consumed yet
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
