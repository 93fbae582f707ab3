use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// What a rejected answer does to the rest of its input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnReject {
    /// Later tokens on the same line are still read as answers.
    KeepLine,
    /// Later tokens on the same line are dropped.
    DiscardLine,
}

/// Token-oriented terminal I/O.
///
/// Input is split on whitespace, so several answers may be typed on one line
/// and consumed by consecutive prompts. `None` from any read means the input
/// stream is closed.
pub struct Console<R, W, E> {
    input: R,
    output: W,
    error: E,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, output: W, error: E) -> Self {
        Self {
            input,
            output,
            error,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-delimited token, reading more lines as needed.
    /// Bytes that are not valid UTF-8 become U+FFFD, so such input is
    /// rejected by validation instead of failing the read.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Drop whatever is left of the line the last token came from.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Print `prompt` and read one token.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.next_token()
    }

    /// Print `prompt` and read tokens until `is_valid` accepts one. Each
    /// rejected token prints `error_message`; `on_reject` decides whether the
    /// rest of its line is kept for the next attempt.
    pub fn prompt_until<F>(
        &mut self,
        prompt: &str,
        error_message: &str,
        on_reject: OnReject,
        is_valid: F,
    ) -> io::Result<Option<String>>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let Some(token) = self.prompt(prompt)? else {
                return Ok(None);
            };
            if is_valid(&token) {
                return Ok(Some(token));
            }
            if on_reject == OnReject::DiscardLine {
                self.discard_line();
            }
            self.say(error_message)?;
        }
    }

    /// Write a line to the output stream.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Write raw text (no trailing newline added) to the output stream.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Write a line to the error stream.
    pub fn report_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.error, "{}", message)?;
        self.error.flush()
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.error)
    }
}
