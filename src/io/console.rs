//! Line-oriented console abstraction
//!
//! Wraps a buffered reader and a writer behind a small prompt/print
//! interface so interactive flows can run against stdin/stdout in the
//! binary and against in-memory buffers in tests.
//!
//! # Error Handling
//!
//! - End of input is not an error; `prompt` reports it as `Ok(None)` so
//!   callers can wind the session down cleanly
//! - Genuine I/O failures surface as `CheckoutError::IoError`

use std::io::{BufRead, Write};

use crate::types::CheckoutError;

/// Paired input and output streams for an interactive session
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print a prompt and read one answer
    ///
    /// The prompt is written without a trailing newline and the output is
    /// flushed before reading. The answer is returned trimmed.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(answer))` - One line was read
    /// * `Ok(None)` - The input ended
    /// * `Err(CheckoutError)` - Reading or writing failed
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, CheckoutError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Print one full line
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn line(&mut self, text: &str) -> Result<(), CheckoutError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Direct access to the output stream for block rendering
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_writes_text_and_returns_trimmed_answer() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("  Mouse  \n"), &mut output);

        let answer = console.prompt("Item: ").unwrap();

        assert_eq!(answer, Some("Mouse".to_string()));
        assert_eq!(String::from_utf8(output).unwrap(), "Item: ");
    }

    #[test]
    fn test_prompt_reports_end_of_input_as_none() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut output);

        let answer = console.prompt("Item: ").unwrap();

        assert_eq!(answer, None);
    }

    #[test]
    fn test_prompt_reads_successive_lines() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("first\nsecond\n"), &mut output);

        assert_eq!(console.prompt("a: ").unwrap(), Some("first".to_string()));
        assert_eq!(console.prompt("b: ").unwrap(), Some("second".to_string()));
        assert_eq!(console.prompt("c: ").unwrap(), None);
        assert_eq!(String::from_utf8(output).unwrap(), "a: b: c: ");
    }

    #[test]
    fn test_prompt_returns_empty_string_for_blank_line() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("\n"), &mut output);

        let answer = console.prompt("Name: ").unwrap();

        assert_eq!(answer, Some(String::new()));
    }

    #[test]
    fn test_line_appends_newline() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut output);

        console.line("Item not found.").unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Item not found.\n");
    }
}
