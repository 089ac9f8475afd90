use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use crate::error::QuizError;

/// Line-oriented terminal the quiz talks through.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl Console<StdinLock<'static>, StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> Result<(), QuizError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Shows `label` and reads one non-empty line, asking again on blank input.
    pub fn prompt(&mut self, label: &str) -> Result<String, QuizError> {
        loop {
            write!(self.output, "{}", label)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(QuizError::InputClosed);
            }
            let response = line.trim();
            if !response.is_empty() {
                return Ok(response.to_string());
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_and_retries_blank_lines() {
        let mut console = Console::new(Cursor::new("\n   \n  B \n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), "B");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > > ");
    }

    #[test]
    fn test_prompt_on_closed_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert!(matches!(console.prompt("> "), Err(QuizError::InputClosed)));
    }
}
