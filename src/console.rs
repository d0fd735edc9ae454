use std::io::{BufRead, Write};

use crate::error::BankError;

/// Line-oriented terminal. Generic so sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<(), BankError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<(), BankError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line. `None` once input is
    /// exhausted.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>, BankError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_trimmed_lines_until_eof() {
        let mut console = Console::new(Cursor::new("  jon \nsnow\n"), Vec::new());

        assert_eq!(console.prompt("first: ").unwrap().as_deref(), Some("jon"));
        assert_eq!(console.prompt("last: ").unwrap().as_deref(), Some("snow"));
        assert_eq!(console.prompt("more: ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "first: last: more: ");
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("#: ").unwrap().as_deref(), Some(""));
    }
}
