//! Interactive prompts.
//!
//! Reads answers line by line from any `BufRead` and writes questions to
//! any `Write`, so the same code serves the terminal and the tests.

use crate::{Error, Result};
use std::io::{self, BufRead, Write};

/// Line-based question/answer helper.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on the process terminal. Questions go to stderr, so stdout
    /// carries only the command's report.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, without its line ending. `None` at end of input.
    fn read_line(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask a yes/no question until the answer is one of them.
    ///
    /// End of input counts as "no".
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let Some(line) = self.read_line(&format!("{} (yes/no) ", question))? else {
                return Ok(false);
            };

            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Type 'yes' or 'no'.")?,
            }
        }
    }

    /// Ask for a non-empty text. An empty answer keeps `default`.
    pub fn text(&mut self, question: &str, default: &str) -> Result<String> {
        loop {
            let Some(line) = self.read_line(&format!("{} [{}]: ", question, default))? else {
                if default.is_empty() {
                    return Err(Error::other(format!("No answer for: {}", question)));
                }
                return Ok(default.to_string());
            };

            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            if !default.is_empty() {
                return Ok(default.to_string());
            }

            writeln!(self.output, "Type something?")?;
        }
    }

    /// Ask for a non-negative number. An empty answer keeps `default`.
    pub fn number(&mut self, question: &str, default: u32) -> Result<u32> {
        loop {
            let Some(line) = self.read_line(&format!("{} [{}]: ", question, default))? else {
                return Ok(default);
            };

            let answer = line.trim();
            if answer.is_empty() {
                return Ok(default);
            }

            match answer.parse::<u32>() {
                Ok(number) => return Ok(number),
                Err(_) => writeln!(self.output, "Not a number, try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_confirm() {
        assert!(prompt("yes\n").confirm("Rename?").unwrap());
        assert!(prompt("Y\n").confirm("Rename?").unwrap());
        assert!(!prompt("no\n").confirm("Rename?").unwrap());
    }

    #[test]
    fn test_confirm_retries_until_valid() {
        let mut p = prompt("maybe\n\ny\n");
        assert!(p.confirm("Rename?").unwrap());

        let output = String::from_utf8(p.output).unwrap();
        assert_eq!(output.matches("Type 'yes' or 'no'.").count(), 2);
    }

    #[test]
    fn test_confirm_end_of_input_is_no() {
        assert!(!prompt("").confirm("Rename?").unwrap());
        assert!(!prompt("what\n").confirm("Rename?").unwrap());
    }

    #[test]
    fn test_text() {
        assert_eq!(prompt("Scrubs\n").text("Show", "Scrub").unwrap(), "Scrubs");
        assert_eq!(prompt("\n").text("Show", "Scrubs").unwrap(), "Scrubs");
        assert_eq!(prompt("").text("Show", "Scrubs").unwrap(), "Scrubs");
        assert_eq!(prompt("\r\n  \nFriends\r\n").text("Show", "").unwrap(), "Friends");
    }

    #[test]
    fn test_text_no_answer() {
        assert!(prompt("\n").text("Show", "").is_err());
    }

    #[test]
    fn test_number() {
        assert_eq!(prompt("4\n").number("Season", 1).unwrap(), 4);
        assert_eq!(prompt("\n").number("Season", 2).unwrap(), 2);
        assert_eq!(prompt("two\n-1\n0\n").number("Season", 2).unwrap(), 0);
        assert_eq!(prompt("").number("Season", 3).unwrap(), 3);
    }
}
