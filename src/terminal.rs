use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::style::Stylize;

use crate::QuizGenError;

pub type StdConsole = Console<StdinLock<'static>, Stdout>;

/// Line-oriented prompt/response terminal.
///
/// Generic over its streams so sessions can be driven from memory.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl StdConsole {
    pub fn stdio(color: bool) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self { input, output, color }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Ask for a single value.
    ///
    /// The answer is trimmed. An empty answer yields `default`, or the empty
    /// string when there is none. Closed input is an error rather than an
    /// empty answer.
    pub fn prompt(&mut self, message: &str, default: Option<&str>) -> Result<String, QuizGenError> {
        match default.filter(|d| !d.is_empty()) {
            Some(d) if self.color => write!(self.output, "{} [{}]: ", message, d.dark_grey())?,
            Some(d) => write!(self.output, "{} [{}]: ", message, d)?,
            None => write!(self.output, "{}: ", message)?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizGenError::InputClosed);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "-".repeat(title.chars().count());
        if self.color {
            writeln!(self.output, "{}\n{}", title.cyan().bold(), rule.dark_grey())
        } else {
            writeln!(self.output, "{}\n{}", title, rule)
        }
    }

    /// Section heading, preceded by a blank line.
    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "\n{}", text.bold())
        } else {
            writeln!(self.output, "\n{}", text)
        }
    }

    pub fn notice(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.yellow())
        } else {
            writeln!(self.output, "{}", text)
        }
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.red())
        } else {
            writeln!(self.output, "{}", text)
        }
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.green())
        } else {
            writeln!(self.output, "{}", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_prompt_trims_answer() {
        let mut c = console("  hello world \n");
        assert_eq!(c.prompt("Greeting", None).unwrap(), "hello world");
        assert_eq!(printed(&c), "Greeting: ");
    }

    #[test]
    fn test_prompt_answer_wins_over_default() {
        let mut c = console("multiple-choice\n");
        let answer = c.prompt("Question type", Some("same-letter-mc")).unwrap();
        assert_eq!(answer, "multiple-choice");
        assert_eq!(printed(&c), "Question type [same-letter-mc]: ");
    }

    #[test]
    fn test_prompt_empty_uses_default() {
        let mut c = console("   \n");
        assert_eq!(c.prompt("Add another question? (y/n)", Some("y")).unwrap(), "y");
    }

    #[test]
    fn test_prompt_empty_without_default() {
        let mut c = console("\n");
        assert_eq!(c.prompt("Explanation", None).unwrap(), "");
    }

    #[test]
    fn test_prompt_reads_one_line_at_a_time() {
        let mut c = console("first\nsecond\n");
        assert_eq!(c.prompt("One", None).unwrap(), "first");
        assert_eq!(c.prompt("Two", None).unwrap(), "second");
    }

    #[test]
    fn test_prompt_last_line_without_newline() {
        let mut c = console("tail");
        assert_eq!(c.prompt("Value", None).unwrap(), "tail");
    }

    #[test]
    fn test_prompt_closed_input() {
        let mut c = console("");
        let err = c.prompt("Value", Some("x")).unwrap_err();
        assert!(matches!(err, QuizGenError::InputClosed));
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let mut c = console("");
        c.banner("Title").unwrap();
        c.heading("Section").unwrap();
        c.warning("careful").unwrap();
        assert_eq!(printed(&c), "Title\n-----\n\nSection\ncareful\n");
    }
}
