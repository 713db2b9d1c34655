//! Sources of user input for the shell.

use std::io::{self, BufRead};

/// Reads commands, form fields and confirmations from the user.
pub trait Prompter {
    /// Reads the next shell command. Returns `None` at end of input.
    fn command(&mut self) -> anyhow::Result<Option<String>>;

    /// Reads a free-text form field. End of input reads as empty.
    fn text(&mut self, label: &str) -> anyhow::Result<String>;

    /// Asks a yes/no question, defaulting to no.
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool>;
}

/// Prompts on an attached terminal.
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompter for Terminal {
    fn command(&mut self) -> anyhow::Result<Option<String>> {
        let result = dialoguer::Input::<String>::new()
            .with_prompt("cmap")
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn text(&mut self, label: &str) -> anyhow::Result<String> {
        Ok(dialoguer::Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?)
    }

    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        Ok(dialoguer::Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()?)
    }
}

/// Reads one answer per line, for piped input and tests.
///
/// Nothing is echoed; form fields and confirmations consume the next lines
/// of input in order.
#[derive(Debug)]
pub struct Lines<R> {
    input: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<R: BufRead> Prompter for Lines<R> {
    fn command(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.next_line()?)
    }

    fn text(&mut self, _label: &str) -> anyhow::Result<String> {
        Ok(self.next_line()?.unwrap_or_default())
    }

    fn confirm(&mut self, _question: &str) -> anyhow::Result<bool> {
        let answer = self.next_line()?.unwrap_or_default();
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{Lines, Prompter};

    #[test]
    fn reads_commands_until_end_of_input() {
        let mut lines = Lines::new(Cursor::new("list\r\nsort desc\n"));

        assert_eq!(lines.command().unwrap().as_deref(), Some("list"));
        assert_eq!(lines.command().unwrap().as_deref(), Some("sort desc"));
        assert_eq!(lines.command().unwrap(), None);
    }

    #[test]
    fn text_keeps_surrounding_spaces() {
        let mut lines = Lines::new(Cursor::new("  Alice \n"));
        assert_eq!(lines.text("Name").unwrap(), "  Alice ");
        assert_eq!(lines.text("Phone").unwrap(), "");
    }

    #[test]
    fn confirm_requires_explicit_yes() {
        let mut lines = Lines::new(Cursor::new("y\nYES\nn\n\nmaybe\n"));

        assert!(lines.confirm("Delete?").unwrap());
        assert!(lines.confirm("Delete?").unwrap());
        assert!(!lines.confirm("Delete?").unwrap());
        assert!(!lines.confirm("Delete?").unwrap());
        assert!(!lines.confirm("Delete?").unwrap());
        assert!(!lines.confirm("Delete?").unwrap());
    }
}
