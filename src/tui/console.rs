//! Line-based console: prompts, reads a line, writes feedback

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{self, BufRead, Write};

/// How a feedback line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
}

/// Prompt/response collaborator used by the session.
pub trait Console {
    /// Show `prompt` and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn write_styled(&mut self, line: &str, _tone: Tone) -> io::Result<()> {
        self.write_line(line)
    }
}

/// Console over any reader/writer pair.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
    colored: bool,
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on stdin/stdout, colored when stdout is a terminal.
    pub fn stdio() -> Self {
        let output = io::stdout();
        let colored = output.is_tty();
        Self {
            input: io::stdin().lock(),
            output,
            colored,
        }
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            colored: false,
        }
    }

    /// Get the underlying writer.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript on its own line after a closed input
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn write_styled(&mut self, line: &str, tone: Tone) -> io::Result<()> {
        if !self.colored {
            return self.write_line(line);
        }
        match tone {
            Tone::Good => writeln!(self.output, "{}", line.green()),
            Tone::Bad => writeln!(self.output, "{}", line.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_trimmed_lines_until_eof() {
        let mut console = LineConsole::new(Cursor::new("  cats \r\n.\n"), Vec::new());
        assert_eq!(console.read_line("> ").unwrap(), Some("cats".to_string()));
        assert_eq!(console.read_line("> ").unwrap(), Some(".".to_string()));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(String::from_utf8_lossy(console.output()), "> > > \n");
    }

    #[test]
    fn test_styled_lines_are_plain_without_terminal() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        console.write_styled("ok", Tone::Good).unwrap();
        console.write_styled("no", Tone::Bad).unwrap();
        assert_eq!(String::from_utf8_lossy(console.output()), "ok\nno\n");
    }
}
