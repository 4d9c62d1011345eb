use std::io::{self, IsTerminal, Write};

use colored::Colorize;

/// How a line should look on a colour terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Banner,
    Success,
}

/// A single line of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: Style,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Plain,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn blank() -> Self {
        Self::plain("")
    }

    fn render(&self, color: bool) -> String {
        if !color {
            return self.text.clone();
        }

        match self.style {
            Style::Plain => self.text.clone(),
            Style::Banner => self.text.cyan().to_string(),
            Style::Success => self.text.green().to_string(),
        }
    }
}

/// Writes lines to stdout as they are produced. Styling is applied only when
/// stdout is a terminal, and `colored` still honours `NO_COLOR`/`CLICOLOR`.
pub fn print_lines(lines: impl IntoIterator<Item = Line>) -> io::Result<()> {
    let stdout = io::stdout();
    let color = stdout.is_terminal();

    let mut handle = stdout.lock();
    write_lines(&mut handle, lines, color)?;
    handle.flush()
}

fn write_lines<W: Write>(
    writer: &mut W,
    lines: impl IntoIterator<Item = Line>,
    color: bool,
) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line.render(color))?;
    }
    Ok(())
}
