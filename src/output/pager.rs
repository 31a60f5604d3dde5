//! Screen-at-a-time output for long result lists

use super::formatters::page_height;
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};

/// Prints lines, pausing between screens when attached to a terminal
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    enabled: bool,
}

impl Pager {
    /// Paging is only used when requested and stdout is a terminal
    #[must_use]
    pub fn new(requested: bool) -> Self {
        Self {
            enabled: requested && io::stdout().is_terminal() && io::stdin().is_terminal(),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print every line, one screen at a time if enabled
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to stdout or reading the keyboard fails.
    pub fn show<'l>(&self, lines: impl IntoIterator<Item = &'l str>) -> io::Result<()> {
        let mut stdout = io::stdout().lock();

        if !self.enabled {
            return write_pages(&mut stdout, lines, None, |_, _| Ok(true));
        }

        let height = terminal::size().map_or(usize::MAX, |(_, rows)| page_height(rows));
        write_pages(&mut stdout, lines, Some(height), |out, shown| {
            wait_for_more(out, shown)
        })
    }
}

/// Write `lines`, calling `more` after each full page
///
/// `more` gets the output handle and the number of lines already shown;
/// returning `false` stops output early.
///
/// # Errors
///
/// Propagates write errors and errors from `more`.
pub fn write_pages<'l, W, F>(
    out: &mut W,
    lines: impl IntoIterator<Item = &'l str>,
    page_height: Option<usize>,
    mut more: F,
) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, usize) -> io::Result<bool>,
{
    let mut lines = lines.into_iter().peekable();
    let mut shown = 0usize;

    while let Some(line) = lines.next() {
        writeln!(out, "{line}")?;
        shown += 1;

        let page_full = page_height.is_some_and(|height| shown % height == 0);
        if page_full && lines.peek().is_some() && !more(out, shown)? {
            break;
        }
    }

    out.flush()
}

/// Prompt and block until the user asks for the next page or quits
fn wait_for_more<W: Write>(out: &mut W, shown: usize) -> io::Result<bool> {
    write!(out, "-- more ({shown} shown) -- [space/enter: next, q: stop]")?;
    out.flush()?;

    terminal::enable_raw_mode()?;
    let answer = read_page_key();
    terminal::disable_raw_mode()?;

    execute!(out, Clear(ClearType::CurrentLine), MoveToColumn(0))?;
    answer
}

fn read_page_key() -> io::Result<bool> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Down | KeyCode::PageDown => {
                return Ok(true);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(false);
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lines: &[&str], height: Option<usize>, answers: &[bool]) -> (String, Vec<usize>) {
        let mut out = Vec::new();
        let mut prompts = Vec::new();
        let mut answers = answers.iter().copied();

        write_pages(&mut out, lines.iter().copied(), height, |_, shown| {
            prompts.push(shown);
            Ok(answers.next().unwrap_or(true))
        })
        .unwrap();

        (String::from_utf8(out).unwrap(), prompts)
    }

    #[test]
    fn unpaged_output_prints_everything() {
        let (text, prompts) = render(&["fads", "ads", "sad"], None, &[]);
        assert_eq!(text, "fads\nads\nsad\n");
        assert!(prompts.is_empty());
    }

    #[test]
    fn prompts_after_each_full_page() {
        let lines = ["a1", "a2", "a3", "a4", "a5"];
        let (text, prompts) = render(&lines, Some(2), &[true, true]);
        assert_eq!(text, "a1\na2\na3\na4\na5\n");
        assert_eq!(prompts, [2, 4]);
    }

    #[test]
    fn no_prompt_when_last_page_is_exactly_full() {
        let (_, prompts) = render(&["a1", "a2", "a3", "a4"], Some(2), &[true]);
        assert_eq!(prompts, [2]);
    }

    #[test]
    fn stop_answer_ends_output() {
        let lines = ["a1", "a2", "a3", "a4", "a5"];
        let (text, prompts) = render(&lines, Some(2), &[false]);
        assert_eq!(text, "a1\na2\n");
        assert_eq!(prompts, [2]);
    }
}
