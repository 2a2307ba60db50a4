use std::io;
use std::io::BufRead;
use std::io::Write;

use crossterm::event;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::warn;

use crate::events::Decision;
use crate::grid::Grid;
use crate::render;
use crate::simulation::Observer;
use crate::simulation::Prompt;

/// Prints generations as plain text.
pub struct ConsoleObserver<W> {
    out: W,

    /// Also print the neighbor count of every cell before each step
    show_neighbors: bool,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, show_neighbors: bool) -> Self {
        Self {
            out,
            show_neighbors,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn stepping(&mut self, current: &Grid) -> io::Result<()> {
        if self.show_neighbors {
            writeln!(self.out, "{}", render::neighbor_counts(current))?;
        }

        Ok(())
    }

    fn generation(&mut self, number: u64, grid: &Grid) -> io::Result<()> {
        // generations after the first are separated by a blank line
        if number > 1 {
            writeln!(self.out)?;
        }

        writeln!(self.out, "{}", render::generation(number, grid))?;
        self.out.flush()
    }

    fn still_life(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", render::STILL_LIFE)?;
        self.out.flush()
    }
}

/// Reads the decision as a line of input. The first non-blank character decides, an empty line
/// continues, and end of input quits.
pub struct LinePrompt<R, W> {
    input: R,
    out: W,
    line: String,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            line: String::new(),
        }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn decide(&mut self) -> io::Result<Decision> {
        write!(self.out, "\n{}", render::PROMPT)?;
        self.out.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            // Nothing left to read, so nobody could ever ask us to stop
            writeln!(self.out)?;
            return Ok(Decision::Quit);
        }

        let decision = self
            .line
            .trim_start()
            .chars()
            .next()
            .map_or(Decision::Continue, Decision::from_char);

        Ok(decision)
    }
}

/// Reads the decision as a single keypress, with the terminal in raw mode while waiting.
pub struct KeyPrompt<W> {
    out: W,
}

impl<W: Write> KeyPrompt<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Prompt for KeyPrompt<W> {
    fn decide(&mut self) -> io::Result<Decision> {
        execute!(self.out, style::Print(format!("\n{}", render::PROMPT)))?;

        let decision = {
            let _raw = RawMode::enable()?;

            loop {
                if let Some(decision) = key_decision(event::read()?) {
                    break decision;
                }
            }
        };

        writeln!(self.out)?;
        self.out.flush()?;

        Ok(decision)
    }
}

/// Converts a crossterm event into a decision. Events that aren't keypresses yield `None`.
pub fn key_decision(event: CrossTermEvent) -> Option<Decision> {
    let CrossTermEvent::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match code {
        // raw mode swallows SIGINT, so ctrl-c has to be handled here
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Decision::Quit),
        KeyCode::Char(c) => Some(Decision::from_char(c)),
        _ => Some(Decision::Continue),
    }
}

/// Keeps the terminal in raw mode for as long as it is alive.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to leave raw mode: {e}");
        }
    }
}
