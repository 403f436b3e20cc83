//! Human-readable status and failure lines on stderr.

use ::console::{Style, Term};

/// Severity of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Status,
    Failure,
}

/// Sink for the messages shown to the user while a command is prepared.
pub trait Reporter {
    /// Progress line, e.g. "Installing Node 18".
    fn status(&mut self, text: &str);

    /// Fatal condition; the caller exits afterwards.
    fn failure(&mut self, text: &str);
}

/// Writes yellow status lines and red failure lines to stderr.
///
/// Colors are dropped when stderr is not a terminal or `CLICOLOR=0` is set.
#[derive(Debug)]
pub struct TerminalReporter {
    term: Term,
    status_style: Style,
    failure_style: Style,
}

impl TerminalReporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            status_style: Style::new().yellow().for_stderr(),
            failure_style: Style::new().red().for_stderr(),
        }
    }

    fn write(&self, style: &Style, text: &str) {
        // Nothing sensible to do if stderr itself is gone.
        let _ = self.term.write_line(&style.apply_to(text).to_string());
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn status(&mut self, text: &str) {
        self.write(&self.status_style, text);
    }

    fn failure(&mut self, text: &str) {
        self.write(&self.failure_style, text);
    }
}

/// Keeps every reported line in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    pub lines: Vec<(Level, String)>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines reported at `level`, in order.
    #[must_use]
    pub fn at(&self, level: Level) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    #[must_use]
    pub fn failures(&self) -> Vec<&str> {
        self.at(Level::Failure)
    }

    #[must_use]
    pub fn statuses(&self) -> Vec<&str> {
        self.at(Level::Status)
    }
}

impl Reporter for MemoryReporter {
    fn status(&mut self, text: &str) {
        self.lines.push((Level::Status, text.to_string()));
    }

    fn failure(&mut self, text: &str) {
        self.lines.push((Level::Failure, text.to_string()));
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn status(&mut self, text: &str) {
        (**self).status(text);
    }

    fn failure(&mut self, text: &str) {
        (**self).failure(text);
    }
}
