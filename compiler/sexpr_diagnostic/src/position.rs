//! Source positions.

use std::sync::Arc;

/// Where an error happened.
///
/// `line` and `column` are both 1-based. `line_contents` is the full text of
/// the line including its trailing newline, or empty at end of input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub filename: Arc<str>,
    pub line: usize,
    pub column: usize,
    pub line_contents: Arc<str>,
}

impl Position {
    pub fn new(
        filename: Arc<str>,
        line: usize,
        column: usize,
        line_contents: Arc<str>,
    ) -> Self {
        Position {
            filename,
            line,
            column,
            line_contents,
        }
    }

    /// A position with no source line, for errors outside any file.
    pub fn unknown() -> Self {
        Position {
            filename: Arc::from("<unknown>"),
            line: 0,
            column: 0,
            line_contents: Arc::from(""),
        }
    }

    /// Whether the position points at end of input.
    pub fn is_eof(&self) -> bool {
        self.line_contents.is_empty()
    }
}
