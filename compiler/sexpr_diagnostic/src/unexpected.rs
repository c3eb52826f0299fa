//! The positioned error type.

use std::fmt;

use crate::Position;

/// What went wrong while reading source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    // === Delimiters ===
    #[error("unmatched '('")]
    UnmatchedOpen,
    #[error("unmatched ')'")]
    UnmatchedClose,

    // === End of input ===
    #[error("EOF in string literal")]
    EofInString,
    #[error("EOF in backslash sequence in string literal")]
    EofInStringEscape,
    #[error("EOF in backslash sequence in token")]
    EofInTokenEscape,

    // === Escapes ===
    /// A byte after `\` that starts no known escape.
    #[error("character following backslash")]
    CharacterFollowingBackslash { byte: u8 },
    /// A byte in `\xHH` that is not a hex digit.
    #[error("nonhex digit")]
    NonhexDigit { byte: u8 },

    // === Disallowed source bytes ===
    #[error("tab (try the 'expand' program)")]
    Tab,
    #[error("carriage return (try the 'dos2unix' program)")]
    CarriageReturn,
    #[error("C0 control character")]
    ControlCharacter { byte: u8 },

    // === Literals ===
    #[error("out of range int")]
    IntOutOfRange,

    // === Input ===
    /// The underlying reader failed.
    #[error("read failure: {message}")]
    Read { message: String },
}

/// A lexical or syntactic error with the position it was raised at.
///
/// `Display` renders the fixed diagnostic shape:
///
/// ```text
/// At <filename>:<line>:<column>
/// Unexpected <message>
/// <source line text>
/// <spaces>^
/// ```
///
/// The last two lines are omitted when the position has no source line
/// (end of input).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Unexpected {
    pub position: Position,
    pub kind: ErrorKind,
}

impl Unexpected {
    #[cold]
    pub fn new(position: Position, kind: ErrorKind) -> Self {
        Unexpected { position, kind }
    }

    /// The message after `Unexpected `.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Unexpected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = &self.position;
        writeln!(f, "At {}:{}:{}", pos.filename, pos.line, pos.column)?;
        writeln!(f, "Unexpected {}", self.kind)?;
        if !pos.line_contents.is_empty() {
            f.write_str(&pos.line_contents)?;
            if !pos.line_contents.ends_with('\n') {
                f.write_str("\n")?;
            }
            for _ in 1..pos.column {
                f.write_str(" ")?;
            }
            f.write_str("^")?;
        }
        Ok(())
    }
}

impl std::error::Error for Unexpected {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
