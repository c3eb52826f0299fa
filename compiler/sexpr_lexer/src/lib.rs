//! Lexer for s-expression source text.
//!
//! [`TrackingStream`] turns a line-oriented reader into a stream of bytes
//! with positions; [`Lexer`] turns that into [`Lexeme`]s, decoding backslash
//! escapes and keeping parentheses balanced.
//!
//! The same escape grammar applies inside string literals and bare tokens, so
//! `\x30` outside quotes lexes exactly like `0`. Whether a token is an integer
//! is decided later by the parser.

mod escape;
mod source;

use std::io::BufRead;

use sexpr_diagnostic::{ErrorKind, Position, Unexpected};
use sexpr_ir::{Lexeme, Text};

pub use escape::read_after_backslash;
pub use source::{SourceOptions, TrackingStream};

/// Produces one [`Lexeme`] per call to [`Lexer::next`].
pub struct Lexer<R> {
    source: TrackingStream<R>,
    /// Open parentheses not yet closed, oldest first.
    depth: Vec<Position>,
    /// Where the most recent lexeme began.
    start: Position,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(source: TrackingStream<R>) -> Self {
        let start = source.position();
        Lexer {
            source,
            depth: Vec::new(),
            start,
        }
    }

    /// Wrap a reader directly.
    pub fn from_reader(
        filename: impl Into<std::sync::Arc<str>>,
        input: R,
        options: SourceOptions,
    ) -> Result<Self, Unexpected> {
        Ok(Lexer::new(TrackingStream::new(filename, input, options)?))
    }

    pub fn shebang(&self) -> Option<&Text> {
        self.source.shebang()
    }

    /// Number of `(` seen and not yet closed.
    pub fn open_depth(&self) -> usize {
        self.depth.len()
    }

    /// Forget any open parentheses, e.g. after an error abandoned a form.
    pub fn reset_depth(&mut self) {
        self.depth.clear();
    }

    /// Position of the first byte of the most recently returned lexeme.
    pub fn lexeme_start(&self) -> &Position {
        &self.start
    }

    pub fn next(&mut self) -> Result<Lexeme, Unexpected> {
        self.source.off_eof();

        let (position, byte) = loop {
            let Some(byte) = self.source.peek() else {
                if let Some(open) = self.depth.first() {
                    return Err(Unexpected::new(open.clone(), ErrorKind::UnmatchedOpen));
                }
                self.start = self.source.position();
                return Ok(Lexeme::EndOfStream);
            };
            let position = self.source.position();
            self.source.advance()?;
            if byte != b' ' && byte != b'\n' {
                break (position, byte);
            }
        };
        self.start = position.clone();

        let lexeme = match byte {
            b'(' => {
                self.depth.push(position);
                Lexeme::BeginList
            }
            b')' => {
                if self.depth.pop().is_none() {
                    return Err(Unexpected::new(position, ErrorKind::UnmatchedClose));
                }
                Lexeme::EndList
            }
            b'"' => self.string_literal()?,
            _ => self.token(byte)?,
        };
        tracing::trace!(
            line = self.start.line,
            column = self.start.column,
            lexeme = lexeme.describe(),
            "lexeme"
        );
        Ok(lexeme)
    }

    fn string_literal(&mut self) -> Result<Lexeme, Unexpected> {
        let mut text = Text::new();
        self.source.on_eof(ErrorKind::EofInString);
        loop {
            let position = self.source.position();
            match self.source.next_byte()? {
                None => return Err(Unexpected::new(position, ErrorKind::EofInString)),
                Some(b'"') => {
                    self.source.off_eof();
                    return Ok(Lexeme::String(text));
                }
                Some(b'\\') => {
                    text.push(read_after_backslash(
                        &mut self.source,
                        ErrorKind::EofInStringEscape,
                    )?);
                    self.source.on_eof(ErrorKind::EofInString);
                }
                Some(byte) => text.push(byte),
            }
        }
    }

    /// A bare token; running into end of input is fine here.
    fn token(&mut self, first: u8) -> Result<Lexeme, Unexpected> {
        let mut text = Text::new();
        self.push_token_byte(&mut text, first)?;
        while let Some(byte) = self.source.peek() {
            if matches!(byte, b' ' | b'\n' | b'(' | b')' | b'"') {
                break;
            }
            self.source.advance()?;
            self.push_token_byte(&mut text, byte)?;
        }
        Ok(Lexeme::Token(text))
    }

    fn push_token_byte(&mut self, text: &mut Text, byte: u8) -> Result<(), Unexpected> {
        if byte == b'\\' {
            let decoded = read_after_backslash(&mut self.source, ErrorKind::EofInTokenEscape)?;
            self.source.off_eof();
            text.push(decoded);
        } else {
            text.push(byte);
        }
        Ok(())
    }
}

impl<R> std::fmt::Debug for Lexer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("source", &self.source)
            .field("depth", &self.depth.len())
            .field("start", &self.start)
            .finish()
    }
}
