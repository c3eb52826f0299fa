//! Position-tracking byte source.
//!
//! Reads one physical line at a time and exposes a single current byte plus
//! the line, column and full text of the current line. Every line handed out
//! ends in `\n` (a missing final newline is supplied), so the only empty line
//! is the end-of-input state.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use sexpr_diagnostic::{ErrorKind, Position, Unexpected};
use sexpr_ir::Text;

/// Options for opening a [`TrackingStream`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// Set aside a leading `#!` line instead of lexing it.
    pub skip_shebang: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        SourceOptions { skip_shebang: true }
    }
}

pub struct TrackingStream<R> {
    input: R,
    filename: Arc<str>,
    /// Current line, always `\n`-terminated unless at end of input.
    text: Vec<u8>,
    /// Lossy copy of `text` shared by every `Position` on this line.
    contents: Arc<str>,
    /// 1-based; 0 before the first read.
    line: usize,
    /// 0-based index into `text`.
    col: usize,
    eof_kind: Option<ErrorKind>,
    shebang: Option<Text>,
}

impl TrackingStream<Box<dyn BufRead>> {
    /// Open a file by path. The reader is boxed so files and standard input
    /// share one stream type.
    pub fn open(path: &Path, options: SourceOptions) -> Result<Self, Unexpected> {
        let filename: Arc<str> = Arc::from(path.display().to_string());
        match File::open(path) {
            Ok(file) => {
                let input: Box<dyn BufRead> = Box::new(BufReader::new(file));
                TrackingStream::new(filename, input, options)
            }
            Err(err) => Err(Unexpected::new(
                Position::new(filename, 0, 0, Arc::from("")),
                ErrorKind::Read {
                    message: err.to_string(),
                },
            )),
        }
    }
}

impl<R: BufRead> TrackingStream<R> {
    /// Wrap `input`, reading (and validating) its first line.
    pub fn new(
        filename: impl Into<Arc<str>>,
        input: R,
        options: SourceOptions,
    ) -> Result<Self, Unexpected> {
        let mut stream = TrackingStream {
            input,
            filename: filename.into(),
            text: Vec::new(),
            contents: Arc::from(""),
            line: 0,
            col: 0,
            eof_kind: None,
            shebang: None,
        };
        stream.next_line()?;
        if options.skip_shebang && stream.text.starts_with(b"#!") {
            let mut line = std::mem::take(&mut stream.text);
            line.pop();
            tracing::debug!(filename = %stream.filename, "skipping shebang line");
            stream.shebang = Some(Text::from(line));
            stream.next_line()?;
        }
        Ok(stream)
    }

    /// The set-aside `#!` line, without its newline.
    pub fn shebang(&self) -> Option<&Text> {
        self.shebang.as_ref()
    }

    pub fn filename(&self) -> &Arc<str> {
        &self.filename
    }

    /// Position of the current byte.
    pub fn position(&self) -> Position {
        Position::new(
            Arc::clone(&self.filename),
            self.line,
            self.col + 1,
            Arc::clone(&self.contents),
        )
    }

    /// Arm an error for the next line read that hits end of input.
    pub fn on_eof(&mut self, kind: ErrorKind) {
        self.eof_kind = Some(kind);
    }

    pub fn off_eof(&mut self) {
        self.eof_kind = None;
    }

    pub fn is_eof(&self) -> bool {
        self.text.is_empty()
    }

    /// The current byte, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.text.get(self.col).copied()
    }

    /// Step past the current byte, reading the next line when this one is
    /// used up. A no-op at end of input.
    pub fn advance(&mut self) -> Result<(), Unexpected> {
        if self.text.is_empty() {
            return Ok(());
        }
        self.col += 1;
        if self.col >= self.text.len() {
            self.next_line()?;
        }
        Ok(())
    }

    /// The current byte, then advance.
    pub fn next_byte(&mut self) -> Result<Option<u8>, Unexpected> {
        let byte = self.peek();
        self.advance()?;
        Ok(byte)
    }

    fn next_line(&mut self) -> Result<(), Unexpected> {
        self.text.clear();
        let read = self.input.read_until(b'\n', &mut self.text);
        self.line += 1;
        self.col = 0;

        if let Err(err) = read {
            self.text.clear();
            self.contents = Arc::from("");
            return Err(Unexpected::new(
                self.position(),
                ErrorKind::Read {
                    message: err.to_string(),
                },
            ));
        }

        if !self.text.is_empty() && !self.text.ends_with(b"\n") {
            self.text.push(b'\n');
        }
        self.contents = Arc::from(String::from_utf8_lossy(&self.text).as_ref());

        if self.text.is_empty() {
            return match self.eof_kind.clone() {
                Some(kind) => Err(Unexpected::new(self.position(), kind)),
                None => Ok(()),
            };
        }

        let bad = self
            .text
            .iter()
            .enumerate()
            .find(|&(_, &byte)| byte < b' ' && byte != b'\n');
        if let Some((index, &byte)) = bad {
            let kind = match byte {
                b'\t' => ErrorKind::Tab,
                b'\r' => ErrorKind::CarriageReturn,
                _ => ErrorKind::ControlCharacter { byte },
            };
            let position = Position::new(
                Arc::clone(&self.filename),
                self.line,
                index + 1,
                Arc::clone(&self.contents),
            );
            // Drop the rejected line so a caller that keeps reading resumes
            // on the next one.
            self.text = vec![b'\n'];
            self.contents = Arc::from("\n");
            return Err(Unexpected::new(position, kind));
        }

        tracing::trace!(line = self.line, len = self.text.len(), "read source line");
        Ok(())
    }
}

impl<R> std::fmt::Debug for TrackingStream<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingStream")
            .field("filename", &self.filename)
            .field("line", &self.line)
            .field("col", &self.col)
            .field("eof_kind", &self.eof_kind)
            .finish_non_exhaustive()
    }
}
