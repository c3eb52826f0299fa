//! Parser: lexemes to s-expression trees.
//!
//! Each call to [`Parser::next`] reads exactly one top-level form, recursing
//! into nested lists, and returns [`SExpr::Void`] once the input is used up.
//! Nothing is buffered between calls beyond what the lexer itself holds.

mod int;

use std::io::BufRead;
use std::sync::Arc;

use sexpr_diagnostic::{ErrorKind, Unexpected};
use sexpr_ir::{Lexeme, List, SExpr, Text};
use sexpr_lexer::{Lexer, SourceOptions, TrackingStream};
use sexpr_stack::ensure_sufficient_stack;

pub use int::{parse_int_token, IntToken};

pub struct Parser<R> {
    lexer: Lexer<R>,
}

impl<R: BufRead> Parser<R> {
    pub fn new(lexer: Lexer<R>) -> Self {
        Parser { lexer }
    }

    pub fn from_reader(
        filename: impl Into<Arc<str>>,
        input: R,
        options: SourceOptions,
    ) -> Result<Self, Unexpected> {
        Ok(Parser::new(Lexer::from_reader(filename, input, options)?))
    }

    pub fn from_stream(source: TrackingStream<R>) -> Self {
        Parser::new(Lexer::new(source))
    }

    pub fn shebang(&self) -> Option<&Text> {
        self.lexer.shebang()
    }

    /// The next top-level form, or `Void` at end of input.
    ///
    /// Parenthesis tracking starts fresh on every call, so a form abandoned
    /// by an earlier error does not affect this one.
    pub fn next(&mut self) -> Result<SExpr, Unexpected> {
        self.lexer.reset_depth();
        let form = self.form()?;
        tracing::debug!(
            line = self.lexer.lexeme_start().line,
            kind = form.kind_name(),
            "parsed top-level form"
        );
        Ok(form)
    }

    /// One form. `Void` stands for both end of input and the `)` closing the
    /// enclosing list; the lexer keeps parentheses balanced so the two never
    /// get confused.
    fn form(&mut self) -> Result<SExpr, Unexpected> {
        match self.lexer.next()? {
            Lexeme::EndOfStream | Lexeme::EndList => Ok(SExpr::Void),
            Lexeme::BeginList => ensure_sufficient_stack(|| self.list()),
            Lexeme::String(text) => Ok(SExpr::String(text)),
            Lexeme::Token(text) => self.token_or_int(text),
        }
    }

    fn list(&mut self) -> Result<SExpr, Unexpected> {
        let mut items = List::new();
        loop {
            match self.form()? {
                SExpr::Void => return Ok(SExpr::List(items)),
                item => items.push_back(item),
            }
        }
    }

    fn token_or_int(&self, text: Text) -> Result<SExpr, Unexpected> {
        match parse_int_token(&text) {
            IntToken::Int(value) => Ok(SExpr::Int(value)),
            IntToken::NotInt => Ok(SExpr::Token(text)),
            IntToken::OutOfRange => Err(Unexpected::new(
                self.lexer.lexeme_start().clone(),
                ErrorKind::IntOutOfRange,
            )),
        }
    }
}

impl<R> std::fmt::Debug for Parser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").field("lexer", &self.lexer).finish()
    }
}

#[cfg(test)]
mod tests;
