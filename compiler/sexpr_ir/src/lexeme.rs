//! Lexer output vocabulary.

use crate::Text;

/// One lexeme produced by the lexer.
///
/// `BeginList` and `EndList` are structural markers; the parser consumes them
/// and they never appear in an [`SExpr`](crate::SExpr) tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lexeme {
    EndOfStream,
    BeginList,
    EndList,
    String(Text),
    Token(Text),
}

impl Lexeme {
    /// Short human-readable description, for tracing output.
    pub fn describe(&self) -> &'static str {
        match self {
            Lexeme::EndOfStream => "end of stream",
            Lexeme::BeginList => "'('",
            Lexeme::EndList => "')'",
            Lexeme::String(_) => "string",
            Lexeme::Token(_) => "token",
        }
    }
}
