//! The closed s-expression value type.

use crate::{Sequence, Text};

/// An s-expression list.
pub type List = Sequence<SExpr>;

/// A parsed s-expression.
///
/// Exactly one variant is active at any time; assigning a new value drops the
/// old one. `Void` doubles as the end-of-stream marker returned by the parser
/// and as the default value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SExpr {
    /// Nothing: end of input, or an empty placeholder.
    #[default]
    Void,
    /// A parenthesized list.
    List(List),
    /// A token that parsed as a whole 64-bit signed integer.
    Int(i64),
    /// A quoted string literal.
    String(Text),
    /// A bare token; compiles to a variable reference.
    Token(Text),
}

impl SExpr {
    /// Create a token.
    pub fn token(text: impl Into<Text>) -> Self {
        SExpr::Token(text.into())
    }

    /// Create a string literal.
    pub fn string(text: impl Into<Text>) -> Self {
        SExpr::String(text.into())
    }

    /// Create a list from its elements.
    pub fn list(items: impl IntoIterator<Item = SExpr>) -> Self {
        SExpr::List(items.into_iter().collect())
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, SExpr::Void)
    }

    /// Name of the active variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SExpr::Void => "void",
            SExpr::List(_) => "list",
            SExpr::Int(_) => "int",
            SExpr::String(_) => "string",
            SExpr::Token(_) => "token",
        }
    }
}

/// Lists nest as deep as the input does, so nested lists are emptied from a
/// work stack instead of by recursive drops.
impl Drop for SExpr {
    fn drop(&mut self) {
        let SExpr::List(items) = self else {
            return;
        };
        if !items.iter().any(|item| matches!(item, SExpr::List(inner) if !inner.is_empty())) {
            return;
        }
        let mut pending = vec![std::mem::take(items)];
        while let Some(mut list) = pending.pop() {
            while let Some(mut item) = list.take_front() {
                if let SExpr::List(inner) = &mut item {
                    pending.push(std::mem::take(inner));
                }
            }
        }
    }
}

impl From<List> for SExpr {
    fn from(list: List) -> Self {
        SExpr::List(list)
    }
}

impl From<i64> for SExpr {
    fn from(value: i64) -> Self {
        SExpr::Int(value)
    }
}
