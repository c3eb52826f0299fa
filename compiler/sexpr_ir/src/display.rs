//! Printed form of s-expressions.
//!
//! The printed form is what the lexer reads back: printable ASCII is written
//! as-is, the C-style short escapes are used where one exists, and every other
//! byte becomes `\xHH`. Tokens and strings differ only in how a space is
//! written (`\ ` in a token, literal inside quotes).

use std::fmt::{self, Write};

use sexpr_stack::ensure_sufficient_stack;

use crate::visitor::{apply, Visitor};
use crate::{List, SExpr, Text};

/// Which escape table to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeContext {
    Token,
    String,
}

/// Write one byte in printed form.
pub fn write_escaped<W: Write + ?Sized>(
    out: &mut W,
    byte: u8,
    context: EscapeContext,
) -> fmt::Result {
    let escaped = match byte {
        0x07 => "\\a",
        0x08 => "\\b",
        b'\t' => "\\t",
        b'\n' => "\\n",
        0x0b => "\\v",
        0x0c => "\\f",
        b'\r' => "\\r",
        0x1b => "\\e",
        b' ' if context == EscapeContext::Token => "\\ ",
        b'"' => "\\\"",
        b'\'' => "\\'",
        b'\\' => "\\\\",
        b'(' => "\\(",
        b')' => "\\)",
        0x20..=0x7e => return out.write_char(char::from(byte)),
        _ => return write!(out, "\\x{byte:02x}"),
    };
    out.write_str(escaped)
}

fn write_text(f: &mut fmt::Formatter<'_>, text: &Text, context: EscapeContext) -> fmt::Result {
    text.iter().try_for_each(|&byte| write_escaped(f, byte, context))
}

/// Renders every variant; used by `Display for SExpr`.
struct Printer<'f, 'w> {
    f: &'f mut fmt::Formatter<'w>,
}

impl Printer<'_, '_> {
    fn write_list(&mut self, list: &List) -> fmt::Result {
        self.f.write_char('(')?;
        for (i, item) in list.iter().enumerate() {
            if i > 0 {
                self.f.write_char(' ')?;
            }
            ensure_sufficient_stack(|| apply(Ok(()), &mut *self, item))?;
        }
        self.f.write_char(')')
    }

    fn write_string(&mut self, text: &Text) -> fmt::Result {
        self.f.write_char('"')?;
        write_text(self.f, text, EscapeContext::String)?;
        self.f.write_char('"')
    }
}

impl<'a> Visitor<'a> for Printer<'_, '_> {
    type Output = fmt::Result;

    fn visit_void(&mut self) -> Option<fmt::Result> {
        Some(self.f.write_str("'nil"))
    }

    fn visit_list(&mut self, list: &'a List) -> Option<fmt::Result> {
        Some(self.write_list(list))
    }

    fn visit_int(&mut self, value: i64) -> Option<fmt::Result> {
        Some(write!(self.f, "{value}"))
    }

    fn visit_string(&mut self, text: &'a Text) -> Option<fmt::Result> {
        Some(self.write_string(text))
    }

    fn visit_token(&mut self, text: &'a Text) -> Option<fmt::Result> {
        Some(write_text(self.f, text, EscapeContext::Token))
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        apply(Ok(()), &mut Printer { f }, self)
    }
}
