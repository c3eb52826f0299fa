//! Visitor dispatch over [`SExpr`].
//!
//! [`apply`] inspects the active variant and calls the matching `visit_*`
//! method. Every method has a default that declines (`None`), so a visitor
//! only implements the variants it cares about and the caller supplies the
//! fallback result for everything else.
//!
//! # Example
//!
//! ```
//! use sexpr_ir::visitor::{apply, Visitor};
//! use sexpr_ir::SExpr;
//!
//! struct IntValue;
//!
//! impl<'a> Visitor<'a> for IntValue {
//!     type Output = i64;
//!
//!     fn visit_int(&mut self, value: i64) -> Option<i64> {
//!         Some(value)
//!     }
//! }
//!
//! assert_eq!(apply(0, &mut IntValue, &SExpr::Int(7)), 7);
//! assert_eq!(apply(0, &mut IntValue, &SExpr::token("x")), 0);
//! ```

use crate::{List, SExpr, Text};

/// Visitor over the variants of an [`SExpr`].
pub trait Visitor<'a> {
    type Output;

    fn visit_void(&mut self) -> Option<Self::Output> {
        None
    }

    fn visit_list(&mut self, list: &'a List) -> Option<Self::Output> {
        let _ = list;
        None
    }

    fn visit_int(&mut self, value: i64) -> Option<Self::Output> {
        let _ = value;
        None
    }

    fn visit_string(&mut self, text: &'a Text) -> Option<Self::Output> {
        let _ = text;
        None
    }

    fn visit_token(&mut self, text: &'a Text) -> Option<Self::Output> {
        let _ = text;
        None
    }
}

/// Dispatch `expr` to `visitor`, returning `default` if the visitor declines.
pub fn apply<'a, V>(default: V::Output, visitor: &mut V, expr: &'a SExpr) -> V::Output
where
    V: Visitor<'a> + ?Sized,
{
    let handled = match expr {
        SExpr::Void => visitor.visit_void(),
        SExpr::List(list) => visitor.visit_list(list),
        SExpr::Int(value) => visitor.visit_int(*value),
        SExpr::String(text) => visitor.visit_string(text),
        SExpr::Token(text) => visitor.visit_token(text),
    };
    handled.unwrap_or(default)
}

/// Visitor that accepts only bare tokens.
pub struct TokenText;

impl<'a> Visitor<'a> for TokenText {
    type Output = Option<&'a Text>;

    fn visit_token(&mut self, text: &'a Text) -> Option<Self::Output> {
        Some(Some(text))
    }
}
