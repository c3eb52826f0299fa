//! Sexpr IR - data model for the s-expression script engine.
//!
//! This crate contains the core data structures shared by every phase:
//! - [`SExpr`]: the closed parse-tree value (`Void | List | Int | String | Token`)
//! - [`Lexeme`]: the smaller vocabulary the lexer hands to the parser
//! - [`Sequence`]: ordered container with O(1) push at either end and O(1) pop-front
//! - [`Text`]: byte text, since escapes may produce bytes that are not UTF-8
//! - [`StringInterner`]: explicitly scoped interning service for names
//! - [`visitor`]: visitor dispatch with a fallback for unhandled variants
//!
//! The printed form (`Display for SExpr`) is the inverse of the lexer: every
//! byte outside printable ASCII is rendered as an escape, so printed output is
//! always plain ASCII and re-parses to a structurally equal tree.

mod display;
mod interner;
mod lexeme;
mod sequence;
mod sexpr;
mod text;
pub mod visitor;

pub use display::{write_escaped, EscapeContext};
pub use interner::{Name, SharedInterner, StringInterner};
pub use lexeme::Lexeme;
pub use sequence::Sequence;
pub use sexpr::{List, SExpr};
pub use text::Text;
