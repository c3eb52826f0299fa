//! Positioned diagnostics for lexical and syntactic errors.
//!
//! Every error raised while reading source text carries a [`Position`]
//! captured at the moment of the error, so the rendered message can show the
//! offending line with a caret under the column:
//!
//! ```text
//! At script.sexpr:3:7
//! Unexpected unmatched ')'
//! (let x))
//!       ^
//! ```

mod position;
mod unexpected;

pub use position::Position;
pub use unexpected::{ErrorKind, Unexpected};
