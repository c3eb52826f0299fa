//! Compiler and continuation-passing evaluator for s-expression scripts.
//!
//! [`compile`] turns a parsed [`SExpr`](sexpr_ir::SExpr) into an
//! [`Evaluable`]; evaluating it against an [`Environment`] calls a
//! [`Continuation`] with the resulting [`Value`]. [`Script`] drives a whole
//! source file one top-level form at a time through a [`Scheduler`].

mod builtins;
mod compile;
mod environment;
pub mod errors;
mod evaluable;
pub mod print_handler;
mod scheduler;
mod script;
mod value;

#[cfg(test)]
mod test_helpers;

pub use builtins::{
    lookup as lookup_builtin, Assignment, Conditional, FunctionCallable, RealFunction,
    NAMES as BUILTIN_NAMES,
};
pub use compile::compile;
pub use environment::{create_new_environment, Environment, LocalScope};
pub use errors::{EvalError, EvalResult, ScriptError};
pub use evaluable::{Continuation, Evaluable};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use scheduler::{Scheduler, Task};
pub use script::Script;
pub use value::{Callable, CallableImpl, IntValue, NilValue, RuntimeValue, StringValue, Value};
