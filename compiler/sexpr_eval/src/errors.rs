//! Evaluation errors.
//!
//! Positioned errors from reading source come through as
//! [`EvalError::Syntax`]; everything raised after parsing is a
//! [`ScriptError`] carrying only a message. Constructors live here so the
//! message texts are in one place.

use sexpr_diagnostic::Unexpected;

/// A script-level error: wrong argument shape, unknown builtin and so on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ScriptError {
    pub message: String,
}

impl ScriptError {
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        ScriptError {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Syntax(#[from] Unexpected),
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),
}

impl EvalError {
    /// The script error message, if this is one.
    pub fn script_message(&self) -> Option<&str> {
        match self {
            EvalError::Script(err) => Some(&err.message),
            EvalError::Syntax(_) => None,
        }
    }
}

/// Result of driving an evaluation step. Values travel through
/// continuations, not through this result.
pub type EvalResult = Result<(), EvalError>;

#[cold]
pub fn script_error(message: impl Into<String>) -> EvalError {
    EvalError::Script(ScriptError::new(message))
}

// Compilation

#[cold]
pub fn compile_void() -> EvalError {
    script_error("attempt to compile eof")
}

#[cold]
pub fn not_callable(repr: &str) -> EvalError {
    script_error(format!("not callable: {repr}"))
}

#[cold]
pub fn head_suspended() -> EvalError {
    script_error("call head did not produce a value")
}

// Special forms

#[cold]
pub fn missing_if_cond() -> EvalError {
    script_error("missing if cond")
}

#[cold]
pub fn missing_if_iftrue() -> EvalError {
    script_error("missing if iftrue")
}

#[cold]
pub fn extra_if_arguments() -> EvalError {
    script_error("extra if arguments")
}

#[cold]
pub fn missing_let_varname() -> EvalError {
    script_error("missing let varname")
}

#[cold]
pub fn let_varname_not_token() -> EvalError {
    script_error("let varname not token")
}

#[cold]
pub fn missing_let_content() -> EvalError {
    script_error("missing let content")
}

#[cold]
pub fn extra_let_garbage() -> EvalError {
    script_error("extra let garbage")
}

// Builtin lookup

#[cold]
pub fn missing_builtin_argument() -> EvalError {
    script_error("missing builtin argument")
}

#[cold]
pub fn extra_builtin_garbage() -> EvalError {
    script_error("extra builtin garbage")
}

#[cold]
pub fn unknown_builtin(name: &str) -> EvalError {
    script_error(format!("unknown builtin: {name}"))
}
