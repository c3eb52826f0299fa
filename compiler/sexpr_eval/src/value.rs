//! Runtime values.
//!
//! A [`Value`] is a reference-counted handle to anything implementing
//! [`RuntimeValue`]. Hosts can add their own kinds by implementing the trait;
//! the built-in kinds are integers, strings, callables and the shared `nil`.
//!
//! Asking a value for the wrong kind never fails: `as_int` and `as_string`
//! log a warning and fall back to `0` and the empty string.

use std::fmt;
use std::rc::Rc;

use sexpr_ir::{List, SExpr, Text};

use crate::{Environment, EvalError, Evaluable};

/// Capabilities of a runtime value.
pub trait RuntimeValue: fmt::Debug {
    fn as_int(&self) -> i64 {
        tracing::warn!(value = ?self, "not an integer");
        0
    }

    fn as_string(&self) -> Text {
        tracing::warn!(value = ?self, "not a string");
        Text::new()
    }

    fn as_callable(&self) -> Option<Callable> {
        None
    }

    /// Convert back to an s-expression for display.
    fn repr(&self) -> SExpr;

    fn is_nil(&self) -> bool {
        false
    }
}

#[derive(Clone)]
pub struct Value(Rc<dyn RuntimeValue>);

thread_local! {
    static NIL: Value = Value(Rc::new(NilValue));
}

impl Value {
    pub fn new(value: impl RuntimeValue + 'static) -> Self {
        Value(Rc::new(value))
    }

    pub fn int(value: i64) -> Self {
        Value::new(IntValue(value))
    }

    pub fn string(text: impl Into<Text>) -> Self {
        Value::new(StringValue(text.into()))
    }

    pub fn callable(callable: Callable) -> Self {
        Value::new(callable)
    }

    /// The shared `nil`.
    pub fn nil() -> Self {
        NIL.with(Value::clone)
    }

    #[inline]
    pub fn as_int(&self) -> i64 {
        self.0.as_int()
    }

    #[inline]
    pub fn as_string(&self) -> Text {
        self.0.as_string()
    }

    #[inline]
    pub fn as_callable(&self) -> Option<Callable> {
        self.0.as_callable()
    }

    #[inline]
    pub fn repr(&self) -> SExpr {
        self.0.repr()
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Whether both handles point at the same value.
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Printed form of the value's `repr`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.repr(), f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntValue(pub i64);

impl RuntimeValue for IntValue {
    fn as_int(&self) -> i64 {
        self.0
    }

    fn repr(&self) -> SExpr {
        SExpr::Int(self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringValue(pub Text);

impl RuntimeValue for StringValue {
    fn as_string(&self) -> Text {
        self.0.clone()
    }

    fn repr(&self) -> SExpr {
        SExpr::String(self.0.clone())
    }
}

/// The value of forms that produce nothing, and of unbound variables.
/// Prints as `()` and is false in a condition.
#[derive(Debug)]
pub struct NilValue;

impl RuntimeValue for NilValue {
    fn as_int(&self) -> i64 {
        0
    }

    fn repr(&self) -> SExpr {
        SExpr::List(List::new())
    }

    fn is_nil(&self) -> bool {
        true
    }
}

/// Compiles a call site: receives the environment and the raw, uncompiled
/// arguments and decides itself what to compile and when.
pub trait CallableImpl {
    fn call(&self, env: &Environment, args: List) -> Result<Evaluable, EvalError>;
}

impl<F> CallableImpl for F
where
    F: Fn(&Environment, List) -> Result<Evaluable, EvalError>,
{
    fn call(&self, env: &Environment, args: List) -> Result<Evaluable, EvalError> {
        self(env, args)
    }
}

/// A named callable. Prints as `(builtin "name")`.
#[derive(Clone)]
pub struct Callable {
    name: Text,
    imp: Rc<dyn CallableImpl>,
}

impl Callable {
    pub fn new(name: impl Into<Text>, imp: impl CallableImpl + 'static) -> Self {
        Callable {
            name: name.into(),
            imp: Rc::new(imp),
        }
    }

    /// A callable from a closure.
    pub fn from_fn(
        name: impl Into<Text>,
        f: impl Fn(&Environment, List) -> Result<Evaluable, EvalError> + 'static,
    ) -> Self {
        Callable::new(name, f)
    }

    pub fn name(&self) -> &Text {
        &self.name
    }

    pub fn call(&self, env: &Environment, args: List) -> Result<Evaluable, EvalError> {
        tracing::trace!(callable = %self.name.to_str_lossy(), args = args.len(), "compiling call");
        self.imp.call(env, args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callable").field(&self.name).finish()
    }
}

impl RuntimeValue for Callable {
    fn as_callable(&self) -> Option<Callable> {
        Some(self.clone())
    }

    fn repr(&self) -> SExpr {
        SExpr::list([SExpr::token("builtin"), SExpr::String(self.name.clone())])
    }
}
