//! Variable environments.
//!
//! An [`Environment`] is a shared handle: clones see the same bindings, which
//! is how `let` inside a running form reaches the session's variables. Fresh
//! environments never share bindings with each other.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

use sexpr_ir::{Name, SharedInterner, StringInterner};

use crate::builtins;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Value;

/// Single-threaded shared mutable cell.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone)]
pub struct Environment {
    bindings: LocalScope<FxHashMap<Name, Value>>,
    interner: SharedInterner,
    printer: SharedPrintHandler,
}

/// A fresh environment whose only binding is `builtin`.
pub fn create_new_environment() -> Environment {
    Environment::new()
}

impl Environment {
    /// A fresh environment printing to stdout; only `builtin` is bound.
    pub fn new() -> Self {
        Environment::with_parts(Arc::new(StringInterner::new()), stdout_handler())
    }

    pub fn with_print_handler(printer: SharedPrintHandler) -> Self {
        Environment::with_parts(Arc::new(StringInterner::new()), printer)
    }

    /// A fresh environment using the given interner and output.
    pub fn with_parts(interner: SharedInterner, printer: SharedPrintHandler) -> Self {
        let env = Environment {
            bindings: LocalScope::default(),
            interner,
            printer,
        };
        env.bind_builtin("builtin");
        env
    }

    /// A new environment with its own bindings that shares this one's
    /// interner and output.
    pub fn sibling(&self) -> Self {
        Environment::with_parts(Arc::clone(&self.interner), Arc::clone(&self.printer))
    }

    /// Also bind `if`, `let` and `print` under their own names.
    pub fn bind_builtins(&self) -> &Self {
        for name in builtins::NAMES {
            self.bind_builtin(name);
        }
        self
    }

    fn bind_builtin(&self, name: &str) {
        if let Some(callable) = builtins::lookup(name.as_bytes()) {
            self.define(name.as_bytes(), Value::callable(callable));
        }
    }

    pub fn intern(&self, text: &[u8]) -> Name {
        self.interner.intern(text)
    }

    /// Insert or overwrite a binding.
    pub fn define(&self, name: &[u8], value: Value) {
        let name = self.intern(name);
        self.assign(name, value);
    }

    pub fn assign(&self, name: Name, value: Value) {
        tracing::trace!(name = %name, value = %value, "bind");
        self.bindings.borrow_mut().insert(name, value);
    }

    pub fn lookup(&self, name: &[u8]) -> Option<Value> {
        self.bindings.borrow().get(name).cloned()
    }

    pub fn is_bound(&self, name: &[u8]) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.bindings.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn printer(&self) -> &SharedPrintHandler {
        &self.printer
    }

    /// Whether both handles share one set of bindings.
    pub fn ptr_eq(a: &Environment, b: &Environment) -> bool {
        Rc::ptr_eq(&a.bindings.0, &b.bindings.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names())
            .field("printer", &self.printer)
            .finish_non_exhaustive()
    }
}
