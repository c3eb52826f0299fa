//! Compiled code.
//!
//! An [`Evaluable`] never returns its value. Given an environment and a
//! [`Continuation`], it arranges for the continuation to be called exactly
//! once with the result, either before `eval` returns or later, after the
//! host resumes a parked continuation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use sexpr_ir::Name;
use sexpr_stack::ensure_sufficient_stack;

use crate::{Environment, EvalResult, Value};

/// The rest of the computation.
pub type Continuation = Box<dyn FnOnce(Value) -> EvalResult>;

type EvaluableFn = dyn Fn(&Environment, Continuation) -> EvalResult;

#[derive(Clone)]
pub struct Evaluable(Rc<EvaluableFn>);

impl Evaluable {
    pub fn new(f: impl Fn(&Environment, Continuation) -> EvalResult + 'static) -> Self {
        Evaluable(Rc::new(f))
    }

    /// Always yields `value`.
    pub fn constant(value: Value) -> Self {
        Evaluable::new(move |_, ret| ret(value.clone()))
    }

    pub fn nil() -> Self {
        Evaluable::new(|_, ret| ret(Value::nil()))
    }

    /// Looks `name` up in the environment it is evaluated in, yielding `nil`
    /// when unbound.
    pub fn variable(name: Name) -> Self {
        Evaluable::new(move |env, ret| {
            let value = env.lookup(&name).unwrap_or_else(|| {
                tracing::warn!(name = %name, "unbound variable");
                Value::nil()
            });
            ret(value)
        })
    }

    /// Nested forms evaluate by nested calls, so every level runs behind a
    /// stack check.
    #[inline]
    pub fn eval(&self, env: &Environment, ret: Continuation) -> EvalResult {
        ensure_sufficient_stack(|| (self.0)(env, ret))
    }

    /// `eval` with an unboxed continuation.
    pub fn eval_with(
        &self,
        env: &Environment,
        ret: impl FnOnce(Value) -> EvalResult + 'static,
    ) -> EvalResult {
        self.eval(env, Box::new(ret))
    }

    /// Evaluate and return the value if it was produced before `eval`
    /// returned, or `None` if the computation suspended.
    pub fn eval_now(&self, env: &Environment) -> Result<Option<Value>, crate::EvalError> {
        let slot = Rc::new(RefCell::new(None));
        let out = Rc::clone(&slot);
        self.eval_with(env, move |value| {
            *out.borrow_mut() = Some(value);
            Ok(())
        })?;
        let value = slot.borrow_mut().take();
        Ok(value)
    }
}

fn spent(_: &Environment, _: Continuation) -> EvalResult {
    Ok(())
}

thread_local! {
    static SPENT: Rc<EvaluableFn> = Rc::new(spent);
}

/// Compiled code for a nested form owns the code of its subforms, so
/// dropping the last handle releases the inner closure behind a stack check.
impl Drop for Evaluable {
    fn drop(&mut self) {
        if Rc::strong_count(&self.0) > 1 {
            return;
        }
        let Ok(inner) = SPENT.try_with(|noop| std::mem::replace(&mut self.0, Rc::clone(noop)))
        else {
            return;
        };
        ensure_sufficient_stack(move || drop(inner));
    }
}

impl fmt::Debug for Evaluable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Evaluable(..)")
    }
}
