//! From s-expression to [`Evaluable`].

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use sexpr_ir::SExpr;
use sexpr_stack::ensure_sufficient_stack;

use crate::errors::{compile_void, head_suspended, not_callable};
use crate::{Environment, EvalError, Evaluable, Value};

/// Compile one expression.
///
/// Literals become constants and tokens become variable references. A
/// non-empty list is a call: its head is compiled and evaluated right away,
/// and the resulting callable compiles the remaining, still raw, arguments.
#[tracing::instrument(level = "trace", skip_all, fields(kind = expr.kind_name()))]
pub fn compile(env: &Environment, mut expr: SExpr) -> Result<Evaluable, EvalError> {
    match &mut expr {
        SExpr::Void => Err(compile_void()),
        SExpr::Int(value) => Ok(Evaluable::constant(Value::int(*value))),
        SExpr::String(text) => Ok(Evaluable::constant(Value::string(mem::take(text)))),
        SExpr::Token(text) => Ok(Evaluable::variable(env.intern(text))),
        SExpr::List(items) => {
            let mut items = mem::take(items);
            let Some(head) = items.take_front() else {
                return Ok(Evaluable::nil());
            };
            let head = ensure_sufficient_stack(|| compile(env, head))?;

            let slot = Rc::new(RefCell::new(None));
            let out = Rc::clone(&slot);
            let call_env = env.clone();
            head.eval_with(env, move |value| {
                let callable = value
                    .as_callable()
                    .ok_or_else(|| not_callable(&value.to_string()))?;
                let compiled = ensure_sufficient_stack(|| callable.call(&call_env, items))?;
                *out.borrow_mut() = Some(compiled);
                Ok(())
            })?;

            let compiled = slot.borrow_mut().take();
            compiled.ok_or_else(head_suspended)
        }
    }
}

#[cfg(test)]
mod tests;
