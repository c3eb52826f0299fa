//! Built-in callables: `if`, `let`, `print` and `builtin`.
//!
//! `if` and `let` are special forms that compile their own arguments. `print`
//! and `builtin` are ordinary functions built on [`FunctionCallable`], which
//! evaluates every argument left to right before calling through.

use std::rc::Rc;

use sexpr_ir::visitor::{apply, TokenText};
use sexpr_ir::{List, Sequence};
use sexpr_stack::ensure_sufficient_stack;

use crate::compile::compile;
use crate::errors::{
    extra_builtin_garbage, extra_if_arguments, extra_let_garbage, let_varname_not_token,
    missing_builtin_argument, missing_if_cond, missing_if_iftrue, missing_let_content,
    missing_let_varname, unknown_builtin,
};
use crate::{
    Callable, CallableImpl, Continuation, Environment, EvalError, EvalResult, Evaluable, Value,
};

/// Every built-in name, in prelude binding order.
pub const NAMES: [&str; 4] = ["builtin", "if", "let", "print"];

/// Look a built-in up by name.
pub fn lookup(name: &[u8]) -> Option<Callable> {
    let callable = match name {
        b"if" => Callable::new("if", Conditional),
        b"let" => Callable::new("let", Assignment),
        b"print" => Callable::new("print", FunctionCallable::new(print_function)),
        b"builtin" => Callable::new("builtin", FunctionCallable::new(builtin_function)),
        _ => return None,
    };
    Some(callable)
}

/// A function over already-evaluated arguments.
pub type RealFunction = Rc<dyn Fn(&Environment, Sequence<Value>) -> Result<Value, EvalError>>;

/// Adapts a [`RealFunction`] into a callable: each argument is compiled at
/// the call site and evaluated in order when the call runs.
#[derive(Clone)]
pub struct FunctionCallable {
    function: RealFunction,
}

impl FunctionCallable {
    pub fn new(
        function: impl Fn(&Environment, Sequence<Value>) -> Result<Value, EvalError> + 'static,
    ) -> Self {
        FunctionCallable {
            function: Rc::new(function),
        }
    }
}

impl CallableImpl for FunctionCallable {
    fn call(&self, env: &Environment, args: List) -> Result<Evaluable, EvalError> {
        let args: Rc<[Evaluable]> = args
            .into_iter()
            .map(|arg| compile(env, arg))
            .collect::<Result<_, _>>()?;
        let function = Rc::clone(&self.function);
        Ok(Evaluable::new(move |env, ret| {
            let function = Rc::clone(&function);
            let call_env = env.clone();
            eval_args(
                env,
                Rc::clone(&args),
                0,
                Sequence::new(),
                Box::new(move |values| ret(function(&call_env, values)?)),
            )
        }))
    }
}

type ArgsDone = Box<dyn FnOnce(Sequence<Value>) -> EvalResult>;

/// Evaluate `args[index..]` in order, appending to `values`, then hand the
/// full sequence to `done`.
fn eval_args(
    env: &Environment,
    args: Rc<[Evaluable]>,
    index: usize,
    mut values: Sequence<Value>,
    done: ArgsDone,
) -> EvalResult {
    let Some(arg) = args.get(index).cloned() else {
        return done(values);
    };
    let next_env = env.clone();
    arg.eval_with(env, move |value| {
        values.push_back(value);
        ensure_sufficient_stack(|| eval_args(&next_env, args, index + 1, values, done))
    })
}

/// `(if cond then [else])`
pub struct Conditional;

impl CallableImpl for Conditional {
    fn call(&self, env: &Environment, mut args: List) -> Result<Evaluable, EvalError> {
        let cond = compile(env, args.take_front().ok_or_else(missing_if_cond)?)?;
        let if_true = compile(env, args.take_front().ok_or_else(missing_if_iftrue)?)?;
        let if_false = match args.take_front() {
            Some(expr) => compile(env, expr)?,
            None => Evaluable::nil(),
        };
        if !args.is_empty() {
            return Err(extra_if_arguments());
        }

        Ok(Evaluable::new(move |env, ret: Continuation| {
            let if_true = if_true.clone();
            let if_false = if_false.clone();
            let branch_env = env.clone();
            cond.eval_with(env, move |value| {
                let branch = if value.as_int() != 0 { if_true } else { if_false };
                branch.eval(&branch_env, ret)
            })
        }))
    }
}

/// `(let name value)`: binds in the environment the form runs in.
pub struct Assignment;

impl CallableImpl for Assignment {
    fn call(&self, env: &Environment, mut args: List) -> Result<Evaluable, EvalError> {
        let target = args.take_front().ok_or_else(missing_let_varname)?;
        let name = apply(None, &mut TokenText, &target)
            .map(|text| env.intern(text))
            .ok_or_else(let_varname_not_token)?;
        let rhs = compile(env, args.take_front().ok_or_else(missing_let_content)?)?;
        if !args.is_empty() {
            return Err(extra_let_garbage());
        }

        Ok(Evaluable::new(move |env, ret: Continuation| {
            let name = name.clone();
            let target_env = env.clone();
            rhs.eval_with(env, move |value| {
                target_env.assign(name, value);
                ret(Value::nil())
            })
        }))
    }
}

/// Writes each argument's printed form on its own line.
fn print_function(env: &Environment, args: Sequence<Value>) -> Result<Value, EvalError> {
    for value in &args {
        env.printer().println(&value.to_string());
    }
    Ok(Value::nil())
}

/// `(builtin "name")`: the named built-in callable.
fn builtin_function(_env: &Environment, mut args: Sequence<Value>) -> Result<Value, EvalError> {
    let name = args.take_front().ok_or_else(missing_builtin_argument)?.as_string();
    if !args.is_empty() {
        return Err(extra_builtin_garbage());
    }
    lookup(&name)
        .map(Value::callable)
        .ok_or_else(|| unknown_builtin(&name.to_str_lossy()))
}

#[cfg(test)]
mod tests;
