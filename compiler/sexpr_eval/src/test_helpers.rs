//! Shared fixtures for evaluator tests.

use sexpr_ir::SExpr;
use sexpr_lexer::SourceOptions;
use sexpr_parse::Parser;

use crate::print_handler::buffer_handler;
use crate::{compile, Environment, EvalError, Value};

/// An environment with the prelude bound and output captured.
pub fn test_env() -> Environment {
    let env = Environment::with_print_handler(buffer_handler());
    env.bind_builtins();
    env
}

pub fn parse_one(src: &str) -> SExpr {
    let mut parser = Parser::from_reader("test", src.as_bytes(), SourceOptions::default())
        .unwrap_or_else(|err| panic!("{err}"));
    parser.next().unwrap_or_else(|err| panic!("{err}"))
}

/// Compile and evaluate every form in `src`, returning each form's value.
pub fn eval_all(env: &Environment, src: &str) -> Result<Vec<Value>, EvalError> {
    let mut parser = Parser::from_reader("test", src.as_bytes(), SourceOptions::default())?;
    let mut values = Vec::new();
    loop {
        let form = parser.next()?;
        if form.is_void() {
            return Ok(values);
        }
        let value = compile(env, form)?
            .eval_now(env)?
            .unwrap_or_else(|| panic!("form suspended"));
        values.push(value);
    }
}

/// Evaluate `src` and return the printed form of its last value.
pub fn eval_last(env: &Environment, src: &str) -> Result<String, EvalError> {
    let values = eval_all(env, src)?;
    Ok(values.last().map(Value::to_string).unwrap_or_default())
}
