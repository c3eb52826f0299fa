use super::*;
use crate::test_helpers::{eval_all, eval_last, test_env};
use pretty_assertions::assert_eq;

fn script_error_of(src: &str) -> String {
    let err = eval_all(&test_env(), src).unwrap_err();
    err.script_message().map(str::to_owned).unwrap_or_else(|| err.to_string())
}

#[test]
fn if_picks_a_branch() {
    let env = test_env();
    assert_eq!(eval_last(&env, "(if 0 1 2)").unwrap(), "2");
    assert_eq!(eval_last(&env, "(if 1 1 2)").unwrap(), "1");
    assert_eq!(eval_last(&env, "(if -5 \"t\" \"f\")").unwrap(), "\"t\"");
}

#[test]
fn if_without_else_yields_nil() {
    let env = test_env();
    assert_eq!(eval_last(&env, "(if 0 1)").unwrap(), "()");
}

#[test]
fn if_only_evaluates_the_taken_branch() {
    let env = test_env();
    eval_all(&env, "(if 1 (print \"then\") (print \"else\"))").unwrap();
    assert_eq!(env.printer().get_output(), "\"then\"\n");
}

#[test]
fn if_argument_errors() {
    assert_eq!(script_error_of("(if)"), "missing if cond");
    assert_eq!(script_error_of("(if 1)"), "missing if iftrue");
    assert_eq!(script_error_of("(if 1 2 3 4)"), "extra if arguments");
}

#[test]
fn let_then_print() {
    let env = test_env();
    let values = eval_all(&env, "(let x 5)\n(print x)").unwrap();
    assert!(values.iter().all(Value::is_nil));
    assert_eq!(env.printer().get_output(), "5\n");
}

#[test]
fn let_overwrites() {
    let env = test_env();
    eval_all(&env, "(let x 1) (let x (if x \"again\" 0))").unwrap();
    assert_eq!(env.lookup(b"x").unwrap().to_string(), "\"again\"");
}

#[test]
fn let_binds_in_the_environment_it_runs_in() {
    let a = test_env();
    let b = a.sibling();
    b.bind_builtins();
    eval_all(&a, "(let x 1)").unwrap();
    assert!(a.is_bound(b"x"));
    assert!(!b.is_bound(b"x"));
    assert_eq!(eval_last(&b, "x").unwrap(), "()");
}

#[test]
fn let_argument_errors() {
    assert_eq!(script_error_of("(let)"), "missing let varname");
    assert_eq!(script_error_of("(let \"x\" 1)"), "let varname not token");
    assert_eq!(script_error_of("(let 5 1)"), "let varname not token");
    assert_eq!(script_error_of("(let x)"), "missing let content");
    assert_eq!(script_error_of("(let x 1 2)"), "extra let garbage");
}

#[test]
fn print_writes_each_argument_on_its_own_line() {
    let env = test_env();
    let last = eval_last(&env, "(print \"hi\" 42 (builtin \"let\") nope)").unwrap();
    assert_eq!(last, "()");
    assert_eq!(
        env.printer().get_output(),
        "\"hi\"\n42\n(builtin \"let\")\n()\n"
    );
}

#[test]
fn print_evaluates_arguments_left_to_right() {
    let env = test_env();
    eval_all(&env, "(print (print 1) (print 2))").unwrap();
    assert_eq!(env.printer().get_output(), "1\n2\n()\n()\n");
}

#[test]
fn builtin_looks_up_by_name() {
    let env = crate::Environment::with_print_handler(crate::buffer_handler());
    assert_eq!(env.len(), 1);
    eval_all(&env, "((builtin \"print\") \"via builtin\")").unwrap();
    assert_eq!(env.printer().get_output(), "\"via builtin\"\n");
}

#[test]
fn builtin_argument_errors() {
    assert_eq!(script_error_of("(builtin)"), "missing builtin argument");
    assert_eq!(script_error_of("(builtin \"if\" \"let\")"), "extra builtin garbage");
    assert_eq!(script_error_of("(builtin \"lambda\")"), "unknown builtin: lambda");
}

#[test]
fn lookup_knows_every_name() {
    for name in NAMES {
        let callable = lookup(name.as_bytes()).unwrap();
        assert_eq!(callable.name(), &sexpr_ir::Text::from(name));
    }
    assert!(lookup(b"sleep").is_none());
}

#[test]
fn host_functions_get_evaluated_arguments() {
    let env = test_env();
    let sum = FunctionCallable::new(|_, args: Sequence<Value>| {
        Ok(Value::int(args.iter().map(Value::as_int).sum()))
    });
    env.define(b"+", Value::callable(Callable::new("+", sum)));
    assert_eq!(eval_last(&env, "(let a 40) (+ a 2)").unwrap(), "42");
    assert_eq!(eval_last(&env, "(+)").unwrap(), "0");
}

#[test]
fn errors_inside_arguments_propagate() {
    assert_eq!(script_error_of("(print 1 (builtin \"nope\"))"), "unknown builtin: nope");
}
