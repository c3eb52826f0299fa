use super::*;
use crate::test_helpers::{eval_last, parse_one, test_env};
use crate::{Callable, Continuation};
use pretty_assertions::assert_eq;
use sexpr_ir::List;

#[test]
fn literals_are_constants() {
    let env = test_env();
    assert_eq!(eval_last(&env, "42").unwrap(), "42");
    assert_eq!(eval_last(&env, "\"hi\"").unwrap(), "\"hi\"");
}

#[test]
fn constants_can_be_evaluated_repeatedly() {
    let env = test_env();
    let evaluable = compile(&env, SExpr::Int(3)).unwrap();
    for _ in 0..3 {
        assert_eq!(evaluable.eval_now(&env).unwrap().unwrap().as_int(), 3);
    }
}

#[test]
fn empty_list_is_nil() {
    let env = test_env();
    let value = compile(&env, SExpr::list([])).unwrap().eval_now(&env).unwrap().unwrap();
    assert!(value.is_nil());
}

#[test]
fn compiling_void_is_a_script_error() {
    let err = compile(&test_env(), SExpr::Void).unwrap_err();
    assert_eq!(err.script_message(), Some("attempt to compile eof"));
}

#[test]
fn unbound_variable_is_nil() {
    let env = test_env();
    assert_eq!(eval_last(&env, "nothing").unwrap(), "()");
}

#[test]
fn variables_resolve_in_the_evaluating_environment() {
    let compile_env = test_env();
    let evaluable = compile(&compile_env, parse_one("x")).unwrap();

    let run_env = compile_env.sibling();
    run_env.define(b"x", Value::int(9));
    assert_eq!(evaluable.eval_now(&run_env).unwrap().unwrap().as_int(), 9);
    assert!(evaluable.eval_now(&compile_env).unwrap().unwrap().is_nil());
}

#[test]
fn calling_a_non_callable_fails() {
    let env = test_env();
    let err = eval_last(&env, "(5 1 2)").unwrap_err();
    assert_eq!(err.script_message(), Some("not callable: 5"));
}

#[test]
fn head_is_resolved_at_compile_time() {
    let env = test_env();
    env.define(b"p", env.lookup(b"print").unwrap());
    let evaluable = compile(&env, parse_one("(p 1)")).unwrap();
    env.define(b"p", Value::int(0));
    evaluable.eval_now(&env).unwrap();
    assert_eq!(env.printer().get_output(), "1\n");
}

#[test]
fn head_may_be_any_expression_yielding_a_callable() {
    let env = test_env();
    assert_eq!(eval_last(&env, "((builtin \"if\") 1 \"yes\" \"no\")").unwrap(), "\"yes\"");
}

#[test]
fn special_forms_receive_raw_arguments() {
    let env = test_env();
    let seen = std::rc::Rc::new(RefCell::new(None));
    let record = std::rc::Rc::clone(&seen);
    env.define(
        b"quote",
        Value::callable(Callable::from_fn("quote", move |_, args: List| {
            let first = args.front().cloned().unwrap_or_default();
            *record.borrow_mut() = Some(first.clone());
            Ok(Evaluable::constant(Value::string(first.to_string())))
        })),
    );
    assert_eq!(eval_last(&env, "(quote (a b))").unwrap(), "\"\\(a b\\)\"");
    assert_eq!(
        seen.borrow().clone(),
        Some(SExpr::list([SExpr::token("a"), SExpr::token("b")]))
    );
}

#[test]
fn suspending_head_is_rejected() {
    let env = test_env();
    let parked: std::rc::Rc<RefCell<Vec<Continuation>>> = std::rc::Rc::default();
    let park = std::rc::Rc::clone(&parked);
    env.define(
        b"later",
        Value::callable(Callable::from_fn("later", move |_, _| {
            let park = std::rc::Rc::clone(&park);
            Ok(Evaluable::new(move |_, ret| {
                park.borrow_mut().push(ret);
                Ok(())
            }))
        })),
    );
    let err = compile(&env, parse_one("((later) 1)")).unwrap_err();
    assert_eq!(err.script_message(), Some("call head did not produce a value"));
    assert_eq!(parked.borrow().len(), 1);
}

#[test]
fn deeply_nested_forms_evaluate_and_drop() {
    let depth = 20_000;
    let src = format!("{}1{}", "(if ".repeat(depth), " 1)".repeat(depth));
    let env = test_env();
    let evaluable = compile(&env, parse_one(&src)).unwrap();
    let value = evaluable.eval_now(&env).unwrap().unwrap();
    assert_eq!(value.as_int(), 1);
    drop(evaluable);
}
