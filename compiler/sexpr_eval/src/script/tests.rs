use super::*;
use crate::print_handler::buffer_handler;
use crate::{Callable, Continuation, EvalError, Evaluable};
use pretty_assertions::assert_eq;
use sexpr_lexer::SourceOptions;

fn script(src: &'static str, env: &Environment) -> Script<&'static [u8]> {
    let parser = Parser::from_reader("script", src.as_bytes(), SourceOptions::default()).unwrap();
    Script::new(parser, env.clone(), Scheduler::new())
}

fn prelude_env() -> Environment {
    let env = Environment::with_print_handler(buffer_handler());
    env.bind_builtins();
    env
}

type Parked = Rc<RefCell<Vec<Continuation>>>;

/// Binds `pause`, which parks its continuation for the host to resume.
fn bind_pause(env: &Environment) -> Parked {
    let parked: Parked = Rc::default();
    let park = Rc::clone(&parked);
    env.define(
        b"pause",
        Value::callable(Callable::from_fn("pause", move |_, _| {
            let park = Rc::clone(&park);
            Ok(Evaluable::new(move |_, ret| {
                park.borrow_mut().push(ret);
                Ok(())
            }))
        })),
    );
    parked
}

#[test]
fn runs_every_form_in_order() {
    let env = prelude_env();
    let script = script("(let x 5)\n(print x)\n(print \"done\")\n", &env);
    script.run().unwrap();
    assert!(script.is_finished());
    assert_eq!(script.forms_evaluated(), 3);
    assert_eq!(env.printer().get_output(), "5\n\"done\"\n");
}

#[test]
fn each_form_is_a_separate_step() {
    let env = prelude_env();
    let script = script("(print 1) (print 2)", &env);
    script.start();
    assert_eq!(script.scheduler().pending(), 1);
    script.scheduler().run_one().unwrap().unwrap();
    assert_eq!(env.printer().get_output(), "1\n");
    assert_eq!(script.scheduler().pending(), 1);
    script.scheduler().run_until_idle().unwrap();
    assert_eq!(env.printer().get_output(), "1\n2\n");
}

#[test]
fn suspends_and_resumes() {
    let env = prelude_env();
    let parked = bind_pause(&env);
    let script = script("(print 1)\n(let y (pause))\n(print y)\n", &env);

    script.run().unwrap();
    assert!(!script.is_finished());
    assert!(script.scheduler().is_idle());
    assert_eq!(env.printer().get_output(), "1\n");

    let resume = parked.borrow_mut().pop().unwrap();
    resume(Value::int(7)).unwrap();
    script.scheduler().run_until_idle().unwrap();

    assert!(script.is_finished());
    assert_eq!(env.printer().get_output(), "1\n7\n");
    assert_eq!(script.forms_evaluated(), 3);
}

#[test]
fn dropping_a_parked_continuation_abandons_the_script() {
    let env = prelude_env();
    let parked = bind_pause(&env);
    let script = script("(pause)\n(print \"never\")\n", &env);
    script.run().unwrap();
    parked.borrow_mut().clear();
    script.scheduler().run_until_idle().unwrap();
    assert!(!script.is_finished());
    assert_eq!(env.printer().get_output(), "");
}

#[test]
fn host_work_interleaves_with_steps() {
    let env = prelude_env();
    let script = script("(print 1) (print 2)", &env);
    let printer = std::sync::Arc::clone(env.printer());
    script.start();
    script.scheduler().schedule(move || {
        printer.println("host");
        Ok(())
    });
    script.scheduler().run_until_idle().unwrap();
    assert_eq!(env.printer().get_output(), "1\nhost\n2\n");
}

#[test]
fn errors_stop_the_run_and_resume_continues() {
    let env = prelude_env();
    let script = script("(print 1)\n(if)\n(print 2)\n)\n(print 3)\n", &env);

    let err = script.run().unwrap_err();
    assert_eq!(err.script_message(), Some("missing if cond"));

    script.resume();
    let err = script.scheduler().run_until_idle().unwrap_err();
    assert!(matches!(err, EvalError::Syntax(_)));
    assert_eq!(
        err.to_string(),
        "At script:4:1\nUnexpected unmatched ')'\n)\n^"
    );

    script.resume();
    script.scheduler().run_until_idle().unwrap();
    assert!(script.is_finished());
    assert_eq!(env.printer().get_output(), "1\n2\n3\n");
}

#[test]
fn last_value_tracks_completed_forms() {
    let env = prelude_env();
    let script = script("1 \"two\" (if 0 3)", &env);
    script.run().unwrap();
    assert_eq!(script.last_value().unwrap().to_string(), "()");
    assert_eq!(script.forms_evaluated(), 3);
}

#[test]
fn separate_sessions_are_isolated() {
    let a_env = prelude_env();
    let b_env = a_env.sibling();
    b_env.bind_builtins();
    script("(let secret 1)", &a_env).run().unwrap();
    let b = script("(print secret)", &b_env);
    b.run().unwrap();
    assert!(!b_env.is_bound(b"secret"));
    assert_eq!(b_env.printer().get_output(), "()\n");
}

#[test]
fn shebang_is_exposed() {
    let env = prelude_env();
    let script = script("#!/usr/bin/env sexpr\n(print 1)\n", &env);
    assert_eq!(script.shebang(), Some(Text::from("#!/usr/bin/env sexpr")));
    script.run().unwrap();
    assert_eq!(env.printer().get_output(), "1\n");
}
