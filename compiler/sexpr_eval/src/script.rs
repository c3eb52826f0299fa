//! Step-at-a-time script sessions.
//!
//! A [`Script`] reads, compiles and evaluates one top-level form per step.
//! The continuation of each form schedules the next step on the
//! [`Scheduler`] instead of calling it, so nothing on the call stack spans two
//! forms. A form that parks its continuation simply leaves the queue empty
//! until the host calls the continuation.

use std::cell::RefCell;
use std::fmt;
use std::io::BufRead;
use std::rc::{Rc, Weak};

use sexpr_ir::Text;
use sexpr_parse::Parser;

use crate::compile::compile;
use crate::{Environment, EvalResult, Scheduler, Value};

#[derive(Debug, Default)]
struct ScriptState {
    finished: bool,
    forms: usize,
    last: Option<Value>,
}

struct ScriptInner<R> {
    parser: RefCell<Parser<R>>,
    env: Environment,
    scheduler: Scheduler,
    state: RefCell<ScriptState>,
}

/// A script session. Clones are handles to the same session.
pub struct Script<R> {
    inner: Rc<ScriptInner<R>>,
}

impl<R> Clone for Script<R> {
    fn clone(&self) -> Self {
        Script {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: BufRead + 'static> Script<R> {
    pub fn new(parser: Parser<R>, env: Environment, scheduler: Scheduler) -> Self {
        Script {
            inner: Rc::new(ScriptInner {
                parser: RefCell::new(parser),
                env,
                scheduler,
                state: RefCell::new(ScriptState::default()),
            }),
        }
    }

    /// Queue the first step.
    pub fn start(&self) {
        schedule_step(&self.inner);
    }

    /// Queue the next step after an error abandoned the current form.
    pub fn resume(&self) {
        if !self.is_finished() {
            schedule_step(&self.inner);
        }
    }

    /// Start and run the scheduler until it goes idle.
    pub fn run(&self) -> EvalResult {
        self.start();
        self.inner.scheduler.run_until_idle()
    }

    pub fn is_finished(&self) -> bool {
        self.inner.state.borrow().finished
    }

    /// Number of top-level forms that produced a value.
    pub fn forms_evaluated(&self) -> usize {
        self.inner.state.borrow().forms
    }

    /// Value of the most recently completed form.
    pub fn last_value(&self) -> Option<Value> {
        self.inner.state.borrow().last.clone()
    }

    pub fn environment(&self) -> &Environment {
        &self.inner.env
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.inner.scheduler
    }

    pub fn shebang(&self) -> Option<Text> {
        self.inner.parser.borrow().shebang().cloned()
    }
}

fn schedule_step<R: BufRead + 'static>(inner: &Rc<ScriptInner<R>>) {
    let weak: Weak<ScriptInner<R>> = Rc::downgrade(inner);
    inner.scheduler.schedule(move || match weak.upgrade() {
        Some(inner) => step(&inner),
        None => Ok(()),
    });
}

fn step<R: BufRead + 'static>(inner: &Rc<ScriptInner<R>>) -> EvalResult {
    let form = inner.parser.borrow_mut().next()?;
    if form.is_void() {
        tracing::debug!("script finished");
        inner.state.borrow_mut().finished = true;
        return Ok(());
    }

    let evaluable = compile(&inner.env, form)?;
    let this = Rc::clone(inner);
    evaluable.eval_with(&inner.env, move |value| {
        {
            let mut state = this.state.borrow_mut();
            state.forms += 1;
            state.last = Some(value);
        }
        schedule_step(&this);
        Ok(())
    })
}

impl<R> fmt::Debug for Script<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("state", &self.inner.state.borrow())
            .field("scheduler", &self.inner.scheduler)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
