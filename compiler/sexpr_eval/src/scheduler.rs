//! Run queue for script steps.
//!
//! A script never calls its next step directly; it schedules it here, so the
//! host decides when evaluation continues and can interleave other work.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::EvalResult;

pub type Task = Box<dyn FnOnce() -> EvalResult>;

/// FIFO of pending tasks. Clones share one queue.
#[derive(Clone, Default)]
pub struct Scheduler {
    queue: Rc<RefCell<VecDeque<Task>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, task: impl FnOnce() -> EvalResult + 'static) {
        self.queue.borrow_mut().push_back(Box::new(task));
    }

    /// Run the oldest task, if any.
    pub fn run_one(&self) -> Option<EvalResult> {
        // The borrow must end before the task runs: tasks schedule more tasks.
        let task = self.queue.borrow_mut().pop_front()?;
        Some(task())
    }

    /// Run tasks until the queue is empty or one fails. Tasks queued after a
    /// failing one stay queued.
    pub fn run_until_idle(&self) -> EvalResult {
        while let Some(result) = self.run_one() {
            result?;
        }
        Ok(())
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Drop every pending task.
    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.pending())
            .finish()
    }
}
