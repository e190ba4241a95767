use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Owns a scheduled task. Dropping the handle cancels the task.
pub struct TaskHandle {
    guard: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    /// Wraps the closure that tears the task down
    pub fn new<F>(guard: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            guard: Some(Box::new(guard)),
        }
    }

    /// Cancels the task now instead of waiting for the handle to drop
    pub fn cancel(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        self.guard.is_some()
    }

    fn release(&mut self) {
        if let Some(guard) = self.guard.take() {
            guard();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Source of repeating and one-shot timers
pub trait Scheduler {
    /// Runs `task` every `period_ms`, first firing one period from now
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;

    /// Runs `task` once after `delay_ms`
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// Browser timers (`setInterval` / `setTimeout`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        let interval = Interval::new(period_ms, task);
        TaskHandle::new(move || drop(interval))
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || drop(timeout))
    }
}

enum Job {
    Repeating(Box<dyn FnMut()>),
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    id: u64,
    due: u64,
    period: u64,
    active: Rc<Cell<bool>>,
    job: Job,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl Clock {
    fn schedule(&mut self, due: u64, period: u64, job: Job) -> (u64, Rc<Cell<bool>>) {
        let id = self.next_id;
        self.next_id += 1;
        let active = Rc::new(Cell::new(true));
        self.entries.push(Entry {
            id,
            due,
            period,
            active: active.clone(),
            job,
        });
        (id, active)
    }

    /// Removes the earliest entry due at or before `deadline`, ties broken by registration order
    fn pop_due(&mut self, deadline: u64) -> Option<Entry> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= deadline)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;
        Some(self.entries.swap_remove(index))
    }
}

/// Simulated clock for driving timers deterministically.
///
/// Nothing fires until [`ManualScheduler::advance`] moves time forward. Repeating
/// tasks fire at exact multiples of their period from the moment they were registered.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the scheduler was created
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Number of tasks still waiting to fire
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    /// Moves time forward by `ms`, running every task that falls due on the way
    pub fn advance(&self, ms: u64) {
        let deadline = self.clock.borrow().now + ms;

        loop {
            // The borrow must end before the job runs: jobs may schedule or cancel
            let Some(entry) = self.clock.borrow_mut().pop_due(deadline) else {
                break;
            };
            let Entry {
                id,
                due,
                period,
                active,
                job,
            } = entry;
            self.clock.borrow_mut().now = due;

            match job {
                Job::Once(task) => task(),
                Job::Repeating(mut task) => {
                    task();
                    if active.get() {
                        self.clock.borrow_mut().entries.push(Entry {
                            id,
                            due: due + period,
                            period,
                            active,
                            job: Job::Repeating(task),
                        });
                    }
                }
            }
        }

        self.clock.borrow_mut().now = deadline;
    }

    fn register(&self, offset_ms: u32, job: Job) -> TaskHandle {
        let period = u64::from(offset_ms);
        let (id, active) = {
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + period;
            clock.schedule(due, period, job)
        };
        let clock: Weak<RefCell<Clock>> = Rc::downgrade(&self.clock);

        TaskHandle::new(move || {
            active.set(false);
            if let Some(clock) = clock.upgrade() {
                // A running repeating task is out of the list; the flag stops its reinsertion
                if let Ok(mut clock) = clock.try_borrow_mut() {
                    clock.entries.retain(|e| e.id != id);
                }
            }
        })
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        self.register(period_ms.max(1), Job::Repeating(task))
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        self.register(delay_ms, Job::Once(task))
    }
}
