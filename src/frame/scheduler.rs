//! Execution contexts that run deferred flushes.
//!
//! The coordinator never runs a flush inline: it hands a task to a
//! `FrameScheduler` along with a delay. Hosts with a UI event loop use
//! [`DeadlineQueue`] and drain it from that loop; hosts whose redraw
//! targets are thread-safe can use [`ThreadScheduler`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::clock::Clock;
use crate::error::{Error, Result};

/// A deferred unit of work.
pub type FrameTask = Box<dyn FnOnce() + Send>;

/// Runs tasks after a delay on some execution context.
pub trait FrameScheduler: Send + Sync {
    /// Run `task` once `delay` has elapsed (`Duration::ZERO` = as soon as possible).
    ///
    /// Returns [`Error::SchedulingUnavailable`] if the context cannot accept work.
    fn schedule(&self, delay: Duration, task: FrameTask) -> Result<()>;
}

/// Deadline-ordered task queue drained by the host's event loop.
///
/// The host waits until [`next_deadline`](Self::next_deadline) (e.g. with
/// winit's `ControlFlow::WaitUntil`) and then calls
/// [`run_due`](Self::run_due) on the UI thread.
pub struct DeadlineQueue {
    clock: Arc<dyn Clock>,
    tasks: Mutex<Vec<(Instant, FrameTask)>>,
    closed: AtomicBool,
}

impl DeadlineQueue {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            tasks: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Earliest due time of any queued task.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.lock().iter().map(|(due, _)| *due).min()
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.lock().is_empty()
    }

    /// Run every task whose deadline has passed, earliest first.
    ///
    /// Tasks run without the queue lock held, so they may schedule more work.
    /// Returns the number of tasks run.
    pub fn run_due(&self) -> usize {
        let now = self.clock.now();
        let mut due = {
            let mut tasks = self.tasks.lock();
            let (ready, waiting) = std::mem::take(&mut *tasks)
                .into_iter()
                .partition::<Vec<_>, _>(|(at, _)| *at <= now);
            *tasks = waiting;
            ready
        };
        due.sort_by_key(|(at, _)| *at);
        let count = due.len();
        for (_, task) in due {
            task();
        }
        count
    }

    /// Refuse further work; queued tasks are kept.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

impl FrameScheduler for DeadlineQueue {
    fn schedule(&self, delay: Duration, task: FrameTask) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(Error::SchedulingUnavailable("deadline queue closed".to_owned()));
        }
        let due = self.clock.now() + delay;
        self.tasks.lock().push((due, task));
        Ok(())
    }
}

/// Runs each task on a short-lived helper thread after sleeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl FrameScheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: FrameTask) -> Result<()> {
        thread::Builder::new()
            .name("frame-flush".to_owned())
            .spawn(move || {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                task();
            })
            .map(drop)
            .map_err(|e| Error::SchedulingUnavailable(e.to_string()))
    }
}
