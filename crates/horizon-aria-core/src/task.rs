//! Deferred task queue.
//!
//! UI work in Horizon Aria is single-threaded and event driven. Some work must
//! still happen *after* the current event handler returns: a live
//! announcement, for example, has to reach the screen reader after the
//! toolkit's own focus announcement. Such work is posted to the calling
//! thread's deferred queue and executed by the host toolkit when it drains
//! the queue (typically once per event-loop turn).
//!
//! # Example
//!
//! ```
//! use horizon_aria_core::{post_deferred, run_deferred};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let ran = Arc::new(AtomicBool::new(false));
//! let ran_clone = ran.clone();
//! post_deferred(move || ran_clone.store(true, Ordering::SeqCst));
//!
//! assert!(!ran.load(Ordering::SeqCst));
//! run_deferred();
//! assert!(ran.load(Ordering::SeqCst));
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::logging::targets;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

type BoxedTask = Box<dyn FnOnce() + 'static>;

struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// A FIFO queue of deferred closures.
#[derive(Default)]
pub struct TaskQueue {
    tasks: VecDeque<TaskData>,
}

impl TaskQueue {
    /// Create a new, empty task queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a task to the back of the queue.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce() + 'static,
    {
        let id = next_task_id();
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Remove the task at the front of the queue without running it.
    fn pop(&mut self) -> Option<BoxedTask> {
        self.tasks.pop_front().map(|data| data.task)
    }
}

thread_local! {
    static DEFERRED: RefCell<TaskQueue> = RefCell::new(TaskQueue::new());
}

/// Post a task to the current thread's deferred queue.
pub fn post_deferred<F>(task: F) -> TaskId
where
    F: FnOnce() + 'static,
{
    let id = DEFERRED.with(|queue| queue.borrow_mut().post(task));
    tracing::trace!(target: targets::TASK, task = id.as_u64(), "posted deferred task");
    id
}

/// Cancel a task previously posted with [`post_deferred`].
pub fn cancel_deferred(id: TaskId) -> bool {
    DEFERRED.with(|queue| queue.borrow_mut().cancel(id))
}

/// Check whether the current thread has deferred work waiting.
pub fn has_deferred() -> bool {
    DEFERRED.with(|queue| queue.borrow().has_pending())
}

/// Run every deferred task on the current thread, in posting order.
///
/// Tasks posted while draining are run in the same drain. The queue is not
/// borrowed while a task executes, so tasks may freely post more work.
///
/// Returns the number of tasks executed.
pub fn run_deferred() -> usize {
    let mut count = 0;
    while let Some(task) = DEFERRED.with(|queue| queue.borrow_mut().pop()) {
        task();
        count += 1;
    }
    if count > 0 {
        tracing::trace!(target: targets::TASK, count, "drained deferred queue");
    }
    count
}
