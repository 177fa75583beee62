//! Cancellable single-threaded task scheduler.
//!
//! Every delay in the terminal goes through a [`Scheduler`]: the caller
//! schedules a plain task value, receives a [`TaskHandle`], and later pulls
//! due tasks out with [`Scheduler::pop_due`] while advancing virtual time.
//! Nothing runs on its own, so cancelling (one task or all of them) is just
//! removing entries. A torn-down session therefore can never be written to
//! by a leftover timer.
//!
//! # Invariants
//!
//! 1. Tasks come out ordered by due time; ties keep scheduling order.
//! 2. Time never moves backwards.
//! 3. A cancelled task is never returned.

/// Handle for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    due_ms: u64,
    handle: TaskHandle,
    task: T,
}

/// Virtual-time scheduler holding pending tasks of type `T`.
#[derive(Debug)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `task` to become due `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u32, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            due_ms: self.now_ms + u64::from(delay_ms),
            handle,
            task,
        });
        handle
    }

    /// Whether `handle` is still waiting to fire.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    /// Cancel a single task. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Cancel every pending task, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// Remove and return the earliest task due at or before `until_ms`.
    ///
    /// Virtual time jumps to the task's due time, so tasks scheduled while
    /// handling it are timed relative to when it fired, not to `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= until_ms)
            .min_by_key(|(_, s)| (s.due_ms, s.handle))
            .map(|(i, _)| i)?;
        let entry = self.pending.swap_remove(idx);
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry.task)
    }

    /// Move virtual time forward to `until_ms` once due tasks are drained.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}
