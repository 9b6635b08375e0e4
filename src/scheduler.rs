//! One-shot scheduled tasks with cancellable handles.
//!
//! The editor's event loop owns a `Scheduler` and calls `take_due` on every
//! tick. Scheduling returns a `TaskHandle`; cancelling a handle guarantees
//! its payload is never returned, even if it is already overdue.
//!
//! # Example Usage
//! ```rust,ignore
//! let clock = SystemClock;
//! let mut scheduler = Scheduler::new();
//! let handle = scheduler.schedule_after(clock.now(), Duration::from_millis(2000), Task::Revert);
//!
//! // A newer request supersedes the pending one
//! scheduler.cancel(handle);
//!
//! for task in scheduler.take_due(clock.now()) {
//!     run(task);
//! }
//! ```

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

/// Source of the current time for scheduling and export stamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-advanced clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock(Rc<Cell<DateTime<Utc>>>);

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        ManualClock(Rc::new(Cell::new(start)))
    }

    pub fn advance(&self, by: Duration) {
        let step = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        self.0.set(self.0.get() + step);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

/// Identifies a scheduled task for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct ScheduledTask<T> {
    id: u64,
    due_at: DateTime<Utc>,
    payload: T,
}

/// Pending one-shot tasks ordered by due time
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<ScheduledTask<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Scheduler {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Schedule `payload` to become due at `due_at`.
    pub fn schedule_at(&mut self, due_at: DateTime<Utc>, payload: T) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        // Stable insert keeps FIFO order among equal due times
        let index = self.tasks.partition_point(|t| t.due_at <= due_at);
        self.tasks.insert(index, ScheduledTask { id, due_at, payload });
        debug!(task_id = id, due_at = %due_at, "Task scheduled");
        TaskHandle(id)
    }

    pub fn schedule_after(&mut self, now: DateTime<Utc>, delay: Duration, payload: T) -> TaskHandle {
        let delay = chrono::Duration::from_std(delay).unwrap_or(chrono::Duration::zero());
        self.schedule_at(now + delay, payload)
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.tasks.iter().position(|t| t.id == handle.0) {
            Some(index) => {
                self.tasks.remove(index);
                debug!(task_id = handle.0, "Task cancelled");
                true
            }
            None => false,
        }
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<T> {
        let split = self.tasks.partition_point(|t| t.due_at <= now);
        self.tasks
            .drain(..split)
            .map(|t| {
                debug!(task_id = t.id, "Task due");
                t.payload
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_000_000).unwrap()
    }

    #[test]
    fn test_task_fires_at_due_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(t0(), Duration::from_millis(2000), "revert");

        assert!(scheduler.take_due(t0() + chrono::Duration::milliseconds(1999)).is_empty());
        assert_eq!(
            scheduler.take_due(t0() + chrono::Duration::milliseconds(2000)),
            vec!["revert"]
        );
        assert!(scheduler
            .take_due(t0() + chrono::Duration::seconds(60))
            .is_empty());
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule_after(t0(), Duration::from_millis(10), 1);
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler
            .take_due(t0() + chrono::Duration::seconds(60))
            .is_empty());
    }

    #[test]
    fn test_due_tasks_are_ordered() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(t0(), Duration::from_millis(30), "c");
        scheduler.schedule_after(t0(), Duration::from_millis(10), "a");
        scheduler.schedule_after(t0(), Duration::from_millis(10), "b");
        assert_eq!(
            scheduler.take_due(t0() + chrono::Duration::milliseconds(30)),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(t0());
        let other = clock.clone();
        clock.advance(Duration::from_millis(1500));
        assert_eq!(other.now(), t0() + chrono::Duration::milliseconds(1500));
    }
}
