//! Delayed tasks.
//!
//! Every timer in the site layer (toast lifetimes, the simulated order delay,
//! highlight resets) goes through [`Scheduler`]. Each scheduled task returns a
//! [`TaskHandle`] that can cancel it before it fires.
//!
//! The browser implementation lives in `tavola-pages`; [`ManualScheduler`] is a
//! fake clock that only moves when told to, which makes overlapping timers
//! deterministic in tests.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use tavola_core::schedule::{ManualScheduler, Scheduler};
//!
//! let clock = ManualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = fired.clone();
//! clock.schedule(Duration::from_millis(2000), Box::new(move || flag.set(true)));
//!
//! clock.advance(Duration::from_millis(1999));
//! assert!(!fired.get());
//! clock.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// A boxed task run once when its delay elapses.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Runs tasks after a delay.
pub trait Scheduler {
	/// Schedules `task` to run once after `delay`.
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		(**self).schedule(delay, task)
	}
}

type Canceller = Box<dyn FnOnce() + 'static>;

#[derive(Default)]
struct TaskState {
	cancelled: Cell<bool>,
	finished: Cell<bool>,
	canceller: RefCell<Option<Canceller>>,
}

impl fmt::Debug for TaskState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TaskState")
			.field("cancelled", &self.cancelled.get())
			.field("finished", &self.finished.get())
			.field("has_canceller", &self.canceller.borrow().is_some())
			.finish()
	}
}

/// Handle to a scheduled task.
///
/// Clones refer to the same task. Dropping a handle does not cancel the task.
#[derive(Debug, Clone, Default)]
pub struct TaskHandle {
	state: Rc<TaskState>,
}

impl TaskHandle {
	/// Creates a handle for a task that has not run yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Prevents the task from running. No-op once it has run.
	pub fn cancel(&self) {
		if !self.is_pending() {
			return;
		}
		self.state.cancelled.set(true);
		let canceller = self.state.canceller.borrow_mut().take();
		if let Some(canceller) = canceller {
			canceller();
		}
	}

	/// Registers `f` to release backend resources when the task is cancelled.
	///
	/// `f` runs at most once and is dropped unrun when the task fires. A
	/// handle that is no longer pending drops `f` immediately.
	pub fn on_cancel(&self, f: impl FnOnce() + 'static) {
		if self.is_pending() {
			*self.state.canceller.borrow_mut() = Some(Box::new(f));
		}
	}

	/// Whether [`TaskHandle::cancel`] was called before the task ran.
	pub fn is_cancelled(&self) -> bool {
		self.state.cancelled.get()
	}

	/// Whether the task ran.
	pub fn is_finished(&self) -> bool {
		self.state.finished.get()
	}

	/// Whether the task is still waiting to run.
	pub fn is_pending(&self) -> bool {
		!self.is_cancelled() && !self.is_finished()
	}

	/// Runs `task` unless the handle was cancelled, then marks it finished.
	///
	/// Scheduler backends call this from their timer callback.
	pub fn run(&self, task: Task) {
		if self.is_cancelled() || self.is_finished() {
			return;
		}
		self.state.finished.set(true);
		drop(self.state.canceller.borrow_mut().take());
		task();
	}
}

struct Pending {
	due: Duration,
	seq: u64,
	handle: TaskHandle,
	task: Task,
}

#[derive(Default)]
struct ManualInner {
	now: Cell<Duration>,
	next_seq: Cell<u64>,
	queue: RefCell<Vec<Pending>>,
}

/// A fake clock. Tasks fire only from [`ManualScheduler::advance`].
///
/// Tasks due at the same instant run in scheduling order. Tasks scheduled by a
/// running task are eligible within the same `advance` call if they fall due
/// before its target time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
	inner: Rc<ManualInner>,
}

impl ManualScheduler {
	/// Creates a clock at time zero with nothing queued.
	pub fn new() -> Self {
		Self::default()
	}

	/// Time elapsed since creation.
	pub fn now(&self) -> Duration {
		self.inner.now.get()
	}

	/// Number of queued tasks that have not been cancelled.
	pub fn pending(&self) -> usize {
		self.inner
			.queue
			.borrow()
			.iter()
			.filter(|p| p.handle.is_pending())
			.count()
	}

	/// Moves the clock forward by `by`, running every task that falls due.
	pub fn advance(&self, by: Duration) {
		let target = self.now() + by;
		while let Some(next) = self.pop_due(target) {
			self.inner.now.set(next.due);
			next.handle.run(next.task);
		}
		self.inner.now.set(target);
	}

	/// Shorthand for [`ManualScheduler::advance`] in milliseconds.
	pub fn advance_ms(&self, ms: u64) {
		self.advance(Duration::from_millis(ms));
	}

	/// Runs queued tasks until none remain, moving the clock as needed.
	pub fn run_until_idle(&self) {
		loop {
			let latest = self.inner.queue.borrow().iter().map(|p| p.due).max();
			match latest {
				Some(due) => self.advance(due.saturating_sub(self.now())),
				None => break,
			}
		}
	}

	fn pop_due(&self, target: Duration) -> Option<Pending> {
		let mut queue = self.inner.queue.borrow_mut();
		let index = queue
			.iter()
			.enumerate()
			.filter(|(_, p)| p.due <= target)
			.min_by_key(|(_, p)| (p.due, p.seq))
			.map(|(i, _)| i)?;
		Some(queue.swap_remove(index))
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		let handle = TaskHandle::new();
		let seq = self.inner.next_seq.get();
		self.inner.next_seq.set(seq + 1);
		self.inner.queue.borrow_mut().push(Pending {
			due: self.now() + delay,
			seq,
			handle: handle.clone(),
			task,
		});
		handle
	}
}

impl fmt::Debug for ManualScheduler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ManualScheduler")
			.field("now", &self.now())
			.field("queued", &self.inner.queue.borrow().len())
			.finish()
	}
}
