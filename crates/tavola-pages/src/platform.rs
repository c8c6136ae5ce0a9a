//! Browser implementations of the core seams.
//!
//! - [`BrowserScheduler`]: timers through `gloo-timers`
//! - [`LocalStorage`]: preferences in `window.localStorage`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use tavola_core::schedule::Task;
use tavola_core::{PreferenceStore, Scheduler, StoreError, TaskHandle};

use crate::dom::js_error_text;

/// Schedules tasks with `setTimeout`.
///
/// Cancelling a [`TaskHandle`] clears the browser timer and frees its
/// callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		let handle = TaskHandle::new();
		let runner = handle.clone();
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

		let slot: Rc<RefCell<Option<Timeout>>> = Rc::default();
		let pending = slot.clone();
		let timeout = Timeout::new(millis, move || {
			// Released once the task returns.
			let fired = pending.borrow_mut().take();
			runner.run(task);
			drop(fired);
		});
		*slot.borrow_mut() = Some(timeout);
		handle.on_cancel(move || {
			slot.borrow_mut().take();
		});
		handle
	}
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
	fn storage() -> Option<web_sys::Storage> {
		web_sys::window()?.local_storage().ok().flatten()
	}
}

impl PreferenceStore for LocalStorage {
	fn load(&self, key: &str) -> Option<String> {
		Self::storage()?.get_item(key).ok().flatten()
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
		let storage = Self::storage().ok_or(StoreError::Unavailable)?;
		storage
			.set_item(key, value)
			.map_err(|e| StoreError::WriteRejected {
				key: key.to_string(),
				reason: js_error_text(&e),
			})
	}
}
