//! Persistent key/value store abstraction.
//!
//! The browser build backs this with `localStorage`; tests and native builds
//! use [`MemoryStore`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Errors raised by a [`PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	/// The backing store could not be reached (no window, storage disabled).
	#[error("preference store is unavailable")]
	Unavailable,
	/// The store refused the write (quota exceeded, private mode, ...).
	#[error("failed to write '{key}': {reason}")]
	WriteRejected {
		/// Key being written.
		key: String,
		/// Reason reported by the backend.
		reason: String,
	},
}

/// A string key/value store that survives page reloads.
pub trait PreferenceStore {
	/// Reads the value stored under `key`.
	fn load(&self, key: &str) -> Option<String>;

	/// Writes `value` under `key`.
	fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
	fn load(&self, key: &str) -> Option<String> {
		(**self).load(key)
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
		(**self).save(key, value)
	}
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
	fn load(&self, key: &str) -> Option<String> {
		(**self).load(key)
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
		(**self).save(key, value)
	}
}

/// In-memory [`PreferenceStore`].
///
/// Clones share the same entries, so a test can keep one clone for
/// inspection while handing another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: Rc<RefCell<HashMap<String, String>>>,
	writes: Rc<Cell<usize>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store pre-populated with one entry.
	pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
		let store = Self::new();
		store.entries.borrow_mut().insert(key.into(), value.into());
		store
	}

	/// Returns the current value for `key`.
	pub fn get(&self, key: &str) -> Option<String> {
		self.entries.borrow().get(key).cloned()
	}

	/// Number of successful [`PreferenceStore::save`] calls so far.
	pub fn write_count(&self) -> usize {
		self.writes.get()
	}
}

impl PreferenceStore for MemoryStore {
	fn load(&self, key: &str) -> Option<String> {
		self.get(key)
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
		self.entries
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		self.writes.set(self.writes.get() + 1);
		Ok(())
	}
}
