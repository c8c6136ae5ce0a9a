//! DOM abstraction layer
//!
//! The controllers are written against [`Document`], [`Element`] and
//! [`Event`]. On `wasm32` these wrap `web-sys` handles; everywhere else they
//! are backed by a small in-memory tree with a selector matcher, event
//! dispatch and simulated intersection observation, so the controllers run
//! unchanged under `cargo test`.
//!
//! Both backends expose the same method names and signatures.
//!
//! ## RAII
//!
//! Listeners and intersection observers are owned by the returned
//! [`EventHandle`] / [`ObserverHandle`]. Dropping the handle detaches them.

use crate::warn_log;

#[cfg(not(target_arch = "wasm32"))]
mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod selector;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use memory::{Document, Element, Event, EventHandle, ObserverHandle};
#[cfg(target_arch = "wasm32")]
pub use web::{Document, Element, Event, EventHandle, ObserverHandle};
#[cfg(target_arch = "wasm32")]
pub(crate) use web::js_error_text;

/// DOM events the site layer listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// `click`
	Click,
	/// `submit`
	Submit,
	/// `input`
	Input,
	/// `blur`
	Blur,
	/// `mouseenter`
	MouseEnter,
	/// `keydown`
	KeyDown,
	/// `DOMContentLoaded`
	DomContentLoaded,
}

impl EventType {
	/// DOM event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::Submit => "submit",
			Self::Input => "input",
			Self::Blur => "blur",
			Self::MouseEnter => "mouseenter",
			Self::KeyDown => "keydown",
			Self::DomContentLoaded => "DOMContentLoaded",
		}
	}

	/// Whether the event propagates to ancestors.
	pub fn bubbles(&self) -> bool {
		!matches!(self, Self::Blur | Self::MouseEnter)
	}
}

/// Errors raised by DOM operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	/// No window or document is available.
	#[error("no document available")]
	NoDocument,
	/// `createElement` failed.
	#[error("failed to create <{tag}>: {reason}")]
	CreateElement {
		/// Requested tag.
		tag: String,
		/// Reason reported by the browser.
		reason: String,
	},
	/// `appendChild` failed.
	#[error("failed to append child: {0}")]
	Append(String),
	/// `addEventListener` failed.
	#[error("failed to attach '{event}' listener: {reason}")]
	Listener {
		/// Event name.
		event: &'static str,
		/// Reason reported by the browser.
		reason: String,
	},
	/// The intersection observer could not be created.
	#[error("intersection observer unavailable: {0}")]
	Observer(String),
}

/// Options for [`Document::observe_intersections`].
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionOptions {
	/// Visible fraction that counts as intersecting.
	pub threshold: f64,
	/// CSS margin applied to the viewport.
	pub root_margin: String,
}

impl Default for IntersectionOptions {
	fn default() -> Self {
		Self {
			threshold: 0.0,
			root_margin: "0px".to_string(),
		}
	}
}

/// Keeps a listener handle, logging attachment failures instead of raising.
pub(crate) fn keep(handles: &mut Vec<EventHandle>, result: Result<EventHandle, DomError>) {
	match result {
		Ok(handle) => handles.push(handle),
		Err(err) => warn_log!("{}", err),
	}
}
