//! Page interaction controller
//!
//! [`PageInteractions::mount`] binds every page behaviour once:
//!
//! 1. mobile menu toggle ([`menu`])
//! 2. form validation ([`forms`])
//! 3. smooth scrolling for in-page anchors ([`scroll`])
//! 4. reveal-on-scroll ([`reveal`])
//! 5. the simulated order flow and add-to-order feedback ([`order`])
//! 6. hover prefetching of dropdown links ([`prefetch`])
//! 7. menu search ([`search`])
//!
//! Listeners live as long as the returned [`PageInteractions`].

use std::rc::Rc;

use tavola_core::{Scheduler, Severity, SiteConfig};

use crate::dom::{Document, Element, EventHandle, ObserverHandle};
use crate::info_log;
use crate::notify::{Notifier, Toast};

pub mod forms;
pub mod menu;
pub mod order;
pub mod prefetch;
pub mod reveal;
pub mod scroll;
pub mod search;

/// Shared state captured by the page listeners.
pub(crate) struct PageContext {
	pub(crate) document: Document,
	pub(crate) notifier: Notifier,
	pub(crate) scheduler: Rc<dyn Scheduler>,
	pub(crate) config: SiteConfig,
}

/// Owns the page listeners and the reveal observer.
pub struct PageInteractions {
	context: Rc<PageContext>,
	handles: Vec<EventHandle>,
	observer: Option<ObserverHandle>,
}

impl std::fmt::Debug for PageInteractions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PageInteractions")
			.field("listeners", &self.handles.len())
			.field("observing", &self.observer.is_some())
			.finish()
	}
}

impl PageInteractions {
	/// Binds every page behaviour against `document`.
	///
	/// Missing elements disable only the behaviour that needs them.
	pub fn mount(document: Document, scheduler: Rc<dyn Scheduler>, config: &SiteConfig) -> Self {
		let notifier = Notifier::new(document.clone(), scheduler.clone(), config.timing.clone());
		let context = Rc::new(PageContext {
			document,
			notifier,
			scheduler,
			config: config.clone(),
		});

		let mut handles = Vec::new();
		menu::bind(&context, &mut handles);
		forms::bind(&context, &mut handles);
		scroll::bind(&context, &mut handles);
		let observer = reveal::bind(&context);
		order::bind(&context, &mut handles);
		prefetch::bind(&context, &mut handles);
		search::bind(&context, &mut handles);

		info_log!("page interactions mounted ({} listeners)", handles.len());
		Self {
			context,
			handles,
			observer,
		}
	}

	/// Shows a page toast.
	pub fn notify(&self, message: &str, severity: Severity) -> Option<Toast> {
		self.context.notifier.show(message, severity)
	}

	/// Filters `.menu-item`s by `query`; returns how many remain visible.
	pub fn search_menu(&self, query: &str) -> usize {
		search::search_menu(&self.context.document, query)
	}

	/// Validates every control of `form`, annotating failures inline.
	pub fn validate_form(&self, form: &Element) -> bool {
		forms::validate_form(&self.context.document, form)
	}

	/// Number of listeners currently bound.
	pub fn listener_count(&self) -> usize {
		self.handles.len()
	}

	/// Whether reveal targets are being observed.
	pub fn is_observing(&self) -> bool {
		self.observer.is_some()
	}
}
