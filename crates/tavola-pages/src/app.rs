//! Application entry point
//!
//! [`App`] mounts both controllers against one document. On `wasm32` the
//! module also provides the `#[wasm_bindgen(start)]` hook, which mounts once
//! the DOM is parsed, and the JS functions `toggleDirection`, `setDirection`
//! and `currentDirection`.

use std::rc::Rc;

use tavola_core::config::CONFIG_ELEMENT_ID;
use tavola_core::{PreferenceStore, Scheduler, SiteConfig};

use crate::direction::LayoutDirection;
use crate::dom::Document;
use crate::interactions::PageInteractions;
use crate::warn_log;

/// Both controllers, mounted against the same document.
#[derive(Debug)]
pub struct App {
	page: PageInteractions,
	direction: LayoutDirection,
}

impl App {
	/// Mounts the page interactions, then the layout direction controller.
	pub fn mount(
		document: Document,
		store: Rc<dyn PreferenceStore>,
		scheduler: Rc<dyn Scheduler>,
		config: &SiteConfig,
	) -> Self {
		let page = PageInteractions::mount(document.clone(), scheduler.clone(), config);
		let direction = LayoutDirection::mount(document, store, scheduler, config);
		Self { page, direction }
	}

	/// The page interaction controller.
	pub fn page(&self) -> &PageInteractions {
		&self.page
	}

	/// The layout direction controller.
	pub fn direction(&self) -> &LayoutDirection {
		&self.direction
	}
}

/// Reads `script#tavola-config`, falling back to defaults when it is absent
/// or invalid.
pub fn load_config(document: &Document) -> SiteConfig {
	let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
		return SiteConfig::default();
	};
	match SiteConfig::from_json(&block.text_content()) {
		Ok(config) => config,
		Err(err) => {
			warn_log!("{}; using defaults", err);
			SiteConfig::default()
		}
	}
}

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::RefCell;
	use std::rc::Rc;

	use wasm_bindgen::prelude::*;

	use super::{App, load_config};
	use crate::dom::{Document, EventHandle, EventType};
	use crate::platform::{BrowserScheduler, LocalStorage};
	use crate::{error_log, warn_log};

	thread_local! {
		static APP: RefCell<Option<App>> = const { RefCell::new(None) };
		static DEFERRED: RefCell<Option<EventHandle>> = const { RefCell::new(None) };
	}

	fn mount(document: Document) {
		APP.with(|slot| {
			if slot.borrow().is_some() {
				return;
			}
			let config = load_config(&document);
			let app = App::mount(
				document,
				Rc::new(LocalStorage),
				Rc::new(BrowserScheduler),
				&config,
			);
			*slot.borrow_mut() = Some(app);
		});
	}

	fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
		APP.with(|slot| slot.borrow().as_ref().map(f))
	}

	#[wasm_bindgen(start)]
	pub fn start() {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		let document = match Document::current() {
			Ok(document) => document,
			Err(err) => {
				error_log!("tavola not started: {}", err);
				return;
			}
		};

		if !document.is_loading() {
			mount(document);
			return;
		}

		let target = document.clone();
		match document.add_event_listener(EventType::DomContentLoaded, move |_| mount(target.clone())) {
			Ok(handle) => DEFERRED.with(|slot| *slot.borrow_mut() = Some(handle)),
			Err(err) => {
				warn_log!("{}; mounting immediately", err);
				mount(document);
			}
		}
	}

	/// Toggles the layout direction; returns the new one (`"ltr"`/`"rtl"`).
	#[wasm_bindgen(js_name = toggleDirection)]
	pub fn toggle_direction() -> Option<String> {
		with_app(|app| app.direction().toggle().as_str().to_string())
	}

	/// Switches to `direction` (`"ltr"` or `"rtl"`) if it differs from the
	/// current one. Returns whether anything changed; other values are
	/// ignored.
	#[wasm_bindgen(js_name = setDirection)]
	pub fn set_direction(direction: &str) -> bool {
		with_app(|app| app.direction().set_direction_named(direction)).unwrap_or(false)
	}

	/// Current layout direction, or `undefined` before mounting.
	#[wasm_bindgen(js_name = currentDirection)]
	pub fn current_direction() -> Option<String> {
		with_app(|app| app.direction().current_direction().as_str().to_string())
	}
}

#[cfg(target_arch = "wasm32")]
pub use browser::{current_direction, set_direction, start, toggle_direction};
