//! Layout direction controller
//!
//! [`LayoutDirection`] owns the persisted LTR/RTL preference and keeps the
//! document in step with it. It renders a `.rtl-toggle` button into the
//! navigation list and reacts to clicks on any element carrying that class
//! as well as to Alt+R.
//!
//! A toggle runs these steps in order:
//!
//! 1. root `dir`/`lang` and body font ([`apply::apply_root`])
//! 2. content alignment ([`apply::apply_text_alignment`])
//! 3. navigation direction and dropdown anchoring ([`apply::apply_navigation`])
//! 4. form direction, input alignment, placeholders ([`apply::apply_forms`],
//!    [`apply::apply_placeholders`])
//! 5. toggle button label, title and pulse
//! 6. persistence
//! 7. the centred direction toast
//! 8. closing the open navigation ([`apply::close_navigation`])

use std::rc::Rc;

use tavola_core::config::TimingConfig;
use tavola_core::{Direction, DirectionState, PreferenceStore, Scheduler, SiteConfig, layout};

use crate::builder::element;
use crate::dom::{self, Document, DomError, Element, EventHandle, EventType};
use crate::notify::Notifier;
use crate::{info_log, warn_log};

pub mod apply;

use apply::TOGGLE_CLASS;

struct DirectionController {
	document: Document,
	state: DirectionState<Rc<dyn PreferenceStore>>,
	notifier: Notifier,
	scheduler: Rc<dyn Scheduler>,
	timing: TimingConfig,
}

impl DirectionController {
	fn toggle(&self) -> Direction {
		let next = self.state.toggle();
		apply::apply_direction(&self.document, next);
		self.pulse_toggle_button(next);
		if let Err(err) = self.state.persist() {
			warn_log!("layout direction not saved: {}", err);
		}
		self.notifier.show_direction_change(next);
		apply::close_navigation(&self.document);
		info_log!("layout direction: {}", next);
		next
	}

	fn pulse_toggle_button(&self, direction: Direction) {
		let Some(button) = apply::label_toggle_button(&self.document, direction) else {
			return;
		};
		button.set_style("transform", "scale(1.1)");
		self.scheduler.schedule(
			self.timing.toggle_pulse(),
			Box::new(move || button.set_style("transform", "scale(1)")),
		);
	}
}

/// Creates the toggle button inside a new `li` of `.nav-links`, unless a
/// `.rtl-toggle` already exists. Returns the created button.
pub fn ensure_toggle_button(
	document: &Document,
	direction: Direction,
) -> Result<Option<Element>, DomError> {
	if document.query_selector(&format!(".{TOGGLE_CLASS}")).is_some() {
		return Ok(None);
	}
	let Some(nav) = document.query_selector(".nav-links") else {
		return Ok(None);
	};
	let button = element(document, "button")?
		.class(TOGGLE_CLASS)
		.attr("title", layout::toggle_title(direction))
		.text(layout::toggle_label(direction))
		.build();
	element(document, "li")?.child(&button)?.append_to(&nav)?;
	Ok(Some(button))
}

/// Owns the direction state and its listeners.
pub struct LayoutDirection {
	controller: Rc<DirectionController>,
	handles: Vec<EventHandle>,
}

impl std::fmt::Debug for LayoutDirection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LayoutDirection")
			.field("direction", &self.current_direction())
			.field("listeners", &self.handles.len())
			.finish()
	}
}

impl LayoutDirection {
	/// Loads the preference, renders the toggle, applies the initial layout
	/// and binds the click and Alt+R listeners.
	///
	/// Mounting persists nothing and shows no toast.
	pub fn mount(
		document: Document,
		store: Rc<dyn PreferenceStore>,
		scheduler: Rc<dyn Scheduler>,
		config: &SiteConfig,
	) -> Self {
		let state = DirectionState::load(store, config.storage_key.clone());
		let initial = state.current();

		if let Err(err) = ensure_toggle_button(&document, initial) {
			warn_log!("direction toggle not rendered: {}", err);
		}
		apply::apply_direction(&document, initial);

		let controller = Rc::new(DirectionController {
			notifier: Notifier::new(document.clone(), scheduler.clone(), config.timing.clone()),
			document,
			state,
			scheduler,
			timing: config.timing.clone(),
		});

		let mut handles = Vec::new();
		let ctrl = controller.clone();
		dom::keep(
			&mut handles,
			controller
				.document
				.add_event_listener(EventType::Click, move |event| {
					if event.target().is_some_and(|t| t.has_class(TOGGLE_CLASS)) {
						ctrl.toggle();
					}
				}),
		);
		let ctrl = controller.clone();
		dom::keep(
			&mut handles,
			controller
				.document
				.add_event_listener(EventType::KeyDown, move |event| {
					let shortcut = event.alt_key() && event.key().as_deref() == Some("r");
					if shortcut {
						event.prevent_default();
						ctrl.toggle();
					}
				}),
		);

		info_log!("layout direction mounted: {}", initial);
		Self {
			controller,
			handles,
		}
	}

	/// Flips the direction and runs every toggle step.
	pub fn toggle(&self) -> Direction {
		self.controller.toggle()
	}

	/// Switches to `direction` if it differs from the current one.
	///
	/// Returns whether a toggle happened.
	pub fn set_direction(&self, direction: Direction) -> bool {
		if self.current_direction() == direction {
			return false;
		}
		self.toggle();
		true
	}

	/// Like [`LayoutDirection::set_direction`] for a `"ltr"`/`"rtl"` string.
	///
	/// Unknown values are ignored with a warning and return `false`.
	pub fn set_direction_named(&self, name: &str) -> bool {
		match name.parse::<Direction>() {
			Ok(direction) => self.set_direction(direction),
			Err(err) => {
				warn_log!("{}", err);
				false
			}
		}
	}

	/// Current direction.
	pub fn current_direction(&self) -> Direction {
		self.controller.state.current()
	}

	/// Number of listeners currently bound.
	pub fn listener_count(&self) -> usize {
		self.handles.len()
	}
}
