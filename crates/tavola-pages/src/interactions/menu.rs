//! Mobile menu toggle.

use std::rc::Rc;

use super::PageContext;
use crate::dom::{self, Element, EventHandle, EventType};

/// Selector of the hamburger button.
pub const TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
/// Selector of the navigation list.
pub const NAV_SELECTOR: &str = ".nav-links";
/// Class that opens the navigation list.
pub const OPEN_CLASS: &str = "active";

/// Resets the hamburger icon (its `i` child, or the toggle itself).
pub fn reset_icon(toggle: &Element) {
	let icon = toggle.query_selector("i").unwrap_or_else(|| toggle.clone());
	icon.set_style("transform", "rotate(0deg)");
}

pub(crate) fn bind(context: &Rc<PageContext>, handles: &mut Vec<EventHandle>) {
	let document = &context.document;
	let (Some(toggle), Some(nav)) = (
		document.query_selector(TOGGLE_SELECTOR),
		document.query_selector(NAV_SELECTOR),
	) else {
		return;
	};

	let menu = nav.clone();
	dom::keep(
		handles,
		toggle.add_event_listener(EventType::Click, move |_| {
			menu.toggle_class(OPEN_CLASS);
		}),
	);

	for link in nav.query_selector_all("a") {
		let nav = nav.clone();
		let toggle = toggle.clone();
		dom::keep(
			handles,
			link.add_event_listener(EventType::Click, move |_| {
				nav.remove_class(OPEN_CLASS);
				reset_icon(&toggle);
			}),
		);
	}
}
