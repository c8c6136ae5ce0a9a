//! Smooth scrolling for in-page anchors.

use std::rc::Rc;

use super::PageContext;
use crate::dom::{self, Document, EventHandle, EventType};

/// Anchors handled by the smooth scroller.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Scrolls to the element referenced by `href` (`#id`).
///
/// Returns whether a target was found. A bare `#` never matches.
pub fn scroll_to_fragment(document: &Document, href: &str) -> bool {
	let id = href.strip_prefix('#').unwrap_or(href);
	if id.is_empty() {
		return false;
	}
	match document.get_element_by_id(id) {
		Some(target) => {
			target.scroll_into_view_smooth();
			true
		}
		None => false,
	}
}

pub(crate) fn bind(context: &Rc<PageContext>, handles: &mut Vec<EventHandle>) {
	for anchor in context.document.query_selector_all(ANCHOR_SELECTOR) {
		let document = context.document.clone();
		let href = anchor.clone();
		dom::keep(
			handles,
			anchor.add_event_listener(EventType::Click, move |event| {
				event.prevent_default();
				if let Some(href) = href.get_attribute("href") {
					scroll_to_fragment(&document, &href);
				}
			}),
		);
	}
}
