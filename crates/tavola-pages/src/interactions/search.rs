//! Menu search.

use std::rc::Rc;

use tavola_core::search::matches_query;

use super::PageContext;
use crate::dom::{self, Document, EventHandle, EventType};

/// Shows the `.menu-item`s whose title or description contains `query`
/// (case-insensitive) and hides the rest. Returns how many remain visible.
pub fn search_menu(document: &Document, query: &str) -> usize {
	let mut visible = 0;
	for item in document.query_selector_all(".menu-item") {
		let title = item
			.query_selector("h4")
			.map(|h| h.text_content())
			.unwrap_or_default();
		let description = item.query_selector("p").map(|p| p.text_content());
		if matches_query(query, &title, description.as_deref()) {
			item.set_style("display", "flex");
			visible += 1;
		} else {
			item.set_style("display", "none");
		}
	}
	visible
}

pub(crate) fn bind(context: &Rc<PageContext>, handles: &mut Vec<EventHandle>) {
	let settings = &context.config.search;
	if !settings.enabled {
		return;
	}
	let Some(input) = context.document.query_selector(&settings.input_selector) else {
		return;
	};
	let document = context.document.clone();
	let source = input.clone();
	dom::keep(
		handles,
		input.add_event_listener(EventType::Input, move |_| {
			search_menu(&document, &source.value());
		}),
	);
}
