//! Hover prefetching of dropdown links.

use std::rc::Rc;

use super::PageContext;
use crate::builder::element;
use crate::dom::{self, Document, DomError, Element, EventHandle, EventType};
use crate::warn_log;

/// Whether `href` names another page worth prefetching.
pub fn is_prefetchable(href: &str) -> bool {
	!href.is_empty() && !href.starts_with('#')
}

/// Appends `<link rel="prefetch" href="url">` to `head`.
///
/// Repeated calls append repeated links.
pub fn prefetch(document: &Document, url: &str) -> Result<Option<Element>, DomError> {
	let Some(head) = document.head() else {
		return Ok(None);
	};
	let link = element(document, "link")?
		.attr("rel", "prefetch")
		.attr("href", url)
		.append_to(&head)?;
	Ok(Some(link))
}

pub(crate) fn bind(context: &Rc<PageContext>, handles: &mut Vec<EventHandle>) {
	for page in &context.config.prefetch_pages {
		let selector = format!(".dropdown[data-page=\"{page}\"]");
		let Some(dropdown) = context.document.query_selector(&selector) else {
			continue;
		};
		for link in dropdown.query_selector_all(".dropdown-content a") {
			let document = context.document.clone();
			let source = link.clone();
			dom::keep(
				handles,
				link.add_event_listener(EventType::MouseEnter, move |_| {
					let Some(href) = source.get_attribute("href") else {
						return;
					};
					if is_prefetchable(&href)
						&& let Err(err) = prefetch(&document, &href)
					{
						warn_log!("prefetch of {} failed: {}", href, err);
					}
				}),
			);
		}
	}
}
