//! Reveal-on-scroll.
//!
//! Targets are hidden only once the observer exists, so a browser without
//! `IntersectionObserver` leaves them visible.

use std::rc::Rc;

use super::PageContext;
use crate::dom::{Element, IntersectionOptions, ObserverHandle};
use crate::warn_log;

/// Puts `element` in its pre-reveal state.
pub fn hide(element: &Element) {
	element.set_style("opacity", "0");
	element.set_style("transform", "translateY(20px)");
	element.set_style("transition", "opacity 0.6s ease, transform 0.6s ease");
}

/// Shows `element`. Leaving the viewport later does not hide it again.
pub fn reveal(element: &Element) {
	element.set_style("opacity", "1");
	element.set_style("transform", "translateY(0)");
}

pub(crate) fn bind(context: &Rc<PageContext>) -> Option<ObserverHandle> {
	let settings = &context.config.reveal;
	let targets = context.document.query_selector_all(&settings.selector);
	if targets.is_empty() {
		return None;
	}

	let options = IntersectionOptions {
		threshold: settings.threshold,
		root_margin: settings.root_margin.clone(),
	};
	match context
		.document
		.observe_intersections(&targets, &options, reveal)
	{
		Ok(observer) => {
			targets.iter().for_each(hide);
			Some(observer)
		}
		Err(err) => {
			warn_log!("reveal-on-scroll disabled: {}", err);
			None
		}
	}
}
