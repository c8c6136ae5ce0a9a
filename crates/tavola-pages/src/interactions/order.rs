//! Simulated order submission and add-to-order feedback.
//!
//! Nothing leaves the page: the order is "processed" by a timer and menu
//! selections only produce a toast. The order flow runs on every submit of
//! `#orderForm`, next to validation rather than behind it.

use std::rc::Rc;

use tavola_core::Severity;

use super::PageContext;
use crate::dom::{self, Element, EventHandle, EventType};
use crate::info_log;

/// Id of the order form.
pub const ORDER_FORM_ID: &str = "orderForm";
/// Shown as soon as the order form is submitted.
pub const PROCESSING_MESSAGE: &str = "Processing your order...";
/// Shown once the simulated processing finishes.
pub const PLACED_MESSAGE: &str =
	"Order placed successfully! You will receive a confirmation shortly.";
/// Tint of a menu item right after it was added.
pub const ADDED_HIGHLIGHT: &str = "#E8F5E8";

fn submit_order(context: &Rc<PageContext>, form: &Element) {
	context.notifier.show(PROCESSING_MESSAGE, Severity::Info);

	let ctx = context.clone();
	let form = form.clone();
	context.scheduler.schedule(
		context.config.timing.order_processing(),
		Box::new(move || {
			ctx.notifier.show(PLACED_MESSAGE, Severity::Success);
			form.reset_form();
			info_log!("order placed");
		}),
	);
}

fn add_to_order(context: &Rc<PageContext>, item: &Element) {
	let Some(title) = item.query_selector("h4") else {
		return;
	};
	let name = title.text_content().trim().to_string();
	let price = item
		.query_selector(".menu-item-price")
		.map(|p| p.text_content().trim().to_string())
		.unwrap_or_default();

	item.set_style("background", ADDED_HIGHLIGHT);
	let tinted = item.clone();
	context.scheduler.schedule(
		context.config.timing.add_highlight(),
		Box::new(move || tinted.set_style("background", "")),
	);

	context
		.notifier
		.show(&format!("{name} added to your order!"), Severity::Success);
	info_log!("added to order: {} ({})", name, price);
}

pub(crate) fn bind(context: &Rc<PageContext>, handles: &mut Vec<EventHandle>) {
	if let Some(form) = context.document.get_element_by_id(ORDER_FORM_ID) {
		let ctx = context.clone();
		let target = form.clone();
		dom::keep(
			handles,
			form.add_event_listener(EventType::Submit, move |event| {
				event.prevent_default();
				submit_order(&ctx, &target);
			}),
		);
	}

	for item in context.document.query_selector_all(".menu-item") {
		let Some(button) = item.query_selector(".btn") else {
			continue;
		};
		let ctx = context.clone();
		dom::keep(
			handles,
			button.add_event_listener(EventType::Click, move |event| {
				event.prevent_default();
				add_to_order(&ctx, &item);
			}),
		);
	}
}
