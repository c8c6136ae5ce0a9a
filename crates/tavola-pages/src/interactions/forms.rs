//! Form validation.
//!
//! Every `form` is checked on submit; a failing form has its submit default
//! prevented. Controls re-validate on blur and drop their error on input.
//!
//! Each failing control gets its own `.error-message` inserted directly
//! after it, so controls sharing a parent keep separate messages.

use std::rc::Rc;

use tavola_core::validation::{self, FieldError, FieldKind};

use super::PageContext;
use crate::builder::element;
use crate::dom::{self, Document, Element, EventHandle, EventType};
use crate::warn_log;

/// Controls that take part in validation.
pub const CONTROL_SELECTOR: &str = "input, textarea, select";
/// Class of the inline error node.
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
/// Class added to an invalid control.
pub const ERROR_CLASS: &str = "error";
/// Colour of the error border and message.
pub const ERROR_COLOR: &str = "#FF4444";

/// Checks `field` without touching the DOM.
pub fn check_field(field: &Element) -> Result<(), FieldError> {
	validation::validate_value(
		&field.value(),
		FieldKind::from_input_type(&field.input_type()),
		field.has_attribute("required"),
	)
}

/// Validates one control, replacing any previous annotation.
pub fn validate_field(document: &Document, field: &Element) -> bool {
	clear_error(field);
	match check_field(field) {
		Ok(()) => true,
		Err(err) => {
			show_error(document, field, &err.to_string());
			false
		}
	}
}

/// Validates every control of `form`. All controls are annotated, not just
/// the first failure.
pub fn validate_form(document: &Document, form: &Element) -> bool {
	form.query_selector_all(CONTROL_SELECTOR)
		.iter()
		.fold(true, |valid, field| validate_field(document, field) && valid)
}

/// The error node attached to `field`, if any.
fn error_node(field: &Element) -> Option<Element> {
	field
		.next_element_sibling()
		.filter(|node| node.has_class(ERROR_MESSAGE_CLASS))
}

/// Marks `field` invalid and shows `message` right after it.
pub fn show_error(document: &Document, field: &Element, message: &str) {
	field.add_class(ERROR_CLASS);
	field.set_style("border-color", ERROR_COLOR);

	if let Some(node) = error_node(field) {
		node.set_text_content(message);
		return;
	}
	let created = element(document, "div").map(|b| {
		b.class(ERROR_MESSAGE_CLASS)
			.css(&format!(
				"color: {ERROR_COLOR}; font-size: 0.9rem; margin-top: 0.5rem;"
			))
			.text(message)
			.build()
	});
	if let Err(err) = created.and_then(|node| field.insert_after(&node)) {
		warn_log!("error message not shown: {}", err);
	}
}

/// Removes the error state of `field` and its message node.
pub fn clear_error(field: &Element) {
	field.remove_class(ERROR_CLASS);
	field.set_style("border-color", "");
	if let Some(node) = error_node(field) {
		node.remove();
	}
}

pub(crate) fn bind(context: &Rc<PageContext>, handles: &mut Vec<EventHandle>) {
	for form in context.document.query_selector_all("form") {
		let ctx = context.clone();
		let target = form.clone();
		dom::keep(
			handles,
			form.add_event_listener(EventType::Submit, move |event| {
				if !validate_form(&ctx.document, &target) {
					event.prevent_default();
				}
			}),
		);

		for field in form.query_selector_all(CONTROL_SELECTOR) {
			let ctx = context.clone();
			let target = field.clone();
			dom::keep(
				handles,
				field.add_event_listener(EventType::Blur, move |_| {
					validate_field(&ctx.document, &target);
				}),
			);

			let target = field.clone();
			dom::keep(
				handles,
				field.add_event_listener(EventType::Input, move |_| clear_error(&target)),
			);
		}
	}
}
