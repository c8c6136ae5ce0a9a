//! Applying a layout direction to the document.
//!
//! Each function handles one category of elements and skips silently when
//! its targets are absent.

use tavola_core::Direction;
use tavola_core::layout;

use crate::dom::{Document, Element};

/// Class of the direction toggle button.
pub const TOGGLE_CLASS: &str = "rtl-toggle";
/// Attribute holding a placeholder stashed while in RTL.
pub const ORIGINAL_PLACEHOLDER_ATTR: &str = "data-original-placeholder";

/// Applies every layout step for `direction`.
pub fn apply_direction(document: &Document, direction: Direction) {
	apply_root(document, direction);
	apply_text_alignment(document, direction);
	apply_navigation(document, direction);
	apply_forms(document, direction);
	apply_placeholders(document, direction);
}

/// Root `dir`/`lang` and the body font stack.
pub fn apply_root(document: &Document, direction: Direction) {
	if let Some(root) = document.root() {
		root.set_attribute("dir", direction.as_str());
		root.set_attribute("lang", direction.lang());
	}
	if let Some(body) = document.body() {
		body.set_style("font-family", layout::font_stack(direction));
	}
}

/// Text alignment of the content containers.
pub fn apply_text_alignment(document: &Document, direction: Direction) {
	for element in document.query_selector_all(".hero-content, .section-content, .card-content") {
		let is_hero = element.has_class("hero-content");
		element.set_style("text-align", layout::content_text_align(direction, is_hero));
	}
}

/// Navigation direction and dropdown anchoring.
pub fn apply_navigation(document: &Document, direction: Direction) {
	for element in document.query_selector_all(".navbar, .nav-links, .dropdown-content") {
		element.set_style("direction", direction.as_str());
	}
	let (left, right) = layout::dropdown_anchor(direction);
	for dropdown in document.query_selector_all(".dropdown-content") {
		dropdown.set_style("right", right);
		dropdown.set_style("left", left);
	}
}

/// Form direction and input text alignment.
pub fn apply_forms(document: &Document, direction: Direction) {
	for element in document.query_selector_all("form, .form-container") {
		element.set_style("direction", direction.as_str());
	}
	let align = layout::input_text_align(direction);
	for input in document.query_selector_all("input, textarea, select") {
		input.set_style("text-align", align);
	}
}

/// Stashes placeholders in RTL and restores them in LTR.
pub fn apply_placeholders(document: &Document, direction: Direction) {
	match direction {
		Direction::Rtl => {
			for input in document.query_selector_all("input[placeholder]") {
				if input.has_attribute(ORIGINAL_PLACEHOLDER_ATTR) {
					continue;
				}
				if let Some(placeholder) = input.get_attribute("placeholder") {
					input.set_attribute(ORIGINAL_PLACEHOLDER_ATTR, &placeholder);
				}
			}
		}
		Direction::Ltr => {
			for input in document.query_selector_all("input[data-original-placeholder]") {
				if let Some(original) = input.get_attribute(ORIGINAL_PLACEHOLDER_ATTR) {
					input.set_attribute("placeholder", &original);
				}
				input.remove_attribute(ORIGINAL_PLACEHOLDER_ATTR);
			}
		}
	}
}

/// Updates the toggle button's label and title; returns the button.
pub fn label_toggle_button(document: &Document, direction: Direction) -> Option<Element> {
	let button = document.query_selector(&format!(".{TOGGLE_CLASS}"))?;
	button.set_text_content(layout::toggle_label(direction));
	button.set_attribute("title", layout::toggle_title(direction));
	Some(button)
}

/// Closes any open navigation menu.
pub fn close_navigation(document: &Document) {
	for menu in document.query_selector_all(".nav-links.open, .nav-links.active, .navbar.open, .navbar.active")
	{
		menu.remove_class("open");
		menu.remove_class("active");
	}
	if let Some(hamburger) = document.query_selector(".hamburger.active") {
		hamburger.remove_class("active");
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use rstest::rstest;

	fn add(document: &Document, parent: &Element, tag: &str, class: &str) -> Element {
		let el = document.create_element(tag).unwrap();
		if !class.is_empty() {
			el.set_attribute("class", class);
		}
		parent.append_child(&el).unwrap();
		el
	}

	#[rstest]
	#[case(Direction::Rtl, "rtl", "ar")]
	#[case(Direction::Ltr, "ltr", "en")]
	fn test_apply_root(#[case] direction: Direction, #[case] dir: &str, #[case] lang: &str) {
		let doc = Document::new();
		apply_root(&doc, direction);
		let root = doc.root().unwrap();
		assert_eq!(root.get_attribute("dir").as_deref(), Some(dir));
		assert_eq!(root.get_attribute("lang").as_deref(), Some(lang));
		assert_eq!(
			doc.body().unwrap().style("font-family"),
			layout::font_stack(direction)
		);
	}

	#[rstest]
	fn test_text_alignment_centres_hero_only_in_ltr() {
		let doc = Document::new();
		let body = doc.body().unwrap();
		let hero = add(&doc, &body, "div", "hero-content");
		let card = add(&doc, &body, "div", "card-content");

		apply_text_alignment(&doc, Direction::Ltr);
		assert_eq!(hero.style("text-align"), "center");
		assert_eq!(card.style("text-align"), "left");

		apply_text_alignment(&doc, Direction::Rtl);
		assert_eq!(hero.style("text-align"), "right");
		assert_eq!(card.style("text-align"), "right");
	}

	#[rstest]
	fn test_navigation_anchors_dropdowns() {
		let doc = Document::new();
		let body = doc.body().unwrap();
		let nav = add(&doc, &body, "nav", "navbar");
		let dropdown = add(&doc, &nav, "div", "dropdown-content");

		apply_navigation(&doc, Direction::Rtl);
		assert_eq!(nav.style("direction"), "rtl");
		assert_eq!(dropdown.style("right"), "0");
		assert_eq!(dropdown.style("left"), "auto");

		apply_navigation(&doc, Direction::Ltr);
		assert_eq!(dropdown.style("direction"), "ltr");
		assert_eq!(dropdown.style("left"), "0");
		assert_eq!(dropdown.style("right"), "auto");
	}

	#[rstest]
	fn test_forms_align_inputs() {
		let doc = Document::new();
		let body = doc.body().unwrap();
		let form = add(&doc, &body, "form", "");
		let input = add(&doc, &form, "input", "");
		let select = add(&doc, &form, "select", "");

		apply_forms(&doc, Direction::Rtl);
		assert_eq!(form.style("direction"), "rtl");
		assert_eq!(input.style("text-align"), "right");
		assert_eq!(select.style("text-align"), "right");
	}

	#[rstest]
	fn test_placeholders_round_trip() {
		let doc = Document::new();
		let input = add(&doc, &doc.body().unwrap(), "input", "");
		input.set_attribute("placeholder", "Your name");

		apply_placeholders(&doc, Direction::Rtl);
		assert_eq!(
			input.get_attribute(ORIGINAL_PLACEHOLDER_ATTR).as_deref(),
			Some("Your name")
		);

		input.set_attribute("placeholder", "changed");
		apply_placeholders(&doc, Direction::Ltr);
		assert_eq!(input.get_attribute("placeholder").as_deref(), Some("Your name"));
		assert!(!input.has_attribute(ORIGINAL_PLACEHOLDER_ATTR));
	}

	#[rstest]
	fn test_close_navigation() {
		let doc = Document::new();
		let body = doc.body().unwrap();
		let nav = add(&doc, &body, "nav", "navbar open");
		let links = add(&doc, &nav, "ul", "nav-links active");
		let burger = add(&doc, &nav, "button", "hamburger active");

		close_navigation(&doc);
		assert!(!nav.has_class("open"));
		assert!(!links.has_class("active"));
		assert!(!burger.has_class("active"));
		assert!(links.has_class("nav-links"));
	}

	#[rstest]
	fn test_label_without_button_is_noop() {
		let doc = Document::new();
		assert!(label_toggle_button(&doc, Direction::Rtl).is_none());
	}
}
