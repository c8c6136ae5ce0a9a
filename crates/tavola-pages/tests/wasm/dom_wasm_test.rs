//! DOM backend WASM tests
//!
//! Exercises the `web-sys` backend against a real browser document. Every
//! test works inside its own detached-then-attached container so tests do not
//! see each other's elements.
//!
//! **Run with**: `wasm-pack test --headless --chrome crates/tavola-pages`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use tavola_pages::dom::IntersectionOptions;
use tavola_pages::{Document, Element, Event, EventType, element};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container(doc: &Document) -> Element {
	element(doc, "div")
		.unwrap()
		.class("wasm-test-container")
		.append_to(&doc.body().unwrap())
		.unwrap()
}

// ============================================================================
// Attributes, classes and styles
// ============================================================================

#[wasm_bindgen_test]
fn test_attributes_and_classes() {
	let doc = Document::current().unwrap();
	let root = container(&doc);

	root.set_attribute("data-page", "home");
	assert_eq!(root.get_attribute("data-page").as_deref(), Some("home"));
	root.remove_attribute("data-page");
	assert!(!root.has_attribute("data-page"));

	root.add_class("active");
	assert!(root.has_class("active"));
	assert!(!root.toggle_class("active"));
	assert!(!root.has_class("active"));

	root.remove();
}

#[wasm_bindgen_test]
fn test_inline_styles() {
	let doc = Document::current().unwrap();
	let root = container(&doc);

	root.set_style("text-align", "right");
	assert_eq!(root.style("text-align"), "right");
	root.set_style("text-align", "");
	assert_eq!(root.style("text-align"), "");

	root.set_css_text("position: fixed; z-index: 10000;");
	assert_eq!(root.style("position"), "fixed");
	assert_eq!(root.style("z-index"), "10000");

	root.remove();
}

#[wasm_bindgen_test]
fn test_form_values_and_reset() {
	let doc = Document::current().unwrap();
	let root = container(&doc);
	let form = element(&doc, "form").unwrap().append_to(&root).unwrap();
	let input = element(&doc, "input")
		.unwrap()
		.attr("type", "email")
		.append_to(&form)
		.unwrap();

	assert_eq!(input.input_type(), "email");
	input.set_value("ada@example.com");
	assert_eq!(input.value(), "ada@example.com");

	form.reset_form();
	assert_eq!(input.value(), "");

	root.remove();
}

// ============================================================================
// Tree and selectors
// ============================================================================

#[wasm_bindgen_test]
fn test_tree_and_selectors() {
	let doc = Document::current().unwrap();
	let root = container(&doc);
	let item = element(&doc, "div")
		.unwrap()
		.class("menu-item")
		.append_to(&root)
		.unwrap();
	let title = element(&doc, "h4")
		.unwrap()
		.text("Margherita Pizza")
		.append_to(&item)
		.unwrap();

	assert_eq!(title.parent(), Some(item.clone()));
	assert!(root.contains(&title));
	assert!(!title.contains(&root));
	assert_eq!(root.children(), vec![item.clone()]);
	assert_eq!(root.query_selector(".menu-item h4"), Some(title.clone()));
	assert_eq!(root.query_selector_all("h4").len(), 1);
	assert_eq!(item.text_content(), "Margherita Pizza");

	item.remove();
	assert!(!title.is_connected());
	root.remove();
}

#[wasm_bindgen_test]
fn test_create_element_rejects_invalid_tag() {
	let doc = Document::current().unwrap();
	assert!(doc.create_element("not a tag").is_err());
}

// ============================================================================
// Events
// ============================================================================

#[wasm_bindgen_test]
fn test_listener_runs_until_handle_dropped() {
	let doc = Document::current().unwrap();
	let root = container(&doc);
	let clicks = Rc::new(Cell::new(0));

	let counter = clicks.clone();
	let handle = root
		.add_event_listener(EventType::Click, move |_| counter.set(counter.get() + 1))
		.unwrap();
	root.click();
	assert_eq!(clicks.get(), 1);

	drop(handle);
	root.click();
	assert_eq!(clicks.get(), 1);

	root.remove();
}

#[wasm_bindgen_test]
fn test_prevent_default_is_reported() {
	let doc = Document::current().unwrap();
	let root = container(&doc);
	let link = element(&doc, "a")
		.unwrap()
		.attr("href", "#nowhere")
		.append_to(&root)
		.unwrap();

	let _handle = root
		.add_event_listener(EventType::Click, |event: Event| event.prevent_default())
		.unwrap();

	// Clicks bubble from the link to the container.
	assert!(!link.click());

	root.remove();
}

#[wasm_bindgen_test]
fn test_key_down_carries_key_and_alt() {
	let event = Event::key_down("R", true);
	assert_eq!(event.key().as_deref(), Some("R"));
	assert!(event.alt_key());
	assert!(!Event::new(EventType::Click).alt_key());
}

// ============================================================================
// Scrolling and observers
// ============================================================================

#[wasm_bindgen_test]
fn test_scroll_into_view_does_not_throw() {
	let doc = Document::current().unwrap();
	let root = container(&doc);
	root.scroll_into_view_smooth();
	root.remove();
}

#[wasm_bindgen_test]
fn test_observer_is_created() {
	let doc = Document::current().unwrap();
	let root = container(&doc);
	let options = IntersectionOptions {
		threshold: 0.1,
		root_margin: "0px 0px -50px 0px".to_string(),
	};

	let handle = doc.observe_intersections(&[root.clone()], &options, |_| {});
	assert!(handle.is_ok());

	drop(handle);
	root.remove();
}

#[wasm_bindgen_test]
fn test_document_state() {
	let doc = Document::current().unwrap();
	assert!(!doc.is_loading());
	assert!(doc.root().is_some());
	assert!(doc.head().is_some());
}
