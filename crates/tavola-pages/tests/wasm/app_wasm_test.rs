//! Controller WASM tests
//!
//! Runs the controllers against the browser with real timers and
//! `localStorage`. Timer assertions await slightly past the configured delay.
//!
//! **Run with**: `wasm-pack test --headless --chrome crates/tavola-pages`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use tavola_core::{Direction, MemoryStore, PreferenceStore, Scheduler, Severity, SiteConfig};
use tavola_pages::app::set_direction;
use tavola_pages::{
	BrowserScheduler, Document, Element, LayoutDirection, LocalStorage, PageInteractions, element,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container(doc: &Document) -> Element {
	element(doc, "div")
		.unwrap()
		.class("wasm-test-container")
		.append_to(&doc.body().unwrap())
		.unwrap()
}

fn fast_config() -> SiteConfig {
	let mut config = SiteConfig::default();
	config.storage_key = "tavola-wasm-test".to_string();
	config.timing.toast_lifetime_ms = 50;
	config.timing.toast_slide_in_ms = 10;
	config.timing.toast_slide_out_ms = 20;
	config.timing.direction_toast_ms = 30;
	config.timing.direction_fade_ms = 20;
	config.timing.toggle_pulse_ms = 10;
	config
}

// ============================================================================
// Platform seams
// ============================================================================

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
	let store = LocalStorage;
	store.save("tavola-wasm-store", "true").unwrap();
	assert_eq!(store.load("tavola-wasm-store").as_deref(), Some("true"));
	store.save("tavola-wasm-store", "false").unwrap();
	assert_eq!(store.load("tavola-wasm-store").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn test_set_direction_ignores_unknown_value() {
	assert!(!set_direction("sideways"));
}

#[wasm_bindgen_test]
async fn test_browser_scheduler_runs_task() {
	let fired = Rc::new(Cell::new(false));
	let flag = fired.clone();
	let handle = BrowserScheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));

	TimeoutFuture::new(60).await;
	assert!(fired.get());
	assert!(handle.is_finished());
}

#[wasm_bindgen_test]
async fn test_browser_scheduler_cancel_clears_timer() {
	let fired = Rc::new(Cell::new(false));
	let flag = fired.clone();
	let handle = BrowserScheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));

	handle.cancel();
	// The task closure is released as soon as the timer is cleared.
	assert_eq!(Rc::strong_count(&fired), 1);

	TimeoutFuture::new(60).await;
	assert!(!fired.get());
	assert!(!handle.is_finished());
}

// ============================================================================
// Toasts
// ============================================================================

#[wasm_bindgen_test]
async fn test_page_toast_is_removed_by_browser_timers() {
	let doc = Document::current().unwrap();
	let root = container(&doc);
	let controller = PageInteractions::mount(doc.clone(), Rc::new(BrowserScheduler), &fast_config());

	let toast = controller.notify("Saved", Severity::Success).unwrap();
	assert!(toast.element().is_connected());

	TimeoutFuture::new(150).await;
	assert!(!toast.element().is_connected());

	root.remove();
}

#[wasm_bindgen_test]
async fn test_dismiss_cancels_pending_timers() {
	let doc = Document::current().unwrap();
	let controller = PageInteractions::mount(doc.clone(), Rc::new(BrowserScheduler), &fast_config());

	let toast = controller.notify("Bye", Severity::Info).unwrap();
	toast.dismiss();
	assert!(!toast.element().is_connected());

	TimeoutFuture::new(150).await;
	assert!(!toast.element().is_connected());
}

// ============================================================================
// Layout direction
// ============================================================================

#[wasm_bindgen_test]
async fn test_toggle_updates_document_and_store() {
	let doc = Document::current().unwrap();
	let root = container(&doc);
	element(&doc, "ul")
		.unwrap()
		.class("nav-links")
		.append_to(&root)
		.unwrap();
	let store = MemoryStore::new();
	let direction = LayoutDirection::mount(
		doc.clone(),
		Rc::new(store.clone()),
		Rc::new(BrowserScheduler),
		&fast_config(),
	);
	let before = direction.current_direction();

	let after = direction.toggle();
	assert_eq!(after, before.toggled());
	let html = doc.root().unwrap();
	assert_eq!(html.get_attribute("dir").as_deref(), Some(after.as_str()));
	assert_eq!(html.get_attribute("lang").as_deref(), Some(after.lang()));
	assert_eq!(store.get("tavola-wasm-test").as_deref(), Some(after.to_stored()));
	assert!(doc.query_selector(".rtl-toggle").is_some());

	TimeoutFuture::new(150).await;
	assert!(doc.query_selector(".direction-notification").is_none());

	direction.set_direction(Direction::Ltr);
	assert_eq!(direction.current_direction(), Direction::Ltr);

	drop(direction);
	TimeoutFuture::new(150).await;
	root.remove();
}
