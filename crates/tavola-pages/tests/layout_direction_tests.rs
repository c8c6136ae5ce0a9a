//! Integration tests for the layout direction controller.
#![cfg(not(target_arch = "wasm32"))]

mod utils;

use std::rc::Rc;

use rstest::rstest;
use tavola_core::{Direction, MemoryStore, PreferenceStore, Severity, SiteConfig, StoreError};
use tavola_pages::{App, Element, LayoutDirection};
use utils::Page;

fn mount(page: &Page) -> LayoutDirection {
	LayoutDirection::mount(
		page.doc.clone(),
		page.preference_store(),
		page.scheduler(),
		&page.config(),
	)
}

fn toggle_button(page: &Page) -> Element {
	page.doc.query_selector(".rtl-toggle").unwrap()
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
	fn load(&self, _key: &str) -> Option<String> {
		None
	}

	fn save(&self, key: &str, _value: &str) -> Result<(), StoreError> {
		Err(StoreError::WriteRejected {
			key: key.to_string(),
			reason: "quota exceeded".to_string(),
		})
	}
}

// ---------------------------------------------------------------------------
// Initial state
// ---------------------------------------------------------------------------

#[rstest]
fn test_stored_rtl_is_applied_silently() {
	let page = Page::with_store(MemoryStore::with_entry("isRTL", "true"));
	let direction = mount(&page);

	assert_eq!(direction.current_direction(), Direction::Rtl);
	assert_eq!(page.root_attr("dir").as_deref(), Some("rtl"));
	assert_eq!(page.root_attr("lang").as_deref(), Some("ar"));
	assert_eq!(toggle_button(&page).text_content(), "LTR");
	assert_eq!(
		page.search.get_attribute("data-original-placeholder").as_deref(),
		Some("Search the menu")
	);
	assert_eq!(page.store.write_count(), 0);
	assert!(page.direction_toasts().is_empty());
}

#[rstest]
#[case(None)]
#[case(Some("false"))]
#[case(Some("TRUE"))]
#[case(Some("yes"))]
fn test_anything_but_true_loads_ltr(#[case] stored: Option<&str>) {
	let store = match stored {
		Some(value) => MemoryStore::with_entry("isRTL", value),
		None => MemoryStore::new(),
	};
	let page = Page::with_store(store);
	let direction = mount(&page);

	assert_eq!(direction.current_direction(), Direction::Ltr);
	assert_eq!(page.root_attr("dir").as_deref(), Some("ltr"));
	assert_eq!(page.root_attr("lang").as_deref(), Some("en"));
	assert_eq!(toggle_button(&page).text_content(), "RTL");
}

#[rstest]
fn test_button_lives_in_navigation() {
	let page = Page::new();
	let _direction = mount(&page);

	let button = toggle_button(&page);
	let item = button.parent().unwrap();
	assert_eq!(item.tag_name(), "li");
	assert_eq!(item.parent(), Some(page.nav_links.clone()));
	assert_eq!(page.doc.query_selector_all(".rtl-toggle").len(), 1);
}

// ---------------------------------------------------------------------------
// Toggling
// ---------------------------------------------------------------------------

#[rstest]
fn test_toggle_to_rtl() {
	let page = Page::new();
	let direction = mount(&page);

	assert_eq!(direction.toggle(), Direction::Rtl);

	assert_eq!(page.root_attr("dir").as_deref(), Some("rtl"));
	assert_eq!(page.root_attr("lang").as_deref(), Some("ar"));
	assert_eq!(page.hero.style("text-align"), "right");
	assert_eq!(page.section_content.style("text-align"), "right");
	assert_eq!(page.navbar.style("direction"), "rtl");
	assert_eq!(page.order_form.style("direction"), "rtl");
	assert_eq!(page.name_input.style("text-align"), "right");
	assert_eq!(page.store.get("isRTL").as_deref(), Some("true"));

	let button = toggle_button(&page);
	assert_eq!(button.text_content(), "LTR");
	assert_eq!(button.style("transform"), "scale(1.1)");
	page.clock.advance_ms(200);
	assert_eq!(button.style("transform"), "scale(1)");
}

#[rstest]
fn test_toggle_twice_restores_layout() {
	let page = Page::new();
	let direction = mount(&page);

	direction.toggle();
	direction.toggle();

	assert_eq!(direction.current_direction(), Direction::Ltr);
	assert_eq!(page.root_attr("dir").as_deref(), Some("ltr"));
	assert_eq!(page.hero.style("text-align"), "center");
	assert_eq!(page.card_content.style("text-align"), "left");
	assert_eq!(page.store.get("isRTL").as_deref(), Some("false"));
	assert_eq!(page.search.get_attribute("placeholder").as_deref(), Some("Search the menu"));
	assert!(!page.search.has_attribute("data-original-placeholder"));
	assert_eq!(page.direction_toasts().len(), 2);
}

#[rstest]
fn test_set_direction_is_noop_when_unchanged() {
	let page = Page::with_store(MemoryStore::with_entry("isRTL", "true"));
	let direction = mount(&page);

	assert!(!direction.set_direction(Direction::Rtl));
	assert_eq!(page.store.write_count(), 0);
	assert!(page.direction_toasts().is_empty());

	assert!(direction.set_direction(Direction::Ltr));
	assert_eq!(direction.current_direction(), Direction::Ltr);
	assert_eq!(page.store.write_count(), 1);
}

#[rstest]
#[case(" RTL ", true, Direction::Rtl)]
#[case("ltr", false, Direction::Ltr)]
#[case("sideways", false, Direction::Ltr)]
#[case("", false, Direction::Ltr)]
fn test_set_direction_named(
	#[case] name: &str,
	#[case] changed: bool,
	#[case] expected: Direction,
) {
	let page = Page::new();
	let direction = mount(&page);

	assert_eq!(direction.set_direction_named(name), changed);
	assert_eq!(direction.current_direction(), expected);
	assert_eq!(page.store.write_count(), usize::from(changed));
	assert_eq!(page.direction_toasts().len(), usize::from(changed));
}

#[rstest]
fn test_button_click_toggles() {
	let page = Page::new();
	let direction = mount(&page);

	toggle_button(&page).click();
	assert_eq!(direction.current_direction(), Direction::Rtl);
	toggle_button(&page).click();
	assert_eq!(direction.current_direction(), Direction::Ltr);
}

#[rstest]
#[case("r", true, true)]
#[case("R", true, false)]
#[case("r", false, false)]
#[case("t", true, false)]
fn test_keyboard_shortcut(#[case] key: &str, #[case] alt: bool, #[case] toggles: bool) {
	let page = Page::new();
	let direction = mount(&page);

	let allowed = page.doc.dispatch_key(key, alt);

	let expected = if toggles { Direction::Rtl } else { Direction::Ltr };
	assert_eq!(direction.current_direction(), expected);
	assert_eq!(allowed, !toggles);
}

#[rstest]
fn test_toggle_closes_open_navigation() {
	let page = Page::new();
	let direction = mount(&page);
	page.nav_links.add_class("active");

	direction.toggle();
	assert!(!page.nav_links.has_class("active"));
}

#[rstest]
fn test_direction_toast_lifecycle() {
	let page = Page::new();
	let direction = mount(&page);
	direction.toggle();

	let toasts = page.direction_toasts();
	assert_eq!(toasts.len(), 1);
	assert_eq!(toasts[0].text_content(), "Layout switched to RTL (Right-to-Left)");
	let head = page.doc.head().unwrap();
	assert!(head.query_selector("style").is_some());

	page.clock.advance_ms(2000);
	assert_eq!(page.direction_toasts().len(), 1);
	assert!(!page.direction_toasts()[0].style("animation").is_empty());

	page.clock.advance_ms(300);
	assert!(page.direction_toasts().is_empty());

	direction.toggle();
	assert_eq!(head.query_selector_all("style").len(), 1);
}

#[rstest]
fn test_failing_store_still_toggles_layout() {
	let page = Page::new();
	let direction = LayoutDirection::mount(
		page.doc.clone(),
		Rc::new(BrokenStore),
		page.scheduler(),
		&page.config(),
	);

	assert_eq!(direction.toggle(), Direction::Rtl);
	assert_eq!(page.root_attr("dir").as_deref(), Some("rtl"));
	assert_eq!(page.direction_toasts().len(), 1);
}

#[rstest]
fn test_custom_storage_key() {
	let page = Page::new();
	let config = SiteConfig {
		storage_key: "tavola.rtl".to_string(),
		..SiteConfig::default()
	};
	let direction =
		LayoutDirection::mount(page.doc.clone(), page.preference_store(), page.scheduler(), &config);

	direction.toggle();
	assert_eq!(page.store.get("tavola.rtl").as_deref(), Some("true"));
	assert_eq!(page.store.get("isRTL"), None);
}

#[rstest]
fn test_dropping_controller_detaches_listeners() {
	let page = Page::new();
	let direction = mount(&page);
	assert_eq!(direction.listener_count(), 2);
	drop(direction);

	toggle_button(&page).click();
	page.doc.dispatch_key("r", true);
	assert_eq!(page.root_attr("dir").as_deref(), Some("ltr"));
}

// ---------------------------------------------------------------------------
// Whole application
// ---------------------------------------------------------------------------

#[rstest]
fn test_app_page_toasts_follow_direction() {
	let page = Page::new();
	let app = App::mount(
		page.doc.clone(),
		page.preference_store(),
		page.scheduler(),
		&page.config(),
	);

	let before = app.page().notify("hi", Severity::Info).unwrap();
	assert_eq!(before.element().style("right"), "20px");
	assert_eq!(before.element().style("left"), "auto");

	app.direction().toggle();
	let after = app.page().notify("marhaba", Severity::Info).unwrap();
	assert_eq!(after.element().style("left"), "20px");
	assert_eq!(after.element().style("right"), "auto");

	page.clock.run_until_idle();
	assert!(page.toasts().is_empty());
	assert!(page.direction_toasts().is_empty());
}

#[rstest]
fn test_app_toggle_does_not_disturb_page_behaviour() {
	let page = Page::new();
	let app = App::mount(
		page.doc.clone(),
		page.preference_store(),
		page.scheduler(),
		&page.config(),
	);

	page.menu_toggle.click();
	toggle_button(&page).click();
	assert_eq!(app.direction().current_direction(), Direction::Rtl);
	assert!(!page.nav_links.has_class("active"));

	page.search.type_text("salad");
	assert_eq!(page.pizza.style("display"), "none");
	assert_eq!(page.salad.style("display"), "flex");
}
