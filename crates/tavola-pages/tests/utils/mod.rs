//! Shared fixtures for the native integration tests.
#![allow(dead_code)]

use std::rc::Rc;

use tavola_core::{ManualScheduler, MemoryStore, PreferenceStore, Scheduler, SiteConfig};
use tavola_pages::{Document, Element};

/// Appends a `tag` element with `attrs` (and optional text) to `parent`.
pub fn el(doc: &Document, parent: &Element, tag: &str, attrs: &[(&str, &str)]) -> Element {
	let element = doc.create_element(tag).unwrap();
	for (name, value) in attrs {
		element.set_attribute(name, value);
	}
	parent.append_child(&element).unwrap();
	element
}

/// Like [`el`] but also sets the text content.
pub fn text_el(
	doc: &Document,
	parent: &Element,
	tag: &str,
	attrs: &[(&str, &str)],
	text: &str,
) -> Element {
	let element = el(doc, parent, tag, attrs);
	element.set_text_content(text);
	element
}

/// A restaurant page resembling the stock templates.
pub struct Page {
	pub doc: Document,
	pub clock: ManualScheduler,
	pub store: MemoryStore,
	pub navbar: Element,
	pub menu_toggle: Element,
	pub menu_icon: Element,
	pub nav_links: Element,
	pub menu_anchor: Element,
	pub bare_anchor: Element,
	pub home_link: Element,
	pub home_fragment_link: Element,
	pub dashboard_link: Element,
	pub other_link: Element,
	pub hero: Element,
	pub menu_section: Element,
	pub section_content: Element,
	pub search: Element,
	pub pizza: Element,
	pub salad: Element,
	pub card: Element,
	pub card_content: Element,
	pub order_form: Element,
	pub name_input: Element,
	pub email_input: Element,
	pub phone_input: Element,
}

impl Page {
	pub fn new() -> Self {
		Self::with_store(MemoryStore::new())
	}

	pub fn with_store(store: MemoryStore) -> Self {
		let doc = Document::new();
		let body = doc.body().unwrap();

		let navbar = el(&doc, &body, "nav", &[("class", "navbar")]);
		let menu_toggle = el(&doc, &navbar, "button", &[("class", "mobile-menu-toggle")]);
		let menu_icon = el(&doc, &menu_toggle, "i", &[("class", "fas fa-bars")]);
		let nav_links = el(&doc, &navbar, "ul", &[("class", "nav-links")]);

		let li = el(&doc, &nav_links, "li", &[]);
		let menu_anchor = text_el(&doc, &li, "a", &[("href", "#menu")], "Menu");
		let li = el(&doc, &nav_links, "li", &[]);
		let bare_anchor = text_el(&doc, &li, "a", &[("href", "#")], "Top");

		let home = el(&doc, &nav_links, "li", &[("class", "dropdown"), ("data-page", "home")]);
		let content = el(&doc, &home, "div", &[("class", "dropdown-content")]);
		let home_link = text_el(&doc, &content, "a", &[("href", "home-2.html")], "Home 2");
		let home_fragment_link = text_el(&doc, &content, "a", &[("href", "#specials")], "Specials");

		let dash = el(&doc, &nav_links, "li", &[("class", "dropdown"), ("data-page", "dashboard")]);
		let content = el(&doc, &dash, "div", &[("class", "dropdown-content")]);
		let dashboard_link = text_el(&doc, &content, "a", &[("href", "dashboard.html")], "Admin");

		let other = el(&doc, &nav_links, "li", &[("class", "dropdown"), ("data-page", "pages")]);
		let content = el(&doc, &other, "div", &[("class", "dropdown-content")]);
		let other_link = text_el(&doc, &content, "a", &[("href", "about.html")], "About");

		let hero = el(&doc, &body, "div", &[("class", "hero-content")]);

		let menu_section = el(&doc, &body, "section", &[("id", "menu"), ("class", "section")]);
		let section_content = el(&doc, &menu_section, "div", &[("class", "section-content")]);
		let search = el(
			&doc,
			&section_content,
			"input",
			&[("class", "search-input"), ("placeholder", "Search the menu")],
		);
		let pizza = menu_item(&doc, &section_content, "Margherita Pizza", "Tomato, mozzarella, basil", "$12");
		let salad = menu_item(&doc, &section_content, "Caesar Salad", "Romaine, parmesan, croutons", "$9");

		let card = el(&doc, &body, "div", &[("class", "card")]);
		let card_content = el(&doc, &card, "div", &[("class", "card-content")]);

		let order_form = el(&doc, &body, "form", &[("id", "orderForm")]);
		let group = el(&doc, &order_form, "div", &[("class", "form-group")]);
		let name_input = el(&doc, &group, "input", &[("name", "name"), ("required", "")]);
		let group = el(&doc, &order_form, "div", &[("class", "form-group")]);
		let email_input = el(&doc, &group, "input", &[("type", "email"), ("name", "email")]);
		let group = el(&doc, &order_form, "div", &[("class", "form-group")]);
		let phone_input = el(&doc, &group, "input", &[("type", "tel"), ("name", "phone")]);

		Self {
			doc,
			clock: ManualScheduler::new(),
			store,
			navbar,
			menu_toggle,
			menu_icon,
			nav_links,
			menu_anchor,
			bare_anchor,
			home_link,
			home_fragment_link,
			dashboard_link,
			other_link,
			hero,
			menu_section,
			section_content,
			search,
			pizza,
			salad,
			card,
			card_content,
			order_form,
			name_input,
			email_input,
			phone_input,
		}
	}

	pub fn scheduler(&self) -> Rc<dyn Scheduler> {
		Rc::new(self.clock.clone())
	}

	pub fn preference_store(&self) -> Rc<dyn PreferenceStore> {
		Rc::new(self.store.clone())
	}

	pub fn config(&self) -> SiteConfig {
		SiteConfig::default()
	}

	/// Toast elements currently attached, in insertion order.
	pub fn toasts(&self) -> Vec<Element> {
		self.doc.query_selector_all(".notification")
	}

	pub fn toast_texts(&self) -> Vec<String> {
		self.toasts().iter().map(|t| t.text_content()).collect()
	}

	pub fn direction_toasts(&self) -> Vec<Element> {
		self.doc.query_selector_all(".direction-notification")
	}

	pub fn root_attr(&self, name: &str) -> Option<String> {
		self.doc.root().unwrap().get_attribute(name)
	}
}

fn menu_item(doc: &Document, parent: &Element, title: &str, description: &str, price: &str) -> Element {
	let item = el(doc, parent, "div", &[("class", "menu-item")]);
	text_el(doc, &item, "h4", &[], title);
	text_el(doc, &item, "p", &[], description);
	text_el(doc, &item, "span", &[("class", "menu-item-price")], price);
	text_el(doc, &item, "button", &[("class", "btn btn-primary")], "Add to Order");
	item
}
