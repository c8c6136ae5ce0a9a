//! `web-sys` DOM backend (WASM targets).

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{DomError, EventType, IntersectionOptions};

/// Best-effort message from a thrown JS value.
pub(crate) fn js_error_text(err: &JsValue) -> String {
	if let Some(error) = err.dyn_ref::<js_sys::Error>() {
		return String::from(error.message());
	}
	err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// A DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	inner: web_sys::Element,
}

impl From<web_sys::Element> for Element {
	fn from(inner: web_sys::Element) -> Self {
		Self { inner }
	}
}

impl Element {
	/// Underlying `web_sys::Element`.
	pub fn as_web_sys(&self) -> &web_sys::Element {
		&self.inner
	}

	fn html(&self) -> Option<&web_sys::HtmlElement> {
		self.inner.dyn_ref::<web_sys::HtmlElement>()
	}

	/// Lowercase tag name.
	pub fn tag_name(&self) -> String {
		self.inner.tag_name().to_ascii_lowercase()
	}

	/// Returns an attribute value.
	pub fn get_attribute(&self, name: &str) -> Option<String> {
		self.inner.get_attribute(name)
	}

	/// Sets an attribute value.
	pub fn set_attribute(&self, name: &str, value: &str) {
		let _ = self.inner.set_attribute(name, value);
	}

	/// Removes an attribute.
	pub fn remove_attribute(&self, name: &str) {
		let _ = self.inner.remove_attribute(name);
	}

	/// Whether the attribute is present.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.inner.has_attribute(name)
	}

	/// Whether the class list contains `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.inner.class_list().contains(class)
	}

	/// Adds `class` to the class list.
	pub fn add_class(&self, class: &str) {
		let _ = self.inner.class_list().add_1(class);
	}

	/// Removes `class` from the class list.
	pub fn remove_class(&self, class: &str) {
		let _ = self.inner.class_list().remove_1(class);
	}

	/// Toggles `class`; returns whether it is now present.
	pub fn toggle_class(&self, class: &str) -> bool {
		self.inner.class_list().toggle(class).unwrap_or(false)
	}

	/// Inline style value of `property`, or an empty string.
	pub fn style(&self, property: &str) -> String {
		self.html()
			.and_then(|el| el.style().get_property_value(property).ok())
			.unwrap_or_default()
	}

	/// Sets an inline style property. An empty value removes it.
	pub fn set_style(&self, property: &str, value: &str) {
		let Some(el) = self.html() else {
			return;
		};
		let style = el.style();
		if value.is_empty() {
			let _ = style.remove_property(property);
		} else {
			let _ = style.set_property(property, value);
		}
	}

	/// Replaces the whole inline style declaration.
	pub fn set_css_text(&self, css: &str) {
		if let Some(el) = self.html() {
			el.style().set_css_text(css);
		}
	}

	/// Text content of the element and its descendants.
	pub fn text_content(&self) -> String {
		self.inner.text_content().unwrap_or_default()
	}

	/// Replaces the children with a text node.
	pub fn set_text_content(&self, text: &str) {
		self.inner.set_text_content(Some(text));
	}

	/// Current value of a form control.
	pub fn value(&self) -> String {
		if let Some(input) = self.inner.dyn_ref::<web_sys::HtmlInputElement>() {
			return input.value();
		}
		if let Some(area) = self.inner.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			return area.value();
		}
		if let Some(select) = self.inner.dyn_ref::<web_sys::HtmlSelectElement>() {
			return select.value();
		}
		self.get_attribute("value").unwrap_or_default()
	}

	/// Sets the current value of a form control.
	pub fn set_value(&self, value: &str) {
		if let Some(input) = self.inner.dyn_ref::<web_sys::HtmlInputElement>() {
			input.set_value(value);
		} else if let Some(area) = self.inner.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			area.set_value(value);
		} else if let Some(select) = self.inner.dyn_ref::<web_sys::HtmlSelectElement>() {
			select.set_value(value);
		}
	}

	/// The control type as reported by the element's `type` property.
	pub fn input_type(&self) -> String {
		if let Some(input) = self.inner.dyn_ref::<web_sys::HtmlInputElement>() {
			return input.type_().to_ascii_lowercase();
		}
		if let Some(area) = self.inner.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			return area.type_();
		}
		if let Some(select) = self.inner.dyn_ref::<web_sys::HtmlSelectElement>() {
			return select.type_();
		}
		String::new()
	}

	/// Parent element, if attached.
	pub fn parent(&self) -> Option<Element> {
		self.inner.parent_element().map(Element::from)
	}

	/// Child elements in order.
	pub fn children(&self) -> Vec<Element> {
		let children = self.inner.children();
		(0..children.length())
			.filter_map(|i| children.item(i))
			.map(Element::from)
			.collect()
	}

	/// Appends `child`, detaching it from its previous parent first.
	pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
		self.inner
			.append_child(&child.inner)
			.map(|_| ())
			.map_err(|e| DomError::Append(js_error_text(&e)))
	}

	/// The element directly after this one under the same parent.
	pub fn next_element_sibling(&self) -> Option<Element> {
		self.inner.next_element_sibling().map(Element::from)
	}

	/// Inserts `sibling` directly after this element, detaching it first.
	pub fn insert_after(&self, sibling: &Element) -> Result<(), DomError> {
		if self.inner.parent_node().is_none() {
			return Err(DomError::Append("element has no parent".to_string()));
		}
		let node: &web_sys::Node = &sibling.inner;
		self.inner
			.after_with_node_1(node)
			.map_err(|e| DomError::Append(js_error_text(&e)))
	}

	/// Whether `other` is this element or one of its descendants.
	pub fn contains(&self, other: &Element) -> bool {
		let node: &web_sys::Node = &other.inner;
		self.inner.contains(Some(node))
	}

	/// Detaches the element from its parent.
	pub fn remove(&self) {
		self.inner.remove();
	}

	/// Whether the element is attached to a document.
	pub fn is_connected(&self) -> bool {
		self.inner.is_connected()
	}

	/// First descendant matching `selector`.
	pub fn query_selector(&self, selector: &str) -> Option<Element> {
		self.inner
			.query_selector(selector)
			.ok()
			.flatten()
			.map(Element::from)
	}

	/// All descendants matching `selector`, in document order.
	pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
		self.inner
			.query_selector_all(selector)
			.map(|list| node_list_elements(&list))
			.unwrap_or_default()
	}

	/// Smoothly scrolls the element to the top of the viewport.
	pub fn scroll_into_view_smooth(&self) {
		let options = web_sys::ScrollIntoViewOptions::new();
		options.set_behavior(web_sys::ScrollBehavior::Smooth);
		options.set_block(web_sys::ScrollLogicalPosition::Start);
		self.inner
			.scroll_into_view_with_scroll_into_view_options(&options);
	}

	/// Restores every control of a form to its default value.
	pub fn reset_form(&self) {
		if let Some(form) = self.inner.dyn_ref::<web_sys::HtmlFormElement>() {
			form.reset();
		}
	}

	/// Attaches a listener; it stays attached while the handle lives.
	pub fn add_event_listener(
		&self,
		event: EventType,
		handler: impl Fn(Event) + 'static,
	) -> Result<EventHandle, DomError> {
		EventHandle::attach(self.inner.clone().into(), event, handler)
	}

	/// Dispatches `event` at this element.
	///
	/// Returns `false` if a listener called [`Event::prevent_default`].
	pub fn dispatch(&self, event: Event) -> bool {
		self.inner.dispatch_event(&event.inner).unwrap_or(true)
	}

	/// Dispatches a `click`.
	pub fn click(&self) -> bool {
		self.dispatch(Event::new(EventType::Click))
	}

	/// Dispatches a `submit`.
	pub fn submit(&self) -> bool {
		self.dispatch(Event::new(EventType::Submit))
	}

	/// Sets the value and dispatches `input`, like typing into the field.
	pub fn type_text(&self, value: &str) {
		self.set_value(value);
		self.dispatch(Event::new(EventType::Input));
	}

	/// Dispatches `blur`.
	pub fn blur(&self) {
		self.dispatch(Event::new(EventType::Blur));
	}

	/// Dispatches `mouseenter`.
	pub fn hover(&self) {
		self.dispatch(Event::new(EventType::MouseEnter));
	}
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
		.map(Element::from)
		.collect()
}

/// Detaches its listener on drop.
pub struct EventHandle {
	target: web_sys::EventTarget,
	event: EventType,
	closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl std::fmt::Debug for EventHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventHandle")
			.field("event", &self.event)
			.finish()
	}
}

impl EventHandle {
	fn attach(
		target: web_sys::EventTarget,
		event: EventType,
		handler: impl Fn(Event) + 'static,
	) -> Result<Self, DomError> {
		let closure = Closure::wrap(Box::new(move |raw: web_sys::Event| {
			handler(Event { inner: raw });
		}) as Box<dyn FnMut(_)>);
		target
			.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
			.map_err(|e| DomError::Listener {
				event: event.as_str(),
				reason: js_error_text(&e),
			})?;
		Ok(Self {
			target,
			event,
			closure,
		})
	}
}

impl Drop for EventHandle {
	fn drop(&mut self) {
		let _ = self.target.remove_event_listener_with_callback(
			self.event.as_str(),
			self.closure.as_ref().unchecked_ref(),
		);
	}
}

/// A dispatched event.
#[derive(Debug, Clone)]
pub struct Event {
	inner: web_sys::Event,
}

impl Event {
	/// Creates a cancelable event of `event` type.
	pub fn new(event: EventType) -> Self {
		let init = web_sys::EventInit::new();
		init.set_bubbles(event.bubbles());
		init.set_cancelable(true);
		let inner = web_sys::Event::new_with_event_init_dict(event.as_str(), &init)
			.unwrap_or_else(|_| web_sys::Event::new(event.as_str()).unwrap_throw());
		Self { inner }
	}

	/// Creates a `keydown` event.
	pub fn key_down(key: &str, alt_key: bool) -> Self {
		let init = web_sys::KeyboardEventInit::new();
		init.set_key(key);
		init.set_alt_key(alt_key);
		init.set_bubbles(true);
		init.set_cancelable(true);
		let inner =
			web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
				.map(web_sys::Event::from)
				.unwrap_or_else(|_| web_sys::Event::new("keydown").unwrap_throw());
		Self { inner }
	}

	/// Cancels the default action.
	pub fn prevent_default(&self) {
		self.inner.prevent_default();
	}

	/// Whether a listener cancelled the default action.
	pub fn default_prevented(&self) -> bool {
		self.inner.default_prevented()
	}

	/// Element the event was dispatched at.
	pub fn target(&self) -> Option<Element> {
		self.inner
			.target()
			.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
			.map(Element::from)
	}

	/// `KeyboardEvent.key`, for keyboard events.
	pub fn key(&self) -> Option<String> {
		self.inner
			.dyn_ref::<web_sys::KeyboardEvent>()
			.map(web_sys::KeyboardEvent::key)
	}

	/// Whether Alt was held.
	pub fn alt_key(&self) -> bool {
		self.inner
			.dyn_ref::<web_sys::KeyboardEvent>()
			.is_some_and(web_sys::KeyboardEvent::alt_key)
	}
}

/// The browser document.
#[derive(Debug, Clone)]
pub struct Document {
	inner: web_sys::Document,
}

impl Document {
	/// The document of the current window.
	pub fn current() -> Result<Self, DomError> {
		let inner = web_sys::window()
			.and_then(|w| w.document())
			.ok_or(DomError::NoDocument)?;
		Ok(Self { inner })
	}

	/// The `html` element.
	pub fn root(&self) -> Option<Element> {
		self.inner.document_element().map(Element::from)
	}

	/// The `head` element.
	pub fn head(&self) -> Option<Element> {
		self.inner
			.head()
			.map(|h| Element::from(web_sys::Element::from(h)))
	}

	/// The `body` element.
	pub fn body(&self) -> Option<Element> {
		self.inner
			.body()
			.map(|b| Element::from(web_sys::Element::from(b)))
	}

	/// Whether the document is still parsing.
	pub fn is_loading(&self) -> bool {
		self.inner.ready_state() == "loading"
	}

	/// First element matching `selector`.
	pub fn query_selector(&self, selector: &str) -> Option<Element> {
		self.inner
			.query_selector(selector)
			.ok()
			.flatten()
			.map(Element::from)
	}

	/// All elements matching `selector`, in document order.
	pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
		self.inner
			.query_selector_all(selector)
			.map(|list| node_list_elements(&list))
			.unwrap_or_default()
	}

	/// Element whose `id` attribute equals `id`.
	pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
		self.inner.get_element_by_id(id).map(Element::from)
	}

	/// Creates a detached element.
	pub fn create_element(&self, tag: &str) -> Result<Element, DomError> {
		self.inner
			.create_element(tag)
			.map(Element::from)
			.map_err(|e| DomError::CreateElement {
				tag: tag.to_string(),
				reason: js_error_text(&e),
			})
	}

	/// Attaches a document-level listener.
	pub fn add_event_listener(
		&self,
		event: EventType,
		handler: impl Fn(Event) + 'static,
	) -> Result<EventHandle, DomError> {
		EventHandle::attach(self.inner.clone().into(), event, handler)
	}

	/// Dispatches a `keydown` at the body.
	pub fn dispatch_key(&self, key: &str, alt_key: bool) -> bool {
		match self.body() {
			Some(body) => body.dispatch(Event::key_down(key, alt_key)),
			None => true,
		}
	}

	/// Calls `on_enter` the first time each target intersects the viewport.
	pub fn observe_intersections(
		&self,
		targets: &[Element],
		options: &IntersectionOptions,
		on_enter: impl Fn(&Element) + 'static,
	) -> Result<ObserverHandle, DomError> {
		let closure = Closure::wrap(Box::new(
			move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
				for entry in entries.iter() {
					let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
					if !entry.is_intersecting() {
						continue;
					}
					let target = entry.target();
					observer.unobserve(&target);
					on_enter(&Element::from(target));
				}
			},
		)
			as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

		let init = web_sys::IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(options.threshold));
		init.set_root_margin(&options.root_margin);

		let observer = web_sys::IntersectionObserver::new_with_options(
			closure.as_ref().unchecked_ref(),
			&init,
		)
		.map_err(|e| DomError::Observer(js_error_text(&e)))?;
		for target in targets {
			observer.observe(&target.inner);
		}
		Ok(ObserverHandle {
			observer,
			_closure: closure,
		})
	}
}

/// Disconnects its observer on drop.
pub struct ObserverHandle {
	observer: web_sys::IntersectionObserver,
	_closure: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl std::fmt::Debug for ObserverHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ObserverHandle").finish_non_exhaustive()
	}
}

impl Drop for ObserverHandle {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}
