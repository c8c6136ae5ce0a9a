//! In-memory DOM backend (non-WASM targets).
//!
//! A reference-counted node tree with just enough behaviour for the site
//! layer: attributes, classes, inline styles, text, form values, selector
//! queries, bubbling event dispatch, smooth-scroll bookkeeping and simulated
//! intersection observation.
//!
//! Tests drive it through the `dispatch`/`click`/`simulate_intersection`
//! helpers, which have no `web-sys` counterpart.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use super::selector::SelectorList;
use super::{DomError, EventType, IntersectionOptions};

const DOCUMENT_NODE: &str = "#document";

fn next_id() -> u64 {
	static NEXT: AtomicU64 = AtomicU64::new(1);
	NEXT.fetch_add(1, Ordering::Relaxed)
}

type Handler = Rc<dyn Fn(Event)>;

struct Listener {
	id: u64,
	event: EventType,
	handler: Handler,
}

#[derive(Default)]
struct NodeData {
	tag: String,
	attributes: Vec<(String, String)>,
	style: Vec<(String, String)>,
	text: String,
	value: Option<String>,
	children: Vec<Element>,
	parent: Option<Weak<RefCell<NodeData>>>,
	listeners: Vec<Listener>,
	scrolled_into_view: bool,
}

/// An element of the in-memory tree. Clones refer to the same node.
#[derive(Clone)]
pub struct Element {
	node: Rc<RefCell<NodeData>>,
}

impl PartialEq for Element {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.node, &other.node)
	}
}

impl Eq for Element {}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let node = self.node.borrow();
		f.debug_struct("Element")
			.field("tag", &node.tag)
			.field("attributes", &node.attributes)
			.field("children", &node.children.len())
			.finish()
	}
}

impl Element {
	fn new(tag: &str) -> Self {
		Self {
			node: Rc::new(RefCell::new(NodeData {
				tag: tag.to_ascii_lowercase(),
				..NodeData::default()
			})),
		}
	}

	/// Lowercase tag name.
	pub fn tag_name(&self) -> String {
		self.node.borrow().tag.clone()
	}

	/// Returns an attribute value.
	pub fn get_attribute(&self, name: &str) -> Option<String> {
		let name = name.to_ascii_lowercase();
		self.node
			.borrow()
			.attributes
			.iter()
			.find(|(k, _)| *k == name)
			.map(|(_, v)| v.clone())
	}

	/// Sets an attribute value.
	pub fn set_attribute(&self, name: &str, value: &str) {
		let name = name.to_ascii_lowercase();
		let mut node = self.node.borrow_mut();
		match node.attributes.iter_mut().find(|(k, _)| *k == name) {
			Some((_, v)) => *v = value.to_string(),
			None => node.attributes.push((name, value.to_string())),
		}
	}

	/// Removes an attribute.
	pub fn remove_attribute(&self, name: &str) {
		let name = name.to_ascii_lowercase();
		self.node.borrow_mut().attributes.retain(|(k, _)| *k != name);
	}

	/// Whether the attribute is present.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.get_attribute(name).is_some()
	}

	fn classes(&self) -> Vec<String> {
		self.get_attribute("class")
			.map(|c| c.split_whitespace().map(str::to_string).collect())
			.unwrap_or_default()
	}

	fn set_classes(&self, classes: &[String]) {
		self.set_attribute("class", &classes.join(" "));
	}

	/// Whether the class list contains `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.classes().iter().any(|c| c == class)
	}

	/// Adds `class` to the class list.
	pub fn add_class(&self, class: &str) {
		let mut classes = self.classes();
		if !classes.iter().any(|c| c == class) {
			classes.push(class.to_string());
			self.set_classes(&classes);
		}
	}

	/// Removes `class` from the class list.
	pub fn remove_class(&self, class: &str) {
		let mut classes = self.classes();
		let before = classes.len();
		classes.retain(|c| c != class);
		if classes.len() != before {
			self.set_classes(&classes);
		}
	}

	/// Toggles `class`; returns whether it is now present.
	pub fn toggle_class(&self, class: &str) -> bool {
		if self.has_class(class) {
			self.remove_class(class);
			false
		} else {
			self.add_class(class);
			true
		}
	}

	/// Inline style value of `property`, or an empty string.
	pub fn style(&self, property: &str) -> String {
		self.node
			.borrow()
			.style
			.iter()
			.find(|(k, _)| k == property)
			.map(|(_, v)| v.clone())
			.unwrap_or_default()
	}

	/// Sets an inline style property. An empty value removes it.
	pub fn set_style(&self, property: &str, value: &str) {
		let mut node = self.node.borrow_mut();
		node.style.retain(|(k, _)| k != property);
		if !value.is_empty() {
			node.style.push((property.to_string(), value.to_string()));
		}
	}

	/// Replaces the whole inline style declaration.
	pub fn set_css_text(&self, css: &str) {
		let declarations = css
			.split(';')
			.filter_map(|decl| decl.split_once(':'))
			.map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
			.filter(|(k, v)| !k.is_empty() && !v.is_empty())
			.collect();
		self.node.borrow_mut().style = declarations;
	}

	/// Text content of the element and its descendants.
	pub fn text_content(&self) -> String {
		let node = self.node.borrow();
		let mut text = node.text.clone();
		for child in &node.children {
			text.push_str(&child.text_content());
		}
		text
	}

	/// Replaces the children with a text node.
	pub fn set_text_content(&self, text: &str) {
		let children = std::mem::take(&mut self.node.borrow_mut().children);
		for child in children {
			child.node.borrow_mut().parent = None;
		}
		self.node.borrow_mut().text = text.to_string();
	}

	/// Current value of a form control.
	///
	/// Falls back to the default value (the `value` attribute, or the text of
	/// a `textarea`) until [`Element::set_value`] is called.
	pub fn value(&self) -> String {
		if let Some(value) = self.node.borrow().value.clone() {
			return value;
		}
		if self.tag_name() == "textarea" {
			return self.text_content();
		}
		self.get_attribute("value").unwrap_or_default()
	}

	/// Sets the current value of a form control.
	pub fn set_value(&self, value: &str) {
		self.node.borrow_mut().value = Some(value.to_string());
	}

	/// The control type the way `HTMLInputElement.type` reports it.
	pub fn input_type(&self) -> String {
		match self.tag_name().as_str() {
			"input" => self
				.get_attribute("type")
				.map(|t| t.to_ascii_lowercase())
				.unwrap_or_else(|| "text".to_string()),
			"textarea" => "textarea".to_string(),
			"select" => "select-one".to_string(),
			_ => String::new(),
		}
	}

	/// Parent element, if attached.
	pub fn parent(&self) -> Option<Element> {
		let parent = self.node.borrow().parent.as_ref()?.upgrade()?;
		let parent = Element { node: parent };
		(parent.tag_name() != DOCUMENT_NODE).then_some(parent)
	}

	fn raw_parent(&self) -> Option<Element> {
		let parent = self.node.borrow().parent.as_ref()?.upgrade()?;
		Some(Element { node: parent })
	}

	/// Child elements in order.
	pub fn children(&self) -> Vec<Element> {
		self.node.borrow().children.clone()
	}

	/// Appends `child`, detaching it from its previous parent first.
	pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
		if child == self || child.contains(self) {
			return Err(DomError::Append("HierarchyRequestError".to_string()));
		}
		child.remove();
		child.node.borrow_mut().parent = Some(Rc::downgrade(&self.node));
		self.node.borrow_mut().children.push(child.clone());
		Ok(())
	}

	/// The element directly after this one under the same parent.
	pub fn next_element_sibling(&self) -> Option<Element> {
		let parent = self.raw_parent()?;
		let siblings = parent.node.borrow();
		let index = siblings.children.iter().position(|c| c == self)?;
		siblings.children.get(index + 1).cloned()
	}

	/// Inserts `sibling` directly after this element, detaching it first.
	pub fn insert_after(&self, sibling: &Element) -> Result<(), DomError> {
		if sibling == self || sibling.contains(self) {
			return Err(DomError::Append("HierarchyRequestError".to_string()));
		}
		let Some(parent) = self.raw_parent() else {
			return Err(DomError::Append("element has no parent".to_string()));
		};
		sibling.remove();
		sibling.node.borrow_mut().parent = Some(Rc::downgrade(&parent.node));
		let mut node = parent.node.borrow_mut();
		let index = node
			.children
			.iter()
			.position(|c| c == self)
			.map_or(node.children.len(), |i| i + 1);
		node.children.insert(index, sibling.clone());
		Ok(())
	}

	/// Whether `other` is this element or one of its descendants.
	pub fn contains(&self, other: &Element) -> bool {
		let mut current = Some(other.clone());
		while let Some(node) = current {
			if node == *self {
				return true;
			}
			current = node.raw_parent();
		}
		false
	}

	/// Detaches the element from its parent.
	pub fn remove(&self) {
		let Some(parent) = self.raw_parent() else {
			return;
		};
		parent.node.borrow_mut().children.retain(|c| c != self);
		self.node.borrow_mut().parent = None;
	}

	/// Whether the element is attached to a document.
	pub fn is_connected(&self) -> bool {
		let mut current = Some(self.clone());
		while let Some(node) = current {
			if node.tag_name() == DOCUMENT_NODE {
				return true;
			}
			current = node.raw_parent();
		}
		false
	}

	fn descendants(&self) -> Vec<Element> {
		let mut out = Vec::new();
		for child in self.children() {
			out.push(child.clone());
			out.extend(child.descendants());
		}
		out
	}

	/// First descendant matching `selector`.
	pub fn query_selector(&self, selector: &str) -> Option<Element> {
		let selector = SelectorList::parse(selector)?;
		self.descendants().into_iter().find(|e| selector.matches(e))
	}

	/// All descendants matching `selector`, in document order.
	pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
		let Some(selector) = SelectorList::parse(selector) else {
			return Vec::new();
		};
		self.descendants()
			.into_iter()
			.filter(|e| selector.matches(e))
			.collect()
	}

	/// Records a smooth scroll to the top of this element.
	pub fn scroll_into_view_smooth(&self) {
		self.node.borrow_mut().scrolled_into_view = true;
	}

	/// Whether [`Element::scroll_into_view_smooth`] was called.
	pub fn scrolled_into_view(&self) -> bool {
		self.node.borrow().scrolled_into_view
	}

	/// Restores every control of a form to its default value.
	pub fn reset_form(&self) {
		if self.tag_name() != "form" {
			return;
		}
		for control in self.query_selector_all("input, textarea, select") {
			control.node.borrow_mut().value = None;
		}
	}

	/// Attaches a listener; it stays attached while the handle lives.
	pub fn add_event_listener(
		&self,
		event: EventType,
		handler: impl Fn(Event) + 'static,
	) -> Result<EventHandle, DomError> {
		let id = next_id();
		self.node.borrow_mut().listeners.push(Listener {
			id,
			event,
			handler: Rc::new(handler),
		});
		Ok(EventHandle {
			node: Rc::downgrade(&self.node),
			id,
		})
	}

	/// Number of listeners currently attached to this element.
	pub fn listener_count(&self) -> usize {
		self.node.borrow().listeners.len()
	}

	fn handlers_for(&self, event: EventType) -> Vec<Handler> {
		self.node
			.borrow()
			.listeners
			.iter()
			.filter(|l| l.event == event)
			.map(|l| l.handler.clone())
			.collect()
	}

	/// Dispatches `event` at this element, bubbling when the type does.
	///
	/// Returns `false` if a listener called [`Event::prevent_default`].
	pub fn dispatch(&self, event: Event) -> bool {
		*event.inner.target.borrow_mut() = Some(self.clone());
		let mut current = Some(self.clone());
		while let Some(node) = current {
			for handler in node.handlers_for(event.inner.event) {
				handler(event.clone());
			}
			if !event.inner.event.bubbles() {
				break;
			}
			current = node.raw_parent();
		}
		!event.default_prevented()
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

/// Detaches its listener on drop.
pub struct EventHandle {
	node: Weak<RefCell<NodeData>>,
	id: u64,
}

impl fmt::Debug for EventHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventHandle").field("id", &self.id).finish()
	}
}

impl Drop for EventHandle {
	fn drop(&mut self) {
		if let Some(node) = self.node.upgrade() {
			let removed = {
				let mut node = node.borrow_mut();
				let index = node.listeners.iter().position(|l| l.id == self.id);
				index.map(|i| node.listeners.remove(i))
			};
			drop(removed);
		}
	}
}

struct EventInner {
	event: EventType,
	target: RefCell<Option<Element>>,
	default_prevented: Cell<bool>,
	key: Option<String>,
	alt_key: bool,
}

/// A dispatched event. Clones share the prevented flag.
#[derive(Clone)]
pub struct Event {
	inner: Rc<EventInner>,
}

impl fmt::Debug for Event {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Event")
			.field("type", &self.inner.event)
			.field("default_prevented", &self.default_prevented())
			.finish()
	}
}

impl Event {
	/// Creates an event of `event` type.
	pub fn new(event: EventType) -> Self {
		Self {
			inner: Rc::new(EventInner {
				event,
				target: RefCell::new(None),
				default_prevented: Cell::new(false),
				key: None,
				alt_key: false,
			}),
		}
	}

	/// Creates a `keydown` event.
	pub fn key_down(key: &str, alt_key: bool) -> Self {
		Self {
			inner: Rc::new(EventInner {
				event: EventType::KeyDown,
				target: RefCell::new(None),
				default_prevented: Cell::new(false),
				key: Some(key.to_string()),
				alt_key,
			}),
		}
	}

	/// Event type.
	pub fn event_type(&self) -> EventType {
		self.inner.event
	}

	/// Cancels the default action.
	pub fn prevent_default(&self) {
		self.inner.default_prevented.set(true);
	}

	/// Whether a listener cancelled the default action.
	pub fn default_prevented(&self) -> bool {
		self.inner.default_prevented.get()
	}

	/// Element the event was dispatched at.
	pub fn target(&self) -> Option<Element> {
		self.inner
			.target
			.borrow()
			.clone()
			.filter(|t| t.tag_name() != DOCUMENT_NODE)
	}

	/// `KeyboardEvent.key`, for keyboard events.
	pub fn key(&self) -> Option<String> {
		self.inner.key.clone()
	}

	/// Whether Alt was held.
	pub fn alt_key(&self) -> bool {
		self.inner.alt_key
	}
}

struct Observation {
	id: u64,
	options: IntersectionOptions,
	targets: RefCell<Vec<Element>>,
	on_enter: Box<dyn Fn(&Element)>,
}

struct DocumentInner {
	node: Element,
	observations: RefCell<Vec<Rc<Observation>>>,
}

/// An in-memory document: `#document > html > (head, body)`.
#[derive(Clone)]
pub struct Document {
	inner: Rc<DocumentInner>,
}

impl fmt::Debug for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Document")
			.field("observations", &self.inner.observations.borrow().len())
			.finish()
	}
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	/// Creates an empty document with `html`, `head` and `body`.
	pub fn new() -> Self {
		let node = Element::new(DOCUMENT_NODE);
		let html = Element::new("html");
		let head = Element::new("head");
		let body = Element::new("body");
		let attach = |parent: &Element, child: &Element| {
			child.node.borrow_mut().parent = Some(Rc::downgrade(&parent.node));
			parent.node.borrow_mut().children.push(child.clone());
		};
		attach(&html, &head);
		attach(&html, &body);
		attach(&node, &html);
		Self {
			inner: Rc::new(DocumentInner {
				node,
				observations: RefCell::new(Vec::new()),
			}),
		}
	}

	/// The `html` element.
	pub fn root(&self) -> Option<Element> {
		self.inner
			.node
			.children()
			.into_iter()
			.find(|e| e.tag_name() == "html")
	}

	/// The `head` element.
	pub fn head(&self) -> Option<Element> {
		self.root()?
			.children()
			.into_iter()
			.find(|e| e.tag_name() == "head")
	}

	/// The `body` element.
	pub fn body(&self) -> Option<Element> {
		self.root()?
			.children()
			.into_iter()
			.find(|e| e.tag_name() == "body")
	}

	/// Whether the document is still parsing. Always `false` here.
	pub fn is_loading(&self) -> bool {
		false
	}

	/// First element matching `selector`.
	pub fn query_selector(&self, selector: &str) -> Option<Element> {
		self.inner.node.query_selector(selector)
	}

	/// All elements matching `selector`, in document order.
	pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
		self.inner.node.query_selector_all(selector)
	}

	/// Element whose `id` attribute equals `id`.
	pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
		self.inner
			.node
			.descendants()
			.into_iter()
			.find(|e| e.get_attribute("id").as_deref() == Some(id))
	}

	/// Creates a detached element.
	pub fn create_element(&self, tag: &str) -> Result<Element, DomError> {
		if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
			return Err(DomError::CreateElement {
				tag: tag.to_string(),
				reason: "InvalidCharacterError".to_string(),
			});
		}
		Ok(Element::new(tag))
	}

	/// Attaches a document-level listener.
	pub fn add_event_listener(
		&self,
		event: EventType,
		handler: impl Fn(Event) + 'static,
	) -> Result<EventHandle, DomError> {
		self.inner.node.add_event_listener(event, handler)
	}

	/// Number of document-level listeners.
	pub fn listener_count(&self) -> usize {
		self.inner.node.listener_count()
	}

	/// Dispatches a `keydown` at the body (or the document if there is none).
	pub fn dispatch_key(&self, key: &str, alt_key: bool) -> bool {
		let target = self.body().unwrap_or_else(|| self.inner.node.clone());
		target.dispatch(Event::key_down(key, alt_key))
	}

	/// Calls `on_enter` the first time each target intersects the viewport.
	///
	/// Intersections are reported with [`Document::simulate_intersection`].
	pub fn observe_intersections(
		&self,
		targets: &[Element],
		options: &IntersectionOptions,
		on_enter: impl Fn(&Element) + 'static,
	) -> Result<ObserverHandle, DomError> {
		let id = next_id();
		self.inner
			.observations
			.borrow_mut()
			.push(Rc::new(Observation {
				id,
				options: options.clone(),
				targets: RefCell::new(targets.to_vec()),
				on_enter: Box::new(on_enter),
			}));
		Ok(ObserverHandle {
			document: Rc::downgrade(&self.inner),
			id,
		})
	}

	/// Reports that `element` entered (`true`) or left the viewport.
	pub fn simulate_intersection(&self, element: &Element, intersecting: bool) {
		if !intersecting {
			return;
		}
		let observations = self.inner.observations.borrow().clone();
		for observation in observations {
			let hit = {
				let mut targets = observation.targets.borrow_mut();
				let before = targets.len();
				targets.retain(|t| t != element);
				targets.len() != before
			};
			if hit {
				(observation.on_enter)(element);
			}
		}
	}

	/// Targets still waiting for their first intersection.
	pub fn observed_count(&self) -> usize {
		self.inner
			.observations
			.borrow()
			.iter()
			.map(|o| o.targets.borrow().len())
			.sum()
	}

	/// Options of every active observation.
	pub fn observation_options(&self) -> Vec<IntersectionOptions> {
		self.inner
			.observations
			.borrow()
			.iter()
			.map(|o| o.options.clone())
			.collect()
	}
}

/// Stops observing on drop.
pub struct ObserverHandle {
	document: Weak<DocumentInner>,
	id: u64,
}

impl fmt::Debug for ObserverHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ObserverHandle").field("id", &self.id).finish()
	}
}

impl Drop for ObserverHandle {
	fn drop(&mut self) {
		if let Some(document) = self.document.upgrade() {
			let removed = {
				let mut observations = document.observations.borrow_mut();
				let index = observations.iter().position(|o| o.id == self.id);
				index.map(|i| observations.remove(i))
			};
			drop(removed);
		}
	}
}
