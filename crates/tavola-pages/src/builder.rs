//! Element builder
//!
//! A small fluent API over [`Element`] for the nodes the site layer creates:
//! toasts, error messages, the toggle button, prefetch links and the
//! keyframes style block.
//!
//! ```ignore
//! let toast = element(&document, "div")?
//!     .class("notification notification-success")
//!     .css("position: fixed; top: 100px;")
//!     .text("Saved")
//!     .build();
//! ```

use crate::dom::{Document, DomError, Element};

/// Creates a builder for a new `tag` element.
pub fn element(document: &Document, tag: &str) -> Result<ElementBuilder, DomError> {
	Ok(ElementBuilder::new(document.create_element(tag)?))
}

/// Fluent element builder.
#[derive(Debug)]
pub struct ElementBuilder {
	element: Element,
}

impl ElementBuilder {
	/// Wraps an existing element.
	pub fn new(element: Element) -> Self {
		Self { element }
	}

	/// Sets the `class` attribute. Later calls overwrite earlier ones.
	pub fn class(self, class: &str) -> Self {
		self.element.set_attribute("class", class);
		self
	}

	/// Sets the `id` attribute.
	pub fn id(self, id: &str) -> Self {
		self.element.set_attribute("id", id);
		self
	}

	/// Sets an arbitrary attribute.
	pub fn attr(self, name: &str, value: &str) -> Self {
		self.element.set_attribute(name, value);
		self
	}

	/// Replaces the children with text.
	pub fn text(self, text: &str) -> Self {
		self.element.set_text_content(text);
		self
	}

	/// Replaces the inline style declaration.
	pub fn css(self, css: &str) -> Self {
		self.element.set_css_text(css);
		self
	}

	/// Appends a child element.
	pub fn child(self, child: &Element) -> Result<Self, DomError> {
		self.element.append_child(child)?;
		Ok(self)
	}

	/// Finishes building.
	pub fn build(self) -> Element {
		self.element
	}

	/// Appends the element to `parent` and returns it.
	pub fn append_to(self, parent: &Element) -> Result<Element, DomError> {
		parent.append_child(&self.element)?;
		Ok(self.element)
	}
}
