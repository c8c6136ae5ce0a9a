//! Toast notifications
//!
//! [`Notifier`] inserts transient toasts into `body` and removes them through
//! the [`Scheduler`], so every timer it starts can be cancelled and
//! driven by a fake clock in tests.
//!
//! Page toasts read the root `dir` attribute twice: once on insertion to pick
//! the anchored edge, and again when sliding out so a toast that outlives a
//! direction change leaves towards the correct side.

use std::cell::RefCell;
use std::rc::Rc;

use tavola_core::config::TimingConfig;
use tavola_core::toast::{
	self, ANIMATION_KEYFRAMES, ANIMATION_STYLE_ID, DIRECTION_TOAST_CSS, DIRECTION_TOAST_EXIT,
	VISIBLE_TRANSFORM,
};
use tavola_core::{Direction, Scheduler, Severity, TaskHandle};

use crate::builder::element;
use crate::dom::{Document, DomError, Element};
use crate::warn_log;

/// Class of the centred direction-change toast.
pub const DIRECTION_TOAST_CLASS: &str = "direction-notification";

/// A toast on screen.
#[derive(Debug, Clone)]
pub struct Toast {
	element: Element,
	timers: Rc<RefCell<Vec<TaskHandle>>>,
}

impl Toast {
	/// The toast element.
	pub fn element(&self) -> &Element {
		&self.element
	}

	/// Cancels the pending timers and removes the toast immediately.
	pub fn dismiss(&self) {
		for timer in self.timers.borrow().iter() {
			timer.cancel();
		}
		self.element.remove();
	}

	fn track(&self, handle: TaskHandle) {
		self.timers.borrow_mut().push(handle);
	}
}

/// Shows page toasts and the direction-change toast.
#[derive(Clone)]
pub struct Notifier {
	document: Document,
	scheduler: Rc<dyn Scheduler>,
	timing: TimingConfig,
}

impl std::fmt::Debug for Notifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Notifier")
			.field("timing", &self.timing)
			.finish_non_exhaustive()
	}
}

impl Notifier {
	/// Creates a notifier over `document`.
	pub fn new(document: Document, scheduler: Rc<dyn Scheduler>, timing: TimingConfig) -> Self {
		Self {
			document,
			scheduler,
			timing,
		}
	}

	fn root_direction(&self) -> Direction {
		let dir = self.document.root().and_then(|r| r.get_attribute("dir"));
		Direction::from_dir_attribute(dir.as_deref())
	}

	/// Shows a page toast: slides in, holds, slides out, then is removed.
	///
	/// Returns `None` when there is no `body` or the toast could not be built.
	pub fn show(&self, message: &str, severity: Severity) -> Option<Toast> {
		let body = self.document.body()?;
		let direction = self.root_direction();
		let built = element(&self.document, "div").and_then(|b| {
			b.class(&severity.class_name())
				.css(&toast::toast_css(severity, direction))
				.text(message)
				.append_to(&body)
		});
		let toast = match built {
			Ok(element) => Toast {
				element,
				timers: Rc::new(RefCell::new(Vec::new())),
			},
			Err(err) => {
				warn_log!("toast not shown: {}", err);
				return None;
			}
		};

		let el = toast.element.clone();
		toast.track(self.scheduler.schedule(
			self.timing.toast_slide_in(),
			Box::new(move || el.set_style("transform", VISIBLE_TRANSFORM)),
		));

		let exit = {
			let notifier = self.clone();
			let toast = toast.clone();
			move || {
				let hidden = toast::hidden_transform(notifier.root_direction());
				toast.element.set_style("transform", hidden);
				let el = toast.element.clone();
				toast.track(
					notifier
						.scheduler
						.schedule(notifier.timing.toast_slide_out(), Box::new(move || el.remove())),
				);
			}
		};
		toast.track(
			self.scheduler
				.schedule(self.timing.toast_lifetime(), Box::new(exit)),
		);

		Some(toast)
	}

	/// Shows the centred toast announcing a switch to `direction`.
	pub fn show_direction_change(&self, direction: Direction) -> Option<Toast> {
		if let Err(err) = self.ensure_animation_styles() {
			warn_log!("toast animations unavailable: {}", err);
		}
		let body = self.document.body()?;
		let built = element(&self.document, "div").and_then(|b| {
			b.class(DIRECTION_TOAST_CLASS)
				.css(DIRECTION_TOAST_CSS)
				.text(toast::direction_message(direction))
				.append_to(&body)
		});
		let toast = match built {
			Ok(element) => Toast {
				element,
				timers: Rc::new(RefCell::new(Vec::new())),
			},
			Err(err) => {
				warn_log!("direction toast not shown: {}", err);
				return None;
			}
		};

		let exit = {
			let scheduler = self.scheduler.clone();
			let fade = self.timing.direction_fade();
			let toast = toast.clone();
			move || {
				toast.element.set_style("animation", DIRECTION_TOAST_EXIT);
				let el = toast.element.clone();
				toast.track(scheduler.schedule(fade, Box::new(move || el.remove())));
			}
		};
		toast.track(
			self.scheduler
				.schedule(self.timing.direction_toast(), Box::new(exit)),
		);

		Some(toast)
	}

	/// Injects the keyframes block into `head` unless it is already there.
	fn ensure_animation_styles(&self) -> Result<(), DomError> {
		if self.document.get_element_by_id(ANIMATION_STYLE_ID).is_some() {
			return Ok(());
		}
		let Some(head) = self.document.head() else {
			return Ok(());
		};
		element(&self.document, "style")?
			.id(ANIMATION_STYLE_ID)
			.text(ANIMATION_KEYFRAMES)
			.append_to(&head)?;
		Ok(())
	}
}
