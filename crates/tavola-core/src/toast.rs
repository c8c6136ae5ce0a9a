//! Toast notification styling.
//!
//! Pure rules for how a toast looks in each severity and direction. The DOM
//! side lives in `tavola_pages::notify`.

use std::fmt;

use crate::direction::Direction;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
	/// Neutral progress message (blue).
	#[default]
	Info,
	/// Completed action (green).
	Success,
	/// Failed action (red).
	Error,
}

impl Severity {
	/// Lowercase name used in the `notification-<name>` class.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Info => "info",
			Self::Success => "success",
			Self::Error => "error",
		}
	}

	/// Background colour of the toast.
	pub fn background(self) -> &'static str {
		match self {
			Self::Info => "#2196F3",
			Self::Success => "#4CAF50",
			Self::Error => "#F44336",
		}
	}

	/// Space-separated class list for the toast element.
	pub fn class_name(self) -> String {
		format!("notification notification-{}", self.as_str())
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Transform that keeps a toast off-screen on the anchored edge.
pub fn hidden_transform(direction: Direction) -> &'static str {
	match direction {
		Direction::Ltr => "translateX(100%)",
		Direction::Rtl => "translateX(-100%)",
	}
}

/// Transform of a fully visible toast.
pub const VISIBLE_TRANSFORM: &str = "translateX(0)";

/// Inline CSS for a page toast anchored for `direction`.
pub fn toast_css(severity: Severity, direction: Direction) -> String {
	let (left, right) = match direction {
		Direction::Ltr => ("auto", "20px"),
		Direction::Rtl => ("20px", "auto"),
	};
	format!(
		"position: fixed; top: 100px; left: {left}; right: {right}; \
		 background: {}; color: white; padding: 1rem 2rem; border-radius: 8px; \
		 box-shadow: 0 4px 20px rgba(0,0,0,0.15); z-index: 10000; \
		 transform: {}; transition: transform 0.3s ease;",
		severity.background(),
		hidden_transform(direction),
	)
}

/// Inline CSS for the centred direction-change toast.
pub const DIRECTION_TOAST_CSS: &str = "position: fixed; top: 50%; left: 50%; \
	transform: translate(-50%, -50%); background: rgba(255, 107, 53, 0.95); \
	color: white; padding: 1rem 2rem; border-radius: 12px; font-weight: bold; \
	z-index: 10001; box-shadow: 0 8px 30px rgba(0,0,0,0.3); \
	backdrop-filter: blur(10px); animation: fadeInScale 0.3s ease;";

/// Animation applied when the direction toast leaves.
pub const DIRECTION_TOAST_EXIT: &str = "fadeOutScale 0.3s ease forwards";

/// Id of the injected `<style>` block holding the toast keyframes.
pub const ANIMATION_STYLE_ID: &str = "direction-animation-styles";

/// Keyframes used by the direction toast.
pub const ANIMATION_KEYFRAMES: &str = "
@keyframes fadeInScale {
	0% { opacity: 0; transform: translate(-50%, -50%) scale(0.8); }
	100% { opacity: 1; transform: translate(-50%, -50%) scale(1); }
}
@keyframes fadeOutScale {
	0% { opacity: 1; transform: translate(-50%, -50%) scale(1); }
	100% { opacity: 0; transform: translate(-50%, -50%) scale(0.8); }
}
";

/// Message announcing a direction change.
pub fn direction_message(direction: Direction) -> &'static str {
	match direction {
		Direction::Ltr => "Layout switched to LTR (Left-to-Right)",
		Direction::Rtl => "Layout switched to RTL (Right-to-Left)",
	}
}
