//! Per-direction style values.

use crate::direction::Direction;

/// Body font stack for `direction`.
pub fn font_stack(direction: Direction) -> &'static str {
	match direction {
		Direction::Ltr => r#""Segoe UI", Tahoma, Geneva, Verdana, sans-serif"#,
		Direction::Rtl => r#""Segoe UI", "Arabic UI Text", "Geeza Pro", sans-serif"#,
	}
}

/// Text alignment of a content container.
///
/// Hero content is centred in LTR; everything right-aligns in RTL.
pub fn content_text_align(direction: Direction, is_hero: bool) -> &'static str {
	match (direction, is_hero) {
		(Direction::Rtl, _) => "right",
		(Direction::Ltr, true) => "center",
		(Direction::Ltr, false) => "left",
	}
}

/// Text alignment of form inputs.
pub fn input_text_align(direction: Direction) -> &'static str {
	match direction {
		Direction::Ltr => "left",
		Direction::Rtl => "right",
	}
}

/// `(left, right)` offsets anchoring a dropdown to the leading edge.
pub fn dropdown_anchor(direction: Direction) -> (&'static str, &'static str) {
	match direction {
		Direction::Ltr => ("0", "auto"),
		Direction::Rtl => ("auto", "0"),
	}
}

/// Label of the toggle button: the direction it switches *to*.
pub fn toggle_label(direction: Direction) -> &'static str {
	match direction {
		Direction::Ltr => "RTL",
		Direction::Rtl => "LTR",
	}
}

/// Tooltip of the toggle button.
pub fn toggle_title(direction: Direction) -> &'static str {
	match direction {
		Direction::Ltr => "Switch to Right-to-Left layout",
		Direction::Rtl => "Switch to Left-to-Right layout",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Direction::Ltr, true, "center")]
	#[case(Direction::Ltr, false, "left")]
	#[case(Direction::Rtl, true, "right")]
	#[case(Direction::Rtl, false, "right")]
	fn test_content_text_align(
		#[case] direction: Direction,
		#[case] is_hero: bool,
		#[case] expected: &str,
	) {
		assert_eq!(content_text_align(direction, is_hero), expected);
	}

	#[rstest]
	fn test_dropdown_anchor_mirrors() {
		assert_eq!(dropdown_anchor(Direction::Ltr), ("0", "auto"));
		assert_eq!(dropdown_anchor(Direction::Rtl), ("auto", "0"));
	}

	#[rstest]
	fn test_toggle_label_names_target_direction() {
		assert_eq!(toggle_label(Direction::Ltr), "RTL");
		assert_eq!(toggle_label(Direction::Rtl), "LTR");
		assert!(toggle_title(Direction::Rtl).contains("Left-to-Right"));
	}

	#[rstest]
	fn test_font_stack_rtl_includes_arabic_faces() {
		assert!(font_stack(Direction::Rtl).contains("Geeza Pro"));
		assert!(!font_stack(Direction::Ltr).contains("Geeza Pro"));
	}
}
