//! Client-side form field checks.
//!
//! These checks only improve UX; the host site must not rely on them for
//! anything security related.

use std::sync::LazyLock;

use regex::Regex;

/// What kind of value a field holds, derived from its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// `type="email"`
	Email,
	/// `type="tel"`
	Tel,
	/// Any other input type, `textarea` or `select`.
	Other,
}

impl FieldKind {
	/// Maps an input `type` attribute to a kind.
	pub fn from_input_type(input_type: &str) -> Self {
		match input_type.trim().to_ascii_lowercase().as_str() {
			"email" => Self::Email,
			"tel" => Self::Tel,
			_ => Self::Other,
		}
	}
}

/// A failed field check. `Display` is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// Required field left empty.
	#[error("This field is required")]
	Required,
	/// Malformed e-mail address.
	#[error("Please enter a valid email address")]
	InvalidEmail,
	/// Malformed phone number.
	#[error("Please enter a valid phone number")]
	InvalidPhone,
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[+]?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

/// Checks an e-mail address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_REGEX.is_match(email)
}

/// Checks a phone number after removing whitespace, `-`, `(` and `)`.
pub fn is_valid_phone(phone: &str) -> bool {
	let stripped: String = phone
		.chars()
		.filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
		.collect();
	PHONE_REGEX.is_match(&stripped)
}

/// Validates a raw field value.
///
/// The value is trimmed first. Format checks only run on non-empty values, so
/// an optional empty email or phone field passes.
pub fn validate_value(raw: &str, kind: FieldKind, required: bool) -> Result<(), FieldError> {
	let value = raw.trim();

	if required && value.is_empty() {
		return Err(FieldError::Required);
	}
	if value.is_empty() {
		return Ok(());
	}

	match kind {
		FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
		FieldKind::Tel if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
		_ => Ok(()),
	}
}
