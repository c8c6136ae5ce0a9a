//! Layout direction state machine.
//!
//! Two states, [`Direction::Ltr`] and [`Direction::Rtl`], with a single
//! transition (negation). [`DirectionState`] is the injectable holder that
//! owns the in-memory value and knows how to persist it.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::store::{PreferenceStore, StoreError};

/// Default storage key for the RTL flag.
pub const DEFAULT_STORAGE_KEY: &str = "isRTL";

/// Text/layout direction of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
	/// Left-to-right (English).
	#[default]
	Ltr,
	/// Right-to-left (Arabic).
	Rtl,
}

impl Direction {
	/// Value of the `dir` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ltr => "ltr",
			Self::Rtl => "rtl",
		}
	}

	/// Value of the `lang` attribute written alongside `dir`.
	pub fn lang(self) -> &'static str {
		match self {
			Self::Ltr => "en",
			Self::Rtl => "ar",
		}
	}

	/// Whether this is [`Direction::Rtl`].
	pub fn is_rtl(self) -> bool {
		self == Self::Rtl
	}

	/// The other direction.
	pub fn toggled(self) -> Self {
		match self {
			Self::Ltr => Self::Rtl,
			Self::Rtl => Self::Ltr,
		}
	}

	/// Builds a direction from the boolean RTL flag.
	pub fn from_rtl(is_rtl: bool) -> Self {
		if is_rtl { Self::Rtl } else { Self::Ltr }
	}

	/// Decodes a stored flag. Only the literal `"true"` means RTL.
	pub fn from_stored(value: Option<&str>) -> Self {
		Self::from_rtl(value == Some("true"))
	}

	/// Encodes the flag the way it is persisted.
	pub fn to_stored(self) -> &'static str {
		if self.is_rtl() { "true" } else { "false" }
	}

	/// Reads a `dir` attribute value; anything but `rtl` is LTR.
	pub fn from_dir_attribute(value: Option<&str>) -> Self {
		Self::from_rtl(value.is_some_and(|v| v.eq_ignore_ascii_case("rtl")))
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout direction '{0}', expected 'ltr' or 'rtl'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
	type Err = ParseDirectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"ltr" => Ok(Self::Ltr),
			"rtl" => Ok(Self::Rtl),
			_ => Err(ParseDirectionError(s.to_string())),
		}
	}
}

/// Holder for the persisted direction preference.
///
/// The value is read once from the store at construction. Mutations only
/// touch memory; [`DirectionState::persist`] writes the current value back.
#[derive(Debug)]
pub struct DirectionState<S> {
	store: S,
	key: String,
	current: Cell<Direction>,
}

impl<S: PreferenceStore> DirectionState<S> {
	/// Loads the preference stored under `key`, defaulting to LTR.
	pub fn load(store: S, key: impl Into<String>) -> Self {
		let key = key.into();
		let current = Direction::from_stored(store.load(&key).as_deref());
		Self {
			store,
			key,
			current: Cell::new(current),
		}
	}

	/// Current direction.
	pub fn current(&self) -> Direction {
		self.current.get()
	}

	/// Replaces the in-memory direction without persisting.
	pub fn set(&self, direction: Direction) {
		self.current.set(direction);
	}

	/// Flips the in-memory direction and returns the new value.
	pub fn toggle(&self) -> Direction {
		let next = self.current().toggled();
		self.current.set(next);
		next
	}

	/// Writes the current direction to the store.
	pub fn persist(&self) -> Result<(), StoreError> {
		self.store.save(&self.key, self.current().to_stored())
	}

	/// Storage key used for persistence.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Underlying store.
	pub fn store(&self) -> &S {
		&self.store
	}
}
