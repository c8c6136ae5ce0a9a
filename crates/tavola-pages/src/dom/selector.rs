//! Minimal CSS selector matching for the in-memory DOM.
//!
//! Supports selector lists (`a, b`), the descendant combinator, type
//! selectors, `*`, `#id`, `.class`, and the attribute forms `[attr]`,
//! `[attr=value]`, `[attr^=value]` (values optionally quoted). That covers
//! every selector the site layer issues.

use super::memory::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
	Exists,
	Equals(String),
	Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
	tag: Option<String>,
	id: Option<String>,
	classes: Vec<String>,
	attrs: Vec<(String, AttrOp)>,
}

impl Compound {
	fn matches(&self, element: &Element) -> bool {
		if let Some(tag) = &self.tag
			&& element.tag_name() != *tag
		{
			return false;
		}
		if let Some(id) = &self.id
			&& element.get_attribute("id").as_deref() != Some(id.as_str())
		{
			return false;
		}
		if !self.classes.iter().all(|c| element.has_class(c)) {
			return false;
		}
		self.attrs.iter().all(|(name, op)| {
			let Some(value) = element.get_attribute(name) else {
				return false;
			};
			match op {
				AttrOp::Exists => true,
				AttrOp::Equals(expected) => value == *expected,
				AttrOp::Prefix(prefix) => value.starts_with(prefix.as_str()),
			}
		})
	}
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorList {
	/// Each entry is a chain of compounds joined by descendant combinators.
	alternatives: Vec<Vec<Compound>>,
}

impl SelectorList {
	/// Parses `selector`. Returns `None` for anything unsupported, which the
	/// caller treats like a browser `SyntaxError`: no matches.
	pub(crate) fn parse(selector: &str) -> Option<Self> {
		let mut alternatives = Vec::new();
		for part in split_top_level(selector, ',') {
			let part = part.trim();
			if part.is_empty() {
				return None;
			}
			let chain = split_top_level(part, ' ')
				.into_iter()
				.filter(|s| !s.is_empty())
				.map(parse_compound)
				.collect::<Option<Vec<_>>>()?;
			alternatives.push(chain);
		}
		if alternatives.is_empty() {
			return None;
		}
		Some(Self { alternatives })
	}

	/// Whether `element` matches any alternative.
	pub(crate) fn matches(&self, element: &Element) -> bool {
		self.alternatives
			.iter()
			.any(|chain| chain_matches(chain, element))
	}
}

fn chain_matches(chain: &[Compound], element: &Element) -> bool {
	let Some((last, ancestors)) = chain.split_last() else {
		return false;
	};
	if !last.matches(element) {
		return false;
	}
	let mut remaining = ancestors;
	let mut current = element.parent();
	while let Some((wanted, rest)) = remaining.split_last() {
		loop {
			match current {
				Some(node) => {
					current = node.parent();
					if wanted.matches(&node) {
						break;
					}
				}
				None => return false,
			}
		}
		remaining = rest;
	}
	true
}

/// Splits on `sep` outside of `[...]` and quotes.
fn split_top_level(input: &str, sep: char) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut depth = 0usize;
	let mut quote: Option<char> = None;
	let mut start = 0;
	for (i, c) in input.char_indices() {
		match (quote, c) {
			(Some(q), c) if c == q => quote = None,
			(Some(_), _) => {}
			(None, '"' | '\'') => quote = Some(c),
			(None, '[') => depth += 1,
			(None, ']') => depth = depth.saturating_sub(1),
			(None, c) if c == sep && depth == 0 => {
				parts.push(&input[start..i]);
				start = i + c.len_utf8();
			}
			_ => {}
		}
	}
	parts.push(&input[start..]);
	parts
}

fn is_ident_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(input: &str) -> (&str, &str) {
	let end = input
		.char_indices()
		.find(|(_, c)| !is_ident_char(*c))
		.map(|(i, _)| i)
		.unwrap_or(input.len());
	input.split_at(end)
}

fn parse_compound(input: &str) -> Option<Compound> {
	let mut compound = Compound::default();
	let mut rest = input;

	if let Some(stripped) = rest.strip_prefix('*') {
		rest = stripped;
	} else {
		let (tag, after) = take_ident(rest);
		if !tag.is_empty() {
			compound.tag = Some(tag.to_ascii_lowercase());
			rest = after;
		}
	}

	while let Some(c) = rest.chars().next() {
		match c {
			'#' => {
				let (id, after) = take_ident(&rest[1..]);
				if id.is_empty() {
					return None;
				}
				compound.id = Some(id.to_string());
				rest = after;
			}
			'.' => {
				let (class, after) = take_ident(&rest[1..]);
				if class.is_empty() {
					return None;
				}
				compound.classes.push(class.to_string());
				rest = after;
			}
			'[' => {
				let close = rest.find(']')?;
				compound.attrs.push(parse_attr(&rest[1..close])?);
				rest = &rest[close + 1..];
			}
			_ => return None,
		}
	}

	Some(compound)
}

fn parse_attr(body: &str) -> Option<(String, AttrOp)> {
	let (name, op) = if let Some((name, value)) = body.split_once("^=") {
		(name, AttrOp::Prefix(unquote(value)))
	} else if let Some((name, value)) = body.split_once('=') {
		(name, AttrOp::Equals(unquote(value)))
	} else {
		(body, AttrOp::Exists)
	};
	let name = name.trim();
	if name.is_empty() || !name.chars().all(is_ident_char) {
		return None;
	}
	Some((name.to_ascii_lowercase(), op))
}

fn unquote(value: &str) -> String {
	let value = value.trim();
	value
		.strip_prefix('"')
		.and_then(|v| v.strip_suffix('"'))
		.or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
		.unwrap_or(value)
		.to_string()
}
