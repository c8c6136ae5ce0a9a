//! Site configuration.
//!
//! Every field has a default matching the stock restaurant templates, so an
//! empty JSON object (or no config at all) yields a working setup. Hosts can
//! override values with a `<script type="application/json" id="tavola-config">`
//! block.
//!
//! ```
//! use tavola_core::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{ "timing": { "order_processing_ms": 500 } }"#).unwrap();
//! assert_eq!(config.timing.order_processing_ms, 500);
//! assert_eq!(config.timing.toast_lifetime_ms, 3000);
//! assert_eq!(config.storage_key, "isRTL");
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::direction::DEFAULT_STORAGE_KEY;

/// Id of the optional JSON config block in the host page.
pub const CONFIG_ELEMENT_ID: &str = "tavola-config";

/// Errors raised while loading [`SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The JSON could not be parsed into a config.
	#[error("invalid site configuration: {0}")]
	Json(#[from] serde_json::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// localStorage key of the RTL flag.
	pub storage_key: String,
	/// Timer durations.
	pub timing: TimingConfig,
	/// Reveal-on-scroll settings.
	pub reveal: RevealConfig,
	/// `data-page` values of the dropdown groups whose links are prefetched.
	pub prefetch_pages: Vec<String>,
	/// Menu search settings.
	pub search: SearchConfig,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			storage_key: DEFAULT_STORAGE_KEY.to_string(),
			timing: TimingConfig::default(),
			reveal: RevealConfig::default(),
			prefetch_pages: vec!["home".to_string(), "dashboard".to_string()],
			search: SearchConfig::default(),
		}
	}
}

impl SiteConfig {
	/// Parses a config from JSON. Missing fields take their defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}
}

/// Timer durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
	/// How long a page toast stays before sliding out.
	pub toast_lifetime_ms: u64,
	/// Delay before a freshly inserted toast slides in.
	pub toast_slide_in_ms: u64,
	/// Slide-out transition length; the toast is removed afterwards.
	pub toast_slide_out_ms: u64,
	/// Simulated order processing delay.
	pub order_processing_ms: u64,
	/// How long a menu item stays tinted after "add".
	pub add_highlight_ms: u64,
	/// How long the direction toast stays before fading.
	pub direction_toast_ms: u64,
	/// Fade-out length of the direction toast.
	pub direction_fade_ms: u64,
	/// Length of the toggle button pulse.
	pub toggle_pulse_ms: u64,
}

impl Default for TimingConfig {
	fn default() -> Self {
		Self {
			toast_lifetime_ms: 3000,
			toast_slide_in_ms: 100,
			toast_slide_out_ms: 300,
			order_processing_ms: 2000,
			add_highlight_ms: 1000,
			direction_toast_ms: 2000,
			direction_fade_ms: 300,
			toggle_pulse_ms: 200,
		}
	}
}

impl TimingConfig {
	/// [`TimingConfig::toast_lifetime_ms`] as a duration.
	pub fn toast_lifetime(&self) -> Duration {
		Duration::from_millis(self.toast_lifetime_ms)
	}

	/// [`TimingConfig::toast_slide_in_ms`] as a duration.
	pub fn toast_slide_in(&self) -> Duration {
		Duration::from_millis(self.toast_slide_in_ms)
	}

	/// [`TimingConfig::toast_slide_out_ms`] as a duration.
	pub fn toast_slide_out(&self) -> Duration {
		Duration::from_millis(self.toast_slide_out_ms)
	}

	/// [`TimingConfig::order_processing_ms`] as a duration.
	pub fn order_processing(&self) -> Duration {
		Duration::from_millis(self.order_processing_ms)
	}

	/// [`TimingConfig::add_highlight_ms`] as a duration.
	pub fn add_highlight(&self) -> Duration {
		Duration::from_millis(self.add_highlight_ms)
	}

	/// [`TimingConfig::direction_toast_ms`] as a duration.
	pub fn direction_toast(&self) -> Duration {
		Duration::from_millis(self.direction_toast_ms)
	}

	/// [`TimingConfig::direction_fade_ms`] as a duration.
	pub fn direction_fade(&self) -> Duration {
		Duration::from_millis(self.direction_fade_ms)
	}

	/// [`TimingConfig::toggle_pulse_ms`] as a duration.
	pub fn toggle_pulse(&self) -> Duration {
		Duration::from_millis(self.toggle_pulse_ms)
	}
}

/// Reveal-on-scroll settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	/// Elements to reveal.
	pub selector: String,
	/// Visible fraction that counts as intersecting.
	pub threshold: f64,
	/// Observer root margin.
	pub root_margin: String,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".card, .dashboard-card, .section".to_string(),
			threshold: 0.1,
			root_margin: "0px 0px -50px 0px".to_string(),
		}
	}
}

/// Menu search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
	/// Bind the filter to `input` events of the search field.
	pub enabled: bool,
	/// Selector of the search field.
	pub input_selector: String,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			input_selector: ".search-input".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_object_is_default() {
		let config = SiteConfig::from_json("{}").unwrap();
		assert_eq!(config, SiteConfig::default());
	}

	#[rstest]
	fn test_defaults() {
		let config = SiteConfig::default();
		assert_eq!(config.timing.toast_lifetime(), Duration::from_secs(3));
		assert_eq!(config.timing.direction_toast(), Duration::from_secs(2));
		assert_eq!(config.timing.order_processing(), Duration::from_secs(2));
		assert_eq!(config.reveal.threshold, 0.1);
		assert_eq!(config.prefetch_pages, vec!["home", "dashboard"]);
		assert!(config.search.enabled);
	}

	#[rstest]
	fn test_partial_override() {
		let config = SiteConfig::from_json(
			r#"{ "storage_key": "dir", "prefetch_pages": ["menu"], "search": { "enabled": false } }"#,
		)
		.unwrap();
		assert_eq!(config.storage_key, "dir");
		assert_eq!(config.prefetch_pages, vec!["menu"]);
		assert!(!config.search.enabled);
		assert_eq!(config.search.input_selector, ".search-input");
	}

	#[rstest]
	fn test_invalid_json_is_error() {
		let err = SiteConfig::from_json("{ nope").unwrap_err();
		assert!(err.to_string().starts_with("invalid site configuration"));
	}

	#[rstest]
	fn test_roundtrip_through_serde() {
		let json = serde_json::to_string(&SiteConfig::default()).unwrap();
		assert_eq!(SiteConfig::from_json(&json).unwrap(), SiteConfig::default());
	}
}
