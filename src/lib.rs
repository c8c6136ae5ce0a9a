//! # Tavola
//!
//! A WebAssembly enhancement layer for static restaurant websites.
//!
//! Tavola attaches behaviour to server-rendered pages without replacing them:
//! a mobile menu, inline form validation, smooth in-page scrolling,
//! reveal-on-scroll, a simulated order flow, hover prefetching, toast
//! notifications, menu search, and a persisted left-to-right/right-to-left
//! layout toggle.
//!
//! ## Crates
//!
//! - [`core`]: platform-independent rules (direction state, validation,
//!   timers, toast styling, configuration)
//! - [`pages`]: DOM controllers and the WASM entry point (feature `pages`)
//!
//! ## Feature Flags
//!
//! - `pages` (default) - DOM controllers
//! - `console_error_panic_hook` - readable panics in the browser console
//! - `debug-hooks` - verbose `debug_log!` output in debug builds
//!
//! ## Quick Example
//!
//! ```
//! use tavola::core::validation::{FieldError, FieldKind, validate_value};
//!
//! assert_eq!(
//!     validate_value("a@b", FieldKind::Email, true),
//!     Err(FieldError::InvalidEmail),
//! );
//! assert_eq!(
//!     FieldError::InvalidEmail.to_string(),
//!     "Please enter a valid email address",
//! );
//! ```

pub mod core;
#[cfg(feature = "pages")]
pub mod pages;

pub use tavola_core::{Direction, Severity, SiteConfig};

#[cfg(feature = "pages")]
pub use tavola_pages::{App, Document, LayoutDirection, PageInteractions};
