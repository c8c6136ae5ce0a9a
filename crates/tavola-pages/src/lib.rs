//! Tavola Pages - WASM site layer for the restaurant templates
//!
//! Progressive enhancement for static restaurant pages: mobile navigation,
//! form validation, smooth scrolling, reveal-on-scroll, a simulated order flow,
//! hover prefetching, toasts, menu search and a persisted LTR/RTL layout
//! toggle.
//!
//! ## Architecture
//!
//! - [`dom`]: DOM abstraction (`web-sys` on `wasm32`, in-memory elsewhere)
//! - [`builder`]: element builder
//! - [`notify`]: toast notifications
//! - [`interactions`]: page interaction controller
//! - [`direction`]: layout direction controller
//! - [`app`]: mounts both controllers; WASM start hook and JS API
//! - `platform`: browser scheduler and `localStorage` (WASM only)
//!
//! Platform-independent rules (validation, direction state, timers, config)
//! live in `tavola-core`.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use tavola_core::{Direction, ManualScheduler, MemoryStore, SiteConfig};
//! use tavola_pages::{App, Document};
//!
//! let document = Document::new();
//! let store = MemoryStore::new();
//! let clock = ManualScheduler::new();
//! let app = App::mount(
//!     document.clone(),
//!     Rc::new(store.clone()),
//!     Rc::new(clock.clone()),
//!     &SiteConfig::default(),
//! );
//!
//! app.direction().toggle();
//! assert_eq!(app.direction().current_direction(), Direction::Rtl);
//! assert_eq!(document.root().unwrap().get_attribute("dir").as_deref(), Some("rtl"));
//! assert_eq!(store.get("isRTL").as_deref(), Some("true"));
//! ```

#![warn(missing_docs)]

pub mod logging;

pub mod app;
pub mod builder;
pub mod direction;
pub mod dom;
pub mod interactions;
pub mod notify;
#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use app::{App, load_config};
pub use builder::{ElementBuilder, element};
pub use direction::LayoutDirection;
pub use dom::{Document, DomError, Element, Event, EventHandle, EventType, ObserverHandle};
pub use interactions::PageInteractions;
pub use notify::{Notifier, Toast};
#[cfg(target_arch = "wasm32")]
pub use platform::{BrowserScheduler, LocalStorage};
