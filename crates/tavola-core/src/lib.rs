//! Tavola Core - platform-independent building blocks
//!
//! Everything in this crate is free of `web-sys` so it can be unit-tested
//! natively and shared by the WASM controllers in `tavola-pages`.
//!
//! ## Modules
//!
//! - [`direction`]: LTR/RTL state machine and its injectable holder
//! - [`store`]: persistent key/value store abstraction
//! - [`validation`]: required / email / phone field checks
//! - [`schedule`]: cancellable delayed tasks and a manual fake clock
//! - [`toast`]: notification severities and placement rules
//! - [`layout`]: per-direction style values (alignment, fonts, labels)
//! - [`search`]: menu search matching
//! - [`config`]: site configuration
//!
//! ## Example
//!
//! ```
//! use tavola_core::direction::{Direction, DirectionState};
//! use tavola_core::store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let state = DirectionState::load(store.clone(), "isRTL");
//! assert_eq!(state.current(), Direction::Ltr);
//!
//! state.toggle();
//! state.persist().unwrap();
//! assert_eq!(store.get("isRTL").as_deref(), Some("true"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod direction;
pub mod layout;
pub mod schedule;
pub mod search;
pub mod store;
pub mod toast;
pub mod validation;

pub use config::{ConfigError, SiteConfig};
pub use direction::{Direction, DirectionState, ParseDirectionError};
pub use schedule::{ManualScheduler, Scheduler, TaskHandle};
pub use store::{MemoryStore, PreferenceStore, StoreError};
pub use toast::Severity;
pub use validation::{FieldError, FieldKind};
