//! DOM controllers
//!
//! Re-exports `tavola-pages`.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use tavola::core::{ManualScheduler, MemoryStore, SiteConfig};
//! use tavola::pages::{App, Document};
//!
//! let document = Document::new();
//! let app = App::mount(
//!     document,
//!     Rc::new(MemoryStore::new()),
//!     Rc::new(ManualScheduler::new()),
//!     &SiteConfig::default(),
//! );
//! assert_eq!(app.page().search_menu("pasta"), 0);
//! ```

pub use tavola_pages::*;
