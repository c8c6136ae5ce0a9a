//! Platform-independent building blocks
//!
//! Re-exports `tavola-core`: the direction state machine and its preference
//! store, field validators, the scheduler seam with its manual clock, toast
//! styling rules and the site configuration.

pub use tavola_core::*;
