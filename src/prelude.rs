//! Prelude module for month_grid crate.
//!
//! Re-exports the derive macros from derive_more used for value rendering.

pub use derive_more::Display;
