//! Export surfaces: textual recipe summary and shareable locator.
//!
//! - [`format`] - small pure formatters (brew time, grind coarseness)
//! - [`locator`] - query-string encoding of the five numeric fields
//!   plus the method, and the matching parse/hydrate path
//! - [`summary`] - the deterministic plain-text recipe summary

pub mod format;
pub mod locator;
pub mod summary;

pub use format::{format_brew_time, grind_description};
pub use locator::{hydrate_query, parse_query, share_query};
pub use summary::{recipe_summary, SummaryContext};
