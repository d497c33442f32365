//! # Dialer Core
//!
//! A recipe parameter model and adjustment engine for dialing in
//! brewed coffee.
//!
//! This library provides:
//! - A preset catalog of brew-method archetypes (dose, water, ratio,
//!   temperature, time, grind) with per-method tips
//! - A ratio engine keeping water mathematically derived from dose
//!   (and back) while the ratio is locked
//! - An adjustment engine applying filter, roast, and taste-feedback
//!   corrections inside global instrument bounds
//! - A grinder conversion subsystem mapping microns to
//!   manufacturer-specific dial/click/setting values
//! - A recipe state controller orchestrating all of the above over a
//!   single in-memory recipe
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`catalog`] - Brew method presets, moka sizes, and pro tips
//! - [`grind`] - Grind chart lookup and per-grinder profiles
//! - [`engine`] - Ratio math, tuning table, and bounded adjustments
//! - [`recipe`] - The recipe type and its state controller
//! - [`share`] - Plain-text summary and shareable locator
//! - [`store`] - Durable rating/notes record (CLI only)
//!
//! ## Usage
//!
//! ```
//! use dialer_core::{BrewMethod, Intensity, RecipeController, TasteFeedback};
//!
//! let mut controller = RecipeController::new();
//! controller.select_method(BrewMethod::V60);
//! controller.set_dose(25.0); // ratio locked: water follows to 400ml
//! controller.taste_feedback(TasteFeedback::Bitter, Intensity::High);
//! assert_eq!(controller.recipe().grind, 875);
//! ```
//!
//! ## Adjustment Model
//!
//! Every mutating transition re-derives dependent fields inline before
//! returning, so the recipe handed back is always coherent with its
//! lock state. Taste feedback runs a priority cascade — grind first,
//! then temperature, then time, each lever moving only once the
//! previous one is saturated at its bound — and changes exactly one
//! lever per call. The core is total: bad input is a no-op and
//! out-of-range results clamp; no error crosses the core boundary.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod grind;
pub mod recipe;
pub mod share;

#[cfg(feature = "cli")]
pub mod store;

// Re-export main types for convenience
pub use catalog::{BrewMethod, MokaSize, Preset};
pub use engine::{AdjustmentEngine, Tuning};
pub use error::{DialerError, Result};
pub use grind::GrinderModel;
pub use recipe::{FilterType, Intensity, Recipe, RecipeController, RoastLevel, TasteFeedback};
