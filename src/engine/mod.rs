//! Recipe math: ratio derivation and bounded parameter adjustment.
//!
//! - [`ratio`] - pure dose↔water conversion through a 1:N ratio
//! - [`tuning`] - the immutable step/offset/bounds table the
//!   adjustment engine is constructed with
//! - [`adjust`] - filter, roast, and taste-feedback corrections,
//!   clamped to instrument bounds

pub mod adjust;
pub mod ratio;
pub mod tuning;

pub use adjust::{AdjustmentEngine, RoastAdjustment};
pub use ratio::{dose_for_water, water_for_dose};
pub use tuning::{RoastDelta, Tuning};
