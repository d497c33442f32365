//! Filter, roast, and taste-feedback corrections.
//!
//! Every operation is pure (recipe-in, recipe-out) and clamps its
//! results into the instrument bounds of the [`Tuning`] the engine was
//! constructed with. Out-of-range results are silently clamped, never
//! rejected.

use log::debug;

use crate::catalog::BrewMethod;
use crate::recipe::{FilterType, Intensity, Recipe, RoastLevel, TasteFeedback};

use super::tuning::Tuning;

/// Combined temperature/grind output of a roast correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoastAdjustment {
    pub temperature: i32,
    pub grind: u32,
}

/// Applies bounded corrections to a recipe.
///
/// Construct with [`Tuning::default`] for production values, or an
/// alternate table for deterministic tests.
#[derive(Debug, Clone)]
pub struct AdjustmentEngine {
    tuning: Tuning,
}

impl AdjustmentEngine {
    /// Create an engine with the given tuning table.
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }

    /// The tuning table this engine runs on.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Grind size for a method under a filter type, from the method's
    /// preset grind.
    ///
    /// Metal filters grind finer (the open mesh flows faster), stacked
    /// paper+metal grinds coarser (double resistance). Methods without
    /// a removable filter ignore the filter entirely.
    pub fn filter_adjusted_grind(&self, method: BrewMethod, filter: FilterType) -> u32 {
        let base = method.preset().grind as i64;
        if !method.supports_filter() {
            return self.tuning.clamp_grind(base);
        }
        let offset = match filter {
            FilterType::Paper => 0,
            FilterType::Metal => self.tuning.metal_offset,
            FilterType::Both => self.tuning.both_offset,
        };
        self.tuning.clamp_grind(base + offset as i64)
    }

    /// Temperature and grind for a roast level.
    ///
    /// The grind baseline is the filter-adjusted grind, so roast and
    /// filter corrections compose instead of overwriting each other;
    /// for methods without a filter that baseline is just the preset
    /// grind. Temperature starts from the method's preset.
    pub fn roast_adjustment(
        &self,
        roast: RoastLevel,
        method: BrewMethod,
        filter: FilterType,
    ) -> RoastAdjustment {
        let delta = self.tuning.roast_delta(roast);
        let base_grind = self.filter_adjusted_grind(method, filter) as i64;
        RoastAdjustment {
            temperature: self.tuning.clamp_temp(method.preset().temp + delta.temp),
            grind: self.tuning.clamp_grind(base_grind + delta.grind as i64),
        }
    }

    /// One correction step from a tasted-flavor report.
    ///
    /// Priority cascade: grind is the dominant lever, then temperature,
    /// then time — each later lever only moves once the earlier one is
    /// saturated at its bound. Exactly one lever changes per call.
    /// Intensity scales the grind step only.
    pub fn adjust_for_taste(
        &self,
        kind: TasteFeedback,
        intensity: Intensity,
        recipe: &Recipe,
    ) -> Recipe {
        let t = &self.tuning;
        let delta = t.grind_step(intensity) as i64;
        let mut next = recipe.clone();

        match kind {
            // Under-extracted: extract more
            TasteFeedback::Sour => {
                if recipe.grind > t.min_grind {
                    next.grind = t.clamp_grind(recipe.grind as i64 - delta);
                } else if recipe.temperature < t.max_temp {
                    next.temperature = t.clamp_temp(recipe.temperature + t.temp_step);
                } else {
                    next.time = recipe.time + t.time_step;
                }
            }
            // Over-extracted: extract less
            TasteFeedback::Bitter => {
                if recipe.grind < t.max_grind {
                    next.grind = t.clamp_grind(recipe.grind as i64 + delta);
                } else if recipe.temperature > t.min_temp {
                    next.temperature = t.clamp_temp(recipe.temperature - t.temp_step);
                } else {
                    next.time = recipe.time.saturating_sub(t.time_step);
                }
            }
        }

        debug!(
            "taste {kind:?}/{intensity:?}: grind {} -> {}, temp {} -> {}, time {} -> {}",
            recipe.grind, next.grind, recipe.temperature, next.temperature, recipe.time, next.time
        );
        next
    }
}

impl Default for AdjustmentEngine {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
