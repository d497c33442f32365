//! The recipe state controller.
//!
//! Owns the single in-memory [`Recipe`] and resolves user intents
//! against the ratio, adjustment, and catalog modules. The ratio-lock
//! invariant is enforced eagerly: any transition that can invalidate a
//! dependent field re-derives it inline before handing the recipe back.

use log::debug;

use crate::catalog::{moka_size_dose_water, BrewMethod, MokaSize};
use crate::engine::{dose_for_water, water_for_dose, AdjustmentEngine};
use crate::recipe::{FilterType, Intensity, Recipe, RoastLevel, TasteFeedback};

/// Hydration keys accepted from an externally supplied locator.
const KEY_METHOD: &str = "m";
const KEY_DOSE: &str = "d";
const KEY_WATER: &str = "w";
const KEY_TEMP: &str = "tm";
const KEY_TIME: &str = "ti";
const KEY_GRIND: &str = "g";

/// Orchestrates recipe mutations for one session.
///
/// Single-threaded, synchronous: one intent in, one updated recipe
/// snapshot out. Lives for the whole session; there is no terminal
/// state.
#[derive(Debug, Clone)]
pub struct RecipeController {
    recipe: Recipe,
    engine: AdjustmentEngine,
}

impl RecipeController {
    /// Start a session on the default method's preset.
    pub fn new() -> Self {
        Self::with_engine(AdjustmentEngine::default())
    }

    /// Start a session with an alternate adjustment engine (tests,
    /// custom tuning).
    pub fn with_engine(engine: AdjustmentEngine) -> Self {
        Self {
            recipe: Recipe::default(),
            engine,
        }
    }

    /// The current recipe snapshot.
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// The adjustment engine in use.
    pub fn engine(&self) -> &AdjustmentEngine {
        &self.engine
    }

    /// The ratio in force: the method's canonical ratio while locked,
    /// the ratio the fields imply while unlocked.
    pub fn current_ratio(&self) -> f64 {
        if self.recipe.ratio_locked {
            self.recipe.canonical_ratio()
        } else {
            self.recipe.current_ratio()
        }
    }

    /// Switch brewing method: reset every core field to the method's
    /// preset, reset the filter to paper, and relock the ratio.
    pub fn select_method(&mut self, method: BrewMethod) -> &Recipe {
        debug!("select method {method}");
        self.recipe = Recipe::from_preset(method);
        &self.recipe
    }

    /// Set the dose. While locked, water is re-derived from the
    /// canonical ratio; while unlocked, water is untouched.
    pub fn set_dose(&mut self, dose: f64) -> &Recipe {
        self.recipe.dose = dose;
        if self.recipe.ratio_locked {
            self.recipe.water = water_for_dose(dose, self.recipe.canonical_ratio());
        }
        &self.recipe
    }

    /// Set the water amount. While locked, dose is re-derived from the
    /// canonical ratio; while unlocked, dose is untouched.
    pub fn set_water(&mut self, water: f64) -> &Recipe {
        self.recipe.water = water;
        if self.recipe.ratio_locked {
            self.recipe.dose = dose_for_water(water, self.recipe.canonical_ratio());
        }
        &self.recipe
    }

    /// Flip the ratio lock. No field is recomputed on the toggle
    /// itself; re-derivation resumes on the next dose/water edit.
    pub fn toggle_ratio_lock(&mut self) -> &Recipe {
        self.recipe.ratio_locked = !self.recipe.ratio_locked;
        debug!("ratio lock -> {}", self.recipe.ratio_locked);
        &self.recipe
    }

    /// Manual grind edit, clamped to instrument bounds.
    pub fn set_grind(&mut self, microns: u32) -> &Recipe {
        self.recipe.grind = self.engine.tuning().clamp_grind(microns as i64);
        &self.recipe
    }

    /// Manual temperature edit, clamped to instrument bounds.
    pub fn set_temperature(&mut self, celsius: i32) -> &Recipe {
        self.recipe.temperature = self.engine.tuning().clamp_temp(celsius);
        &self.recipe
    }

    /// Manual brew-time edit.
    pub fn set_time(&mut self, seconds: u32) -> &Recipe {
        self.recipe.time = seconds;
        &self.recipe
    }

    /// Change the filter type and re-derive grind from the method's
    /// preset under the new filter.
    ///
    /// This overwrites any manual grind edit made since the last
    /// method/filter change; the grind is a function of (method,
    /// filter), not an offset on top of the user's value.
    pub fn set_filter(&mut self, filter: FilterType) -> &Recipe {
        self.recipe.filter = filter;
        self.recipe.grind = self
            .engine
            .filter_adjusted_grind(self.recipe.method, filter);
        &self.recipe
    }

    /// Change the roast level and apply its temperature/grind
    /// correction over the filter-adjusted baseline.
    pub fn set_roast(&mut self, roast: RoastLevel) -> &Recipe {
        self.recipe.roast = roast;
        let adj = self
            .engine
            .roast_adjustment(roast, self.recipe.method, self.recipe.filter);
        self.recipe.temperature = adj.temperature;
        self.recipe.grind = adj.grind;
        &self.recipe
    }

    /// Apply one taste-correction step; all untouched fields carry
    /// over unchanged.
    pub fn taste_feedback(&mut self, kind: TasteFeedback, intensity: Intensity) -> &Recipe {
        self.recipe = self.engine.adjust_for_taste(kind, intensity, &self.recipe);
        &self.recipe
    }

    /// Apply a moka chamber size: dose and water are fixed by the
    /// chamber, so the ratio unlocks rather than fighting the preset
    /// ratio. Only meaningful on the Moka Pot method; ignored
    /// elsewhere.
    pub fn select_moka_size(&mut self, size: MokaSize) -> &Recipe {
        if self.recipe.method != BrewMethod::MokaPot {
            return &self.recipe;
        }
        let (dose, water) = moka_size_dose_water(size);
        self.recipe.dose = dose;
        self.recipe.water = water;
        self.recipe.ratio_locked = false;
        &self.recipe
    }

    /// Seed recipe fields from externally supplied key/value pairs.
    ///
    /// Every field is independently optional; absent or unparseable
    /// values are no-ops and an unrecognized method name keeps the
    /// current method. Values are applied exactly as given — hydration
    /// never re-derives lock consistency.
    pub fn hydrate<'a, I>(&mut self, pairs: I) -> &Recipe
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            match key {
                KEY_METHOD => {
                    if let Some(method) = BrewMethod::from_name(value) {
                        self.recipe.method = method;
                    } else {
                        debug!("hydrate: unknown method '{value}' ignored");
                    }
                }
                KEY_DOSE => {
                    if let Some(dose) = parse_positive_f64(value) {
                        self.recipe.dose = dose;
                    }
                }
                KEY_WATER => {
                    if let Some(water) = parse_positive_f64(value) {
                        self.recipe.water = water;
                    }
                }
                KEY_TEMP => {
                    if let Ok(temp) = value.parse::<i32>() {
                        self.recipe.temperature = temp;
                    }
                }
                KEY_TIME => {
                    if let Ok(time) = value.parse::<u32>() {
                        self.recipe.time = time;
                    }
                }
                KEY_GRIND => {
                    if let Ok(grind) = value.parse::<u32>() {
                        self.recipe.grind = grind;
                    }
                }
                _ => {}
            }
        }
        &self.recipe
    }
}

impl Default for RecipeController {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_positive_f64(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}
