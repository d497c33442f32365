//! Recipe state: the single in-memory recipe and its controller.

mod controller;

pub use controller::RecipeController;

use serde::{Deserialize, Serialize};

use crate::catalog::BrewMethod;

/// Filter type for immersion methods with removable filter caps.
///
/// Ignored by methods without one (see [`BrewMethod::supports_filter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    #[default]
    Paper,
    Metal,
    /// Paper and metal stacked
    Both,
}

impl FilterType {
    /// Display label.
    pub fn name(&self) -> &'static str {
        match self {
            FilterType::Paper => "Paper",
            FilterType::Metal => "Metal",
            FilterType::Both => "Both",
        }
    }

    /// Resolve a label back to a filter type.
    pub fn from_name(name: &str) -> Option<FilterType> {
        match name {
            "Paper" => Some(FilterType::Paper),
            "Metal" => Some(FilterType::Metal),
            "Both" => Some(FilterType::Both),
            _ => None,
        }
    }
}

/// Roast level of the beans being dialed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoastLevel {
    Light,
    #[default]
    Medium,
    MediumDark,
    Dark,
}

impl RoastLevel {
    /// Display label.
    pub fn name(&self) -> &'static str {
        match self {
            RoastLevel::Light => "Light",
            RoastLevel::Medium => "Medium",
            RoastLevel::MediumDark => "Medium-Dark",
            RoastLevel::Dark => "Dark",
        }
    }

    /// Resolve a label back to a roast level.
    pub fn from_name(name: &str) -> Option<RoastLevel> {
        match name {
            "Light" => Some(RoastLevel::Light),
            "Medium" => Some(RoastLevel::Medium),
            "Medium-Dark" => Some(RoastLevel::MediumDark),
            "Dark" => Some(RoastLevel::Dark),
            _ => None,
        }
    }
}

/// Tasted-flavor report driving the correction cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TasteFeedback {
    /// Under-extracted; the next cup should extract more
    Sour,
    /// Over-extracted; the next cup should extract less
    Bitter,
}

/// How strongly the off-flavor came through.
///
/// Scales the grind correction only; temperature and time steps are
/// fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intensity {
    /// "Slightly"
    Low,
    #[default]
    Normal,
    /// "Very"
    High,
}

/// The live recipe.
///
/// Owned and mutated by [`RecipeController`]; every mutating transition
/// re-derives dependent fields inline, so a `Recipe` handed out is
/// always internally consistent with its lock state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub method: BrewMethod,
    /// Coffee dose in grams
    pub dose: f64,
    /// Brew water in grams/ml
    pub water: f64,
    /// When true, water is derived from dose (and dose from water)
    /// through the method's canonical ratio
    pub ratio_locked: bool,
    /// Water temperature in °C
    pub temperature: i32,
    /// Brew duration in seconds
    pub time: u32,
    /// Target particle size in microns
    pub grind: u32,
    pub filter: FilterType,
    pub roast: RoastLevel,
}

impl Recipe {
    /// Build a recipe from a method's preset, ratio locked, paper
    /// filter, medium roast.
    pub fn from_preset(method: BrewMethod) -> Recipe {
        let p = method.preset();
        Recipe {
            method,
            dose: p.dose,
            water: p.water,
            ratio_locked: true,
            temperature: p.temp,
            time: p.time,
            grind: p.grind,
            filter: FilterType::default(),
            roast: RoastLevel::default(),
        }
    }

    /// The method's canonical ratio (the `N` in 1:N).
    pub fn canonical_ratio(&self) -> f64 {
        self.method.preset().ratio
    }

    /// The ratio the current dose and water actually imply.
    ///
    /// Equals the canonical ratio (within rounding) while locked;
    /// informational only while unlocked.
    pub fn current_ratio(&self) -> f64 {
        if self.dose > 0.0 {
            self.water / self.dose
        } else {
            0.0
        }
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe::from_preset(BrewMethod::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_recipe_is_v60_preset() {
        let r = Recipe::default();
        assert_eq!(r.method, BrewMethod::V60);
        assert_eq!(r.dose, 20.0);
        assert_eq!(r.water, 320.0);
        assert!(r.ratio_locked);
        assert_eq!(r.filter, FilterType::Paper);
        assert_eq!(r.roast, RoastLevel::Medium);
    }

    #[test]
    fn test_current_ratio() {
        let r = Recipe::default();
        assert_relative_eq!(r.current_ratio(), 16.0);
        assert_relative_eq!(r.canonical_ratio(), 16.0);
    }
}
