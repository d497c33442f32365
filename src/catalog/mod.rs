//! Brew method catalog: archetypal recipes and per-method tips.
//!
//! Every supported brewing method carries an immutable [`Preset`] — the
//! canonical starting recipe — plus a short list of pro tips. Selecting
//! a method resets the live recipe to its preset.

mod preset;
mod tips;

pub use preset::{moka_size_dose_water, MokaSize, Preset};
pub use tips::pro_tips;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported brewing method.
///
/// The filter-type adjustment only applies to the AeroPress variants,
/// the one immersion brewer here with interchangeable filter caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrewMethod {
    Espresso,
    AeroPress,
    AeroPressFlowControl,
    V60,
    FrenchPress,
    MokaPot,
    ColdBrew,
}

impl BrewMethod {
    /// All catalog methods, in menu order.
    pub const ALL: [BrewMethod; 7] = [
        BrewMethod::Espresso,
        BrewMethod::AeroPress,
        BrewMethod::AeroPressFlowControl,
        BrewMethod::V60,
        BrewMethod::FrenchPress,
        BrewMethod::MokaPot,
        BrewMethod::ColdBrew,
    ];

    /// The method a fresh session starts on.
    pub const DEFAULT: BrewMethod = BrewMethod::V60;

    /// Human-readable catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            BrewMethod::Espresso => "Espresso",
            BrewMethod::AeroPress => "AeroPress",
            BrewMethod::AeroPressFlowControl => "AeroPress + Flow Control",
            BrewMethod::V60 => "V60",
            BrewMethod::FrenchPress => "French Press",
            BrewMethod::MokaPot => "Moka Pot",
            BrewMethod::ColdBrew => "Cold Brew",
        }
    }

    /// Resolve a catalog name back to a method.
    ///
    /// Returns `None` for unrecognized names; callers fall back to the
    /// current or default method rather than failing.
    pub fn from_name(name: &str) -> Option<BrewMethod> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }

    /// Whether the method brews with a removable filter cap
    /// (paper/metal/both). Only meaningful for the AeroPress variants.
    pub fn supports_filter(&self) -> bool {
        matches!(
            self,
            BrewMethod::AeroPress | BrewMethod::AeroPressFlowControl
        )
    }

    /// The canonical starting recipe for this method.
    pub fn preset(&self) -> Preset {
        preset::preset(*self)
    }

    /// Pro tips shown alongside the recipe.
    pub fn tips(&self) -> &'static [&'static str] {
        tips::pro_tips(*self)
    }
}

impl fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for method in BrewMethod::ALL {
            assert_eq!(BrewMethod::from_name(method.name()), Some(method));
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(BrewMethod::from_name("Percolator"), None);
        assert_eq!(BrewMethod::from_name("v60"), None); // names are exact
    }

    #[test]
    fn test_filter_capability() {
        assert!(BrewMethod::AeroPress.supports_filter());
        assert!(BrewMethod::AeroPressFlowControl.supports_filter());
        assert!(!BrewMethod::V60.supports_filter());
        assert!(!BrewMethod::FrenchPress.supports_filter());
    }
}
