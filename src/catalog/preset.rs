//! Canonical starting recipes per brew method.

use super::BrewMethod;

/// The canonical starting recipe for a brewing method.
///
/// `ratio` is the method's dose:water ratio expressed as the `N` in
/// `1:N`; the ratio-lock derives water from dose (and back) through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Coffee dose in grams
    pub dose: f64,
    /// Brew water in grams/ml
    pub water: f64,
    /// Canonical dose:water ratio (1:N)
    pub ratio: f64,
    /// Water temperature in °C
    pub temp: i32,
    /// Brew duration in seconds
    pub time: u32,
    /// Target particle size in microns
    pub grind: u32,
}

/// Look up the preset for a method.
pub fn preset(method: BrewMethod) -> Preset {
    match method {
        BrewMethod::Espresso => Preset {
            dose: 18.0,
            water: 36.0,
            ratio: 2.0,
            temp: 93,
            time: 30,
            grind: 300,
        },
        BrewMethod::AeroPress => Preset {
            dose: 15.0,
            water: 250.0,
            ratio: 16.6,
            temp: 90,
            time: 150,
            grind: 600,
        },
        BrewMethod::AeroPressFlowControl => Preset {
            dose: 15.0,
            water: 250.0,
            ratio: 16.7,
            temp: 99,
            time: 120,
            grind: 600,
        },
        BrewMethod::V60 => Preset {
            dose: 20.0,
            water: 320.0,
            ratio: 16.0,
            temp: 96,
            time: 180,
            grind: 800,
        },
        BrewMethod::FrenchPress => Preset {
            dose: 30.0,
            water: 500.0,
            ratio: 16.6,
            temp: 95,
            time: 240,
            grind: 1200,
        },
        BrewMethod::MokaPot => Preset {
            dose: 18.0,
            water: 180.0,
            ratio: 10.0,
            temp: 99,
            time: 300,
            grind: 500,
        },
        BrewMethod::ColdBrew => Preset {
            dose: 80.0,
            water: 800.0,
            ratio: 10.0,
            temp: 20,
            time: 43200,
            grind: 1600,
        },
    }
}

/// Moka pot chamber sizes.
///
/// Each size fixes dose and water to the chamber capacity. The pairs do
/// not all sit on the Moka Pot's 1:10 ratio, so applying one unlocks the
/// ratio rather than fighting the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MokaSize {
    OneCup,
    ThreeCup,
    SixCup,
    NineCup,
    TwelveCup,
}

impl MokaSize {
    /// All chamber sizes, smallest first.
    pub const ALL: [MokaSize; 5] = [
        MokaSize::OneCup,
        MokaSize::ThreeCup,
        MokaSize::SixCup,
        MokaSize::NineCup,
        MokaSize::TwelveCup,
    ];

    /// Display label, e.g. "3-cup".
    pub fn label(&self) -> &'static str {
        match self {
            MokaSize::OneCup => "1-cup",
            MokaSize::ThreeCup => "3-cup",
            MokaSize::SixCup => "6-cup",
            MokaSize::NineCup => "9-cup",
            MokaSize::TwelveCup => "12-cup",
        }
    }
}

/// Dose (g) and water (ml) for a moka chamber size.
pub fn moka_size_dose_water(size: MokaSize) -> (f64, f64) {
    match size {
        MokaSize::OneCup => (7.0, 60.0),
        MokaSize::ThreeCup => (18.0, 180.0),
        MokaSize::SixCup => (32.0, 300.0),
        MokaSize::NineCup => (50.0, 550.0),
        MokaSize::TwelveCup => (70.0, 775.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_ratio_consistent() {
        // The ratio each preset's dose/water pair implies should match
        // its canonical ratio (the catalog stores rounded water values,
        // so allow a tenth).
        for method in BrewMethod::ALL {
            let p = preset(method);
            let implied = p.water / p.dose;
            assert!(
                (implied - p.ratio).abs() < 0.1,
                "{method}: implied ratio {implied}, canonical {}",
                p.ratio
            );
        }
    }

    #[test]
    fn test_moka_three_cup_matches_method_preset() {
        let (dose, water) = moka_size_dose_water(MokaSize::ThreeCup);
        let p = preset(BrewMethod::MokaPot);
        assert_eq!(dose, p.dose);
        assert_eq!(water, p.water);
    }
}
