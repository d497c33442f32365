//! Tuning table for the adjustment engine.
//!
//! All steps, offsets, and instrument bounds live in one immutable
//! value passed to [`AdjustmentEngine::new`](super::AdjustmentEngine::new),
//! so tests can run against alternate tables deterministically.

use crate::recipe::{Intensity, RoastLevel};

/// Fixed correction a roast level applies relative to the Medium
/// baseline.
///
/// Lighter roasts are denser and less soluble, so they take hotter
/// water and a finer grind; darker roasts the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoastDelta {
    /// Temperature delta in °C
    pub temp: i32,
    /// Grind delta in microns
    pub grind: i32,
}

/// Immutable tuning parameters for filter, roast, and taste
/// corrections.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Grind correction per taste report, by intensity (microns)
    pub grind_step_low: u32,
    pub grind_step_normal: u32,
    pub grind_step_high: u32,
    /// Temperature correction once grind is saturated (°C)
    pub temp_step: i32,
    /// Time correction once grind and temperature are saturated (s)
    pub time_step: u32,

    /// Grind offset for a metal filter (finer, compensates for the
    /// more open mesh)
    pub metal_offset: i32,
    /// Grind offset for stacked paper+metal filters (coarser,
    /// compensates for double resistance)
    pub both_offset: i32,

    /// Roast corrections relative to Medium
    pub light_roast: RoastDelta,
    pub medium_dark_roast: RoastDelta,
    pub dark_roast: RoastDelta,

    /// Instrument bounds; every adjustment clamps into these
    pub min_grind: u32,
    pub max_grind: u32,
    pub min_temp: i32,
    pub max_temp: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            grind_step_low: 20,
            grind_step_normal: 50,
            grind_step_high: 75,
            temp_step: 2,
            time_step: 15,
            metal_offset: -50,
            both_offset: 50,
            light_roast: RoastDelta { temp: 3, grind: -50 },
            medium_dark_roast: RoastDelta { temp: -2, grind: 25 },
            dark_roast: RoastDelta { temp: -4, grind: 50 },
            min_grind: 100,
            max_grind: 1600,
            min_temp: 80,
            max_temp: 100,
        }
    }
}

impl Tuning {
    /// Grind step for a taste-report intensity.
    pub fn grind_step(&self, intensity: Intensity) -> u32 {
        match intensity {
            Intensity::Low => self.grind_step_low,
            Intensity::Normal => self.grind_step_normal,
            Intensity::High => self.grind_step_high,
        }
    }

    /// Roast correction for a level; Medium is the zero baseline.
    pub fn roast_delta(&self, roast: RoastLevel) -> RoastDelta {
        match roast {
            RoastLevel::Light => self.light_roast,
            RoastLevel::Medium => RoastDelta { temp: 0, grind: 0 },
            RoastLevel::MediumDark => self.medium_dark_roast,
            RoastLevel::Dark => self.dark_roast,
        }
    }

    /// Clamp a (possibly signed) grind value into instrument bounds.
    pub fn clamp_grind(&self, grind: i64) -> u32 {
        grind.clamp(self.min_grind as i64, self.max_grind as i64) as u32
    }

    /// Clamp a temperature into instrument bounds.
    pub fn clamp_temp(&self, temp: i32) -> i32 {
        temp.clamp(self.min_temp, self.max_temp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grind_steps_scale_with_intensity() {
        let t = Tuning::default();
        assert!(t.grind_step(Intensity::Low) < t.grind_step(Intensity::Normal));
        assert!(t.grind_step(Intensity::Normal) < t.grind_step(Intensity::High));
    }

    #[test]
    fn test_medium_roast_is_zero_baseline() {
        let t = Tuning::default();
        let d = t.roast_delta(RoastLevel::Medium);
        assert_eq!(d.temp, 0);
        assert_eq!(d.grind, 0);
    }

    #[test]
    fn test_clamping() {
        let t = Tuning::default();
        assert_eq!(t.clamp_grind(-500), 100);
        assert_eq!(t.clamp_grind(5000), 1600);
        assert_eq!(t.clamp_grind(800), 800);
        assert_eq!(t.clamp_temp(110), 100);
        assert_eq!(t.clamp_temp(70), 80);
    }
}
