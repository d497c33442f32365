//! Dose ↔ water conversion through the canonical 1:N ratio.
//!
//! The derived side is rounded to the nearest whole gram/ml; only the
//! side the user is editing keeps sub-integer precision (doses move in
//! 0.5g steps, derived water does not).

/// Water (g/ml) for a dose at a given ratio.
pub fn water_for_dose(dose: f64, ratio: f64) -> f64 {
    (dose * ratio).round()
}

/// Dose (g) for a water amount at a given ratio.
pub fn dose_for_water(water: f64, ratio: f64) -> f64 {
    (water / ratio).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_for_dose() {
        assert_eq!(water_for_dose(20.0, 16.0), 320.0);
        assert_eq!(water_for_dose(25.0, 16.0), 400.0);
        assert_eq!(water_for_dose(15.0, 16.6), 249.0);
    }

    #[test]
    fn test_dose_for_water() {
        assert_eq!(dose_for_water(320.0, 16.0), 20.0);
        assert_eq!(dose_for_water(250.0, 16.6), 15.0);
    }

    #[test]
    fn test_round_trip_within_one_gram() {
        // dose_for_water(water_for_dose(d, r), r) ≈ d within ±1 for the
        // whole slider range at catalog-like ratios.
        for ratio in [2.0, 10.0, 16.0, 16.6, 16.7] {
            let mut dose = 5.0;
            while dose <= 100.0 {
                let water = water_for_dose(dose, ratio);
                let back = dose_for_water(water, ratio);
                assert!(
                    (back - dose).abs() <= 1.0,
                    "dose {dose} ratio {ratio}: water {water}, back {back}"
                );
                dose += 0.5;
            }
        }
    }
}
