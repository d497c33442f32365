//! Measured grind chart: microns against per-grinder scale readings.
//!
//! Rows are ordered by microns and every column is monotonically
//! non-decreasing. That is a property of the data itself (verified by a
//! test below), not something checked at runtime.

/// One measured row of the grind chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrindRow {
    /// Particle size in microns
    pub microns: u32,
    /// 1Zpresso K-Max rotations (×10 = dial setting)
    pub k_max: f64,
    /// Kingrinder K6 rotations (×60 = clicks)
    pub k6: f64,
    /// DF54/DF64 dial setting
    pub df54: f64,
    /// Comandante C40 clicks
    pub c40: u32,
    /// Timemore C3/C3S clicks
    pub c3: u32,
}

const fn row(microns: u32, k_max: f64, k6: f64, df54: f64, c40: u32, c3: u32) -> GrindRow {
    GrindRow {
        microns,
        k_max,
        k6,
        df54,
        c40,
        c3,
    }
}

/// The chart, 200-800µm. Espresso through pour-over range; coarser
/// grinds extrapolate poorly on click scales so the chart stops where
/// the measurements do and lookups saturate at the last row.
pub const GRIND_CHART: [GrindRow; 43] = [
    row(200, 0.25, 0.33, 10.0, 7, 7),
    row(210, 0.26, 0.35, 11.0, 7, 7),
    row(220, 0.27, 0.37, 12.0, 7, 7),
    row(230, 0.29, 0.38, 13.0, 8, 8),
    row(240, 0.30, 0.40, 14.0, 8, 8),
    row(250, 0.31, 0.42, 15.0, 8, 8),
    row(260, 0.32, 0.43, 15.5, 9, 8),
    row(270, 0.34, 0.45, 16.0, 9, 9),
    row(280, 0.35, 0.47, 17.0, 9, 9),
    row(290, 0.36, 0.48, 18.0, 10, 9),
    row(300, 0.38, 0.50, 19.0, 10, 9),
    row(310, 0.39, 0.52, 20.0, 10, 10),
    row(320, 0.40, 0.53, 21.0, 11, 10),
    row(330, 0.41, 0.55, 22.0, 11, 10),
    row(340, 0.42, 0.57, 22.5, 11, 10),
    row(350, 0.44, 0.58, 23.0, 12, 10),
    row(360, 0.45, 0.60, 24.0, 12, 11),
    row(370, 0.46, 0.62, 25.0, 12, 11),
    row(380, 0.47, 0.63, 26.0, 13, 11),
    row(390, 0.49, 0.65, 27.0, 13, 11),
    row(400, 0.50, 0.67, 28.0, 13, 11),
    row(410, 0.51, 0.68, 29.0, 14, 12),
    row(420, 0.52, 0.70, 30.0, 14, 12),
    row(430, 0.54, 0.72, 31.0, 14, 12),
    row(440, 0.55, 0.73, 32.0, 15, 12),
    row(450, 0.56, 0.75, 33.0, 15, 12),
    row(460, 0.57, 0.77, 34.0, 15, 13),
    row(470, 0.59, 0.78, 35.0, 16, 13),
    row(480, 0.60, 0.80, 36.0, 16, 13),
    row(490, 0.61, 0.82, 37.0, 16, 13),
    row(500, 0.63, 0.83, 38.0, 17, 13),
    row(520, 0.65, 0.87, 40.0, 17, 14),
    row(540, 0.67, 0.90, 42.0, 18, 14),
    row(560, 0.70, 0.93, 44.0, 19, 14),
    row(580, 0.72, 0.97, 46.0, 19, 15),
    row(600, 0.75, 1.00, 48.0, 20, 15),
    row(620, 0.77, 1.03, 50.0, 21, 15),
    row(640, 0.80, 1.07, 52.0, 21, 16),
    row(660, 0.82, 1.10, 54.0, 22, 16),
    row(680, 0.85, 1.13, 56.0, 23, 16),
    row(700, 0.87, 1.17, 58.0, 23, 17),
    row(750, 0.94, 1.25, 62.0, 25, 18),
    row(800, 1.00, 1.33, 67.0, 27, 19),
];

/// Find the chart row closest in microns to the requested size.
///
/// Ties on the exact midpoint between two rows resolve to the earlier
/// (lower-microns) row.
pub fn nearest_row(microns: u32) -> &'static GrindRow {
    let mut best = &GRIND_CHART[0];
    let mut best_dist = best.microns.abs_diff(microns);

    for row in &GRIND_CHART[1..] {
        let dist = row.microns.abs_diff(microns);
        // Strict improvement only, so the first (lower) row wins ties.
        if dist < best_dist {
            best = row;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_is_monotonic() {
        for pair in GRIND_CHART.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.microns < b.microns);
            assert!(a.k_max <= b.k_max);
            assert!(a.k6 <= b.k6);
            assert!(a.df54 <= b.df54);
            assert!(a.c40 <= b.c40);
            assert!(a.c3 <= b.c3);
        }
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(nearest_row(600).microns, 600);
        assert_eq!(nearest_row(200).microns, 200);
        assert_eq!(nearest_row(800).microns, 800);
    }

    #[test]
    fn test_midpoint_tie_takes_lower_row() {
        // 205 is exactly between 200 and 210
        assert_eq!(nearest_row(205).microns, 200);
        // 775 is exactly between 750 and 800
        assert_eq!(nearest_row(775).microns, 750);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(nearest_row(50).microns, 200);
        assert_eq!(nearest_row(1600).microns, 800);
    }
}
