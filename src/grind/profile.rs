//! Grinder profiles: per-model conversion from microns to dial units.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::table::nearest_row;

/// Display unit for a converted grind value.
///
/// Formatting switches on this tag only, never on grinder identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    /// Stepped click adjustment, e.g. hand grinders
    Clicks,
    /// Numbered collar/hopper setting
    Setting,
    /// Continuous dial, approximate position
    Dial,
    /// Raw microns passthrough
    Microns,
}

/// A converted grind value plus its display precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrindReading {
    pub value: f64,
    /// Decimal places to show; click counts are whole, some dials read
    /// in tenths.
    pub decimals: u8,
}

impl GrindReading {
    fn whole(value: f64) -> Self {
        Self {
            value: value.round(),
            decimals: 0,
        }
    }

    fn tenths(value: f64) -> Self {
        Self { value, decimals: 1 }
    }
}

/// A supported grinder model.
///
/// Each variant is a pure transform from microns to that model's
/// adjustment units, either through the measured chart or a linear
/// formula, tagged with the [`UnitKind`] it reads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrinderModel {
    /// No grinder selected; values stay in microns
    Microns,
    /// 1Zpresso K-Max
    KMax,
    /// 1Zpresso Q Air
    QAir,
    /// Baratza Encore
    Encore,
    /// Comandante C40
    C40,
    /// DF54 / DF64
    Df54,
    /// Fellow Ode
    Ode,
    /// Hibrew G5
    HibrewG5,
    /// Kingrinder K1
    K1,
    /// Kingrinder K6
    K6,
    /// Kingrinder K0-K5
    KSeries,
    /// Timemore C2
    C2,
    /// Timemore C3/C3S
    C3,
    /// Timemore C3 ESP
    C3Esp,
}

impl GrinderModel {
    /// All supported grinders, default first.
    pub const ALL: [GrinderModel; 14] = [
        GrinderModel::Microns,
        GrinderModel::KMax,
        GrinderModel::QAir,
        GrinderModel::Encore,
        GrinderModel::C40,
        GrinderModel::Df54,
        GrinderModel::Ode,
        GrinderModel::HibrewG5,
        GrinderModel::K1,
        GrinderModel::K6,
        GrinderModel::KSeries,
        GrinderModel::C2,
        GrinderModel::C3,
        GrinderModel::C3Esp,
    ];

    /// Stable id used in configuration and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            GrinderModel::Microns => "NONE",
            GrinderModel::KMax => "KMAX",
            GrinderModel::QAir => "Q_AIR",
            GrinderModel::Encore => "ENCORE",
            GrinderModel::C40 => "C40",
            GrinderModel::Df54 => "DF54",
            GrinderModel::Ode => "ODE",
            GrinderModel::HibrewG5 => "HIBREW_G5",
            GrinderModel::K1 => "K1",
            GrinderModel::K6 => "K6",
            GrinderModel::KSeries => "K_SERIES",
            GrinderModel::C2 => "C2",
            GrinderModel::C3 => "C3",
            GrinderModel::C3Esp => "C3_ESP",
        }
    }

    /// Resolve an id back to a model; unknown ids yield `None` rather
    /// than an error.
    pub fn from_id(id: &str) -> Option<GrinderModel> {
        Self::ALL.iter().copied().find(|g| g.id() == id)
    }

    /// Manufacturer/model display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GrinderModel::Microns => "Microns (Default)",
            GrinderModel::KMax => "1Zpresso K-Max",
            GrinderModel::QAir => "1Zpresso Q Air",
            GrinderModel::Encore => "Baratza Encore",
            GrinderModel::C40 => "Comandante C40",
            GrinderModel::Df54 => "DF54 / DF64",
            GrinderModel::Ode => "Fellow Ode",
            GrinderModel::HibrewG5 => "Hibrew G5",
            GrinderModel::K1 => "Kingrinder K1",
            GrinderModel::K6 => "Kingrinder K6",
            GrinderModel::KSeries => "Kingrinder K0-K5",
            GrinderModel::C2 => "Timemore C2",
            GrinderModel::C3 => "Timemore C3/C3S",
            GrinderModel::C3Esp => "Timemore C3 ESP",
        }
    }

    /// The unit this model's scale reads in.
    pub fn unit_kind(&self) -> UnitKind {
        match self {
            GrinderModel::Microns => UnitKind::Microns,
            GrinderModel::KMax
            | GrinderModel::Encore
            | GrinderModel::Df54
            | GrinderModel::Ode
            | GrinderModel::HibrewG5 => UnitKind::Setting,
            GrinderModel::QAir
            | GrinderModel::C40
            | GrinderModel::K1
            | GrinderModel::K6
            | GrinderModel::KSeries
            | GrinderModel::C2
            | GrinderModel::C3
            | GrinderModel::C3Esp => UnitKind::Clicks,
        }
    }

    /// Convert a grind size in microns to this model's units.
    pub fn convert(&self, microns: u32) -> GrindReading {
        let m = microns as f64;
        match self {
            GrinderModel::Microns => GrindReading::whole(m),
            // Chart-backed models
            GrinderModel::KMax => GrindReading::tenths(nearest_row(microns).k_max * 10.0),
            GrinderModel::C40 => GrindReading::whole(nearest_row(microns).c40 as f64),
            GrinderModel::Df54 => {
                let v = nearest_row(microns).df54;
                if v.fract().abs() < 1e-9 {
                    GrindReading::whole(v)
                } else {
                    GrindReading::tenths(v)
                }
            }
            GrinderModel::K6 => GrindReading::whole(nearest_row(microns).k6 * 60.0),
            GrinderModel::C3 => GrindReading::whole(nearest_row(microns).c3 as f64),
            // Linear-scale models
            GrinderModel::QAir => GrindReading::whole(m / 10.8),
            GrinderModel::Encore => GrindReading::whole((m / 40.0).round().clamp(1.0, 40.0)),
            GrinderModel::Ode => GrindReading::whole((m / 100.0).round().clamp(1.0, 11.0)),
            GrinderModel::HibrewG5 => GrindReading::tenths((m / 21.0 - 9.0).max(0.0)),
            GrinderModel::K1 => GrindReading::whole(m / 8.6),
            GrinderModel::KSeries => GrindReading::whole(m / 18.0),
            GrinderModel::C2 => GrindReading::whole(m / 35.2),
            GrinderModel::C3Esp => GrindReading::whole(m / 20.0),
        }
    }
}

impl fmt::Display for GrinderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Render a converted reading for display, keyed by unit kind only.
pub fn format_reading(kind: UnitKind, reading: &GrindReading) -> String {
    let v = format!("{:.*}", reading.decimals as usize, reading.value);
    match kind {
        UnitKind::Clicks => format!("{v} Clicks"),
        UnitKind::Setting => format!("Setting {v}"),
        UnitKind::Dial => format!("Dial ~{v}"),
        UnitKind::Microns => v,
    }
}

/// Full conversion label for a grind size, or `None` when no grinder is
/// selected (the raw microns are already on screen).
pub fn conversion_label(grinder: GrinderModel, microns: u32) -> Option<String> {
    if grinder == GrinderModel::Microns {
        return None;
    }
    let reading = grinder.convert(microns);
    Some(format_reading(grinder.unit_kind(), &reading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k6_at_600_microns() {
        let reading = GrinderModel::K6.convert(600);
        assert_eq!(reading.value, 60.0);
        assert_eq!(
            format_reading(GrinderModel::K6.unit_kind(), &reading),
            "60 Clicks"
        );
    }

    #[test]
    fn test_kmax_keeps_one_decimal() {
        let reading = GrinderModel::KMax.convert(800);
        assert_eq!(reading.value, 10.0);
        assert_eq!(
            format_reading(UnitKind::Setting, &reading),
            "Setting 10.0"
        );
    }

    #[test]
    fn test_encore_clamps_to_dial_range() {
        assert_eq!(GrinderModel::Encore.convert(20).value, 1.0);
        assert_eq!(GrinderModel::Encore.convert(10_000).value, 40.0);
        assert_eq!(GrinderModel::Encore.convert(800).value, 20.0);
    }

    #[test]
    fn test_df54_half_settings_show_tenths() {
        let reading = GrinderModel::Df54.convert(340);
        assert_eq!(reading.value, 22.5);
        assert_eq!(reading.decimals, 1);
        let whole = GrinderModel::Df54.convert(600);
        assert_eq!(whole.value, 48.0);
        assert_eq!(whole.decimals, 0);
    }

    #[test]
    fn test_format_is_unit_keyed() {
        let r = GrindReading::whole(5.0);
        assert_eq!(format_reading(UnitKind::Clicks, &r), "5 Clicks");
        assert_eq!(format_reading(UnitKind::Setting, &r), "Setting 5");
        assert_eq!(format_reading(UnitKind::Dial, &r), "Dial ~5");
        assert_eq!(format_reading(UnitKind::Microns, &r), "5");
    }

    #[test]
    fn test_no_label_for_default_grinder() {
        assert_eq!(conversion_label(GrinderModel::Microns, 800), None);
        assert_eq!(
            conversion_label(GrinderModel::C40, 800),
            Some("27 Clicks".to_string())
        );
    }

    #[test]
    fn test_id_round_trip() {
        for g in GrinderModel::ALL {
            assert_eq!(GrinderModel::from_id(g.id()), Some(g));
        }
        assert_eq!(GrinderModel::from_id("WILFA"), None);
    }
}
